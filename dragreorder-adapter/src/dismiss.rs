/// Direction of a horizontal swipe on a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DismissDirection {
    /// Left to right (positive offset).
    StartToEnd,
    /// Right to left (negative offset).
    EndToStart,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DismissValue {
    #[default]
    Default,
    DismissedToEnd,
    DismissedToStart,
}

/// Which swipe directions a row accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DismissDirections {
    pub start_to_end: bool,
    pub end_to_start: bool,
}

impl Default for DismissDirections {
    fn default() -> Self {
        Self::END_TO_START
    }
}

impl DismissDirections {
    pub const END_TO_START: Self = Self {
        start_to_end: false,
        end_to_start: true,
    };
    pub const BOTH: Self = Self {
        start_to_end: true,
        end_to_start: true,
    };

    pub fn allows(&self, direction: DismissDirection) -> bool {
        match direction {
            DismissDirection::StartToEnd => self.start_to_end,
            DismissDirection::EndToStart => self.end_to_start,
        }
    }
}

/// How far a row must travel before releasing it dismisses it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DismissThreshold {
    /// An absolute distance in layout units.
    Fixed(f32),
    /// A fraction of the row width.
    Fractional(f32),
}

impl Default for DismissThreshold {
    fn default() -> Self {
        Self::Fixed(56.0)
    }
}

impl DismissThreshold {
    pub fn distance(self, width: f32) -> f32 {
        match self {
            Self::Fixed(d) => d,
            Self::Fractional(f) => f * width,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DismissColor {
    Neutral,
    Confirm,
    Destructive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DismissIcon {
    Done,
    Delete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DismissAlignment {
    Start,
    End,
}

/// What to paint behind a row that is being swiped.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DismissBackground {
    pub color: DismissColor,
    pub icon: DismissIcon,
    pub alignment: DismissAlignment,
    pub icon_scale: f32,
}

/// Swipe-to-dismiss state for a single row.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DismissState {
    offset: f32,
    width: f32,
    value: DismissValue,
    directions: DismissDirections,
    threshold: DismissThreshold,
}

impl DismissState {
    pub fn new(directions: DismissDirections, threshold: DismissThreshold) -> Self {
        Self {
            directions,
            threshold,
            ..Self::default()
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn current_value(&self) -> DismissValue {
        self.value
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width.max(0.0);
    }

    /// Applies a horizontal drag delta, clamped to the allowed directions.
    pub fn on_swipe(&mut self, delta_x: f32) {
        let mut next = self.offset + delta_x;
        if !self.directions.allows(DismissDirection::StartToEnd) {
            next = next.min(0.0);
        }
        if !self.directions.allows(DismissDirection::EndToStart) {
            next = next.max(0.0);
        }
        self.offset = next;
    }

    pub fn dismiss_direction(&self) -> Option<DismissDirection> {
        if self.offset > 0.0 {
            Some(DismissDirection::StartToEnd)
        } else if self.offset < 0.0 {
            Some(DismissDirection::EndToStart)
        } else {
            None
        }
    }

    /// The value the row would settle to if released now.
    pub fn target_value(&self) -> DismissValue {
        let Some(direction) = self.dismiss_direction() else {
            return DismissValue::Default;
        };
        let distance = if self.offset < 0.0 {
            -self.offset
        } else {
            self.offset
        };
        if self.width <= 0.0 || distance < self.threshold.distance(self.width) {
            return DismissValue::Default;
        }
        match direction {
            DismissDirection::StartToEnd => DismissValue::DismissedToEnd,
            DismissDirection::EndToStart => DismissValue::DismissedToStart,
        }
    }

    /// Settles the row. Anything short of the threshold snaps back to rest.
    pub fn on_release(&mut self) -> DismissValue {
        let value = self.target_value();
        if value == DismissValue::Default {
            self.offset = 0.0;
        }
        self.value = value;
        value
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.value = DismissValue::Default;
    }

    pub fn background(&self) -> Option<DismissBackground> {
        let direction = self.dismiss_direction()?;
        let target = self.target_value();
        let color = match target {
            DismissValue::Default => DismissColor::Neutral,
            DismissValue::DismissedToEnd => DismissColor::Confirm,
            DismissValue::DismissedToStart => DismissColor::Destructive,
        };
        let (icon, alignment) = match direction {
            DismissDirection::StartToEnd => (DismissIcon::Done, DismissAlignment::Start),
            DismissDirection::EndToStart => (DismissIcon::Delete, DismissAlignment::End),
        };
        let icon_scale = if target == DismissValue::Default {
            0.75
        } else {
            1.0
        };
        Some(DismissBackground {
            color,
            icon,
            alignment,
            icon_scale,
        })
    }
}
