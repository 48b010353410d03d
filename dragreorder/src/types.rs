/// A laid-out item of the visible window.
///
/// `offset` is measured from the start of the list viewport along the scroll axis and may be
/// negative for an item that is partially scrolled out at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleItem<K> {
    pub key: K,
    /// Absolute index in the ordered list.
    pub index: usize,
    pub offset: i32,
    pub size: u32,
}

impl<K> VisibleItem<K> {
    pub fn new(key: K, index: usize, offset: i32, size: u32) -> Self {
        Self {
            key,
            index,
            offset,
            size,
        }
    }

    pub fn end(&self) -> i32 {
        self.offset.saturating_add_unsigned(self.size)
    }

    /// Hit-test along the scroll axis, both edges inclusive.
    pub fn contains(&self, position: i32) -> bool {
        self.offset <= position && position <= self.end()
    }

    /// Whether this item touches or overlaps `span`.
    pub fn overlaps(&self, span: Span) -> bool {
        !((self.end() as f32) < span.start || (self.offset as f32) > span.end)
    }
}

/// A span along the scroll axis in fractional pointer units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

impl Span {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> f32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragDirection {
    Forward,
    Backward,
}

/// A reorder intent emitted while dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

/// The outcome of a single drag step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragUpdate {
    pub moved: Option<Move>,
    /// Signed distance the list should scroll by to keep the dragged item inside the viewport.
    /// Zero when no auto-scroll is needed.
    pub over_scroll: f32,
}

impl DragUpdate {
    pub fn needs_scroll(&self) -> bool {
        self.over_scroll != 0.0
    }
}
