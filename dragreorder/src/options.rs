/// Configuration for [`crate::DragController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DragOptions {
    /// Pulse [`crate::HapticFeedback::long_press`] when a drag starts.
    pub haptics_enabled: bool,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            haptics_enabled: true,
        }
    }
}

impl DragOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_haptics(mut self, enabled: bool) -> Self {
        self.haptics_enabled = enabled;
        self
    }
}
