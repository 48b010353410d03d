use dragreorder::DragOptions;

use crate::{DismissDirections, DismissThreshold, Easing};

/// Configuration for [`crate::ReorderController`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReorderOptions {
    pub drag: DragOptions,
    /// How long one auto-scroll adjustment runs before another may be issued.
    pub over_scroll_duration_ms: u64,
    pub over_scroll_easing: Easing,
    pub dismiss_directions: DismissDirections,
    pub dismiss_threshold: DismissThreshold,
}

impl ReorderOptions {
    pub const DEFAULT_OVER_SCROLL_DURATION_MS: u64 = 16;

    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ReorderOptions {
    fn default() -> Self {
        Self {
            drag: DragOptions::default(),
            over_scroll_duration_ms: Self::DEFAULT_OVER_SCROLL_DURATION_MS,
            over_scroll_easing: Easing::Linear,
            dismiss_directions: DismissDirections::default(),
            dismiss_threshold: DismissThreshold::default(),
        }
    }
}
