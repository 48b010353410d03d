/// The collaborator that owns the canonical list and applies reorder/delete intents.
///
/// Implementations should treat out-of-range indexes defensively: a move may reference an index
/// that went stale if the list was mutated from elsewhere between frames.
pub trait ListMutator<K> {
    fn move_item(&mut self, from: usize, to: usize);

    fn delete(&mut self, key: &K);
}

/// Fire-and-forget haptic feedback, pulsed once when a drag starts.
pub trait HapticFeedback {
    fn long_press(&mut self);
}

impl<F: FnMut()> HapticFeedback for F {
    fn long_press(&mut self) {
        self()
    }
}

/// A [`HapticFeedback`] that does nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {
    fn long_press(&mut self) {}
}
