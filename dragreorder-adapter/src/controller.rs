use alloc::vec::Vec;
use core::fmt;

use dragreorder::{DragController, DragUpdate, HapticFeedback, ListMutator, VisibleWindow};

use crate::key::KeyMap;
use crate::{
    AccessibilityAction, ActionKind, DismissState, DismissValue, Item, ListError, ListKey,
    OverScroll, ReorderOptions, ReorderableList, accessibility_actions,
};

/// A framework-neutral controller that owns the list and wires the drag engine, the auto-scroll
/// job, swipe-to-dismiss and accessibility actions together.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_drag_start` / `on_drag` / `on_drag_end` / `on_drag_cancel` from gesture callbacks
/// - `swipe` / `release_swipe` from a row's horizontal drag
/// - `tick(now_ms)` each frame, scrolling the real list by the returned delta
///
/// After any call that mutates the list, the adapter re-renders from [`Self::list`].
#[derive(Clone, Debug)]
pub struct ReorderController<K, T> {
    list: ReorderableList<K, T>,
    drag: DragController<K>,
    over_scroll: OverScroll,
    dismiss: KeyMap<K, DismissState>,
    options: ReorderOptions,
}

impl<K: ListKey, T> ReorderController<K, T> {
    pub fn new(list: ReorderableList<K, T>, options: ReorderOptions) -> Self {
        Self {
            list,
            drag: DragController::new(options.drag),
            over_scroll: OverScroll::new(
                options.over_scroll_duration_ms,
                options.over_scroll_easing,
            ),
            dismiss: KeyMap::new(),
            options,
        }
    }

    pub fn list(&self) -> &ReorderableList<K, T> {
        &self.list
    }

    pub fn into_list(self) -> ReorderableList<K, T> {
        self.list
    }

    pub fn drag(&self) -> &DragController<K> {
        &self.drag
    }

    pub fn options(&self) -> &ReorderOptions {
        &self.options
    }

    /// Replaces the options. An active scroll job keeps its original timing.
    pub fn set_options(&mut self, options: ReorderOptions) {
        self.drag.set_options(options.drag);
        if !self.over_scroll.is_active() {
            self.over_scroll =
                OverScroll::new(options.over_scroll_duration_ms, options.over_scroll_easing);
        }
        self.options = options;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_scrolling(&self) -> bool {
        self.over_scroll.is_active()
    }

    pub fn on_drag_start(
        &mut self,
        window: &VisibleWindow<K>,
        pointer_y: f32,
        haptics: &mut impl HapticFeedback,
    ) -> bool {
        self.drag.on_drag_start(window, pointer_y, haptics)
    }

    /// Applies a pointer delta, reorders the list if the dragged item crossed a neighbour, and
    /// schedules an auto-scroll job if none is running.
    pub fn on_drag(&mut self, window: &VisibleWindow<K>, delta_y: f32, now_ms: u64) -> DragUpdate {
        let update = self.drag.on_drag(window, delta_y, &mut self.list);
        self.over_scroll.request(update.over_scroll, now_ms);
        update
    }

    pub fn on_drag_end(&mut self) {
        self.drag.on_drag_end();
    }

    pub fn on_drag_cancel(&mut self) {
        self.drag.on_drag_cancel();
    }

    pub fn cancel_scroll(&mut self) {
        self.over_scroll.cancel();
    }

    /// Advances the auto-scroll job. Returns the delta to scroll the list by, if any.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        self.over_scroll.tick(now_ms)
    }

    pub fn item_translation(&self, window: &VisibleWindow<K>, index: usize) -> f32 {
        self.drag.item_translation(window, index)
    }

    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        self.list.move_item(from, to)?;
        self.sync_drag();
        Ok(())
    }

    /// Deletes the item with `key`. Deleting the item being dragged cancels the drag.
    pub fn delete(&mut self, key: &K) -> Option<Item<K, T>> {
        let removed = self.list.delete(key);
        self.dismiss.remove(key);
        self.sync_drag();
        removed
    }

    /// Re-resolves the dragged item's index after a list mutation that did not come from the drag
    /// itself. Cancels the drag if the dragged item is gone.
    fn sync_drag(&mut self) {
        if !self.drag.is_dragging() {
            return;
        }
        match self.drag.dragged_key().and_then(|key| self.list.index_of(key)) {
            Some(index) => self.drag.relocate(index),
            None => {
                adebug!("ReorderController: cancelling drag of deleted item");
                self.drag.on_drag_cancel();
            }
        }
    }

    pub fn dismiss_state(&self, key: &K) -> Option<&DismissState> {
        self.dismiss.get(key)
    }

    /// Applies a horizontal swipe delta to the row with `key`. `width` is the row's laid-out width.
    ///
    /// Returns `false` if no such row exists.
    pub fn swipe(&mut self, key: &K, delta_x: f32, width: f32) -> bool {
        if !self.list.contains_key(key) {
            return false;
        }
        let options = &self.options;
        let state = self.dismiss.entry(key.clone()).or_insert_with(|| {
            DismissState::new(options.dismiss_directions, options.dismiss_threshold)
        });
        state.set_width(width);
        state.on_swipe(delta_x);
        true
    }

    /// Releases a swipe. A row that settles as dismissed toward the start is deleted. Any other
    /// outcome drops the row's swipe state.
    pub fn release_swipe(&mut self, key: &K) -> DismissValue {
        let Some(state) = self.dismiss.get_mut(key) else {
            return DismissValue::Default;
        };
        let value = state.on_release();
        match value {
            DismissValue::DismissedToStart => {
                adebug!("ReorderController::release_swipe: dismissed");
                self.delete(key);
            }
            // Nothing deletes a row dismissed toward the end, so it goes back to rest too.
            DismissValue::Default | DismissValue::DismissedToEnd => {
                self.dismiss.remove(key);
            }
        }
        value
    }

    pub fn perform_accessibility_action(&mut self, action: &AccessibilityAction<K>) {
        atrace!(
            label = action.label.as_str(),
            "ReorderController::perform_accessibility_action"
        );
        match &action.kind {
            ActionKind::Move { from, to } => {
                ListMutator::move_item(&mut self.list, *from, *to);
                self.sync_drag();
            }
            ActionKind::Delete(key) => {
                self.delete(key);
            }
        }
    }
}

impl<K: ListKey + fmt::Display, T> ReorderController<K, T> {
    pub fn accessibility_actions(&self, index: usize) -> Vec<AccessibilityAction<K>> {
        accessibility_actions(&self.list, index)
    }
}
