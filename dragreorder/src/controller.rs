use crate::{
    DragOptions, DragPhase, DragSession, DragUpdate, HapticFeedback, ListMutator, VisibleItem,
    VisibleWindow,
};

/// A headless long-press drag-to-reorder state machine.
///
/// The controller is driven by the host's gesture callbacks and never holds UI objects. Each
/// callback receives the current [`VisibleWindow`], so the controller always reasons about the
/// latest layout:
/// - `on_drag_start` once the long-press is recognized
/// - `on_drag` for every pointer move
/// - `on_drag_end` / `on_drag_cancel` when the gesture finishes
///
/// Reorders are emitted to a [`ListMutator`]. Auto-scroll is reported back through
/// [`DragUpdate::over_scroll`]; scheduling the actual scroll is left to the caller (see the
/// `dragreorder-adapter` crate for a cancellable scroll job).
#[derive(Clone, Debug)]
pub struct DragController<K> {
    options: DragOptions,
    session: Option<DragSession<K>>,
}

impl<K: Clone> Default for DragController<K> {
    fn default() -> Self {
        Self::new(DragOptions::default())
    }
}

impl<K: Clone> DragController<K> {
    pub fn new(options: DragOptions) -> Self {
        Self {
            options,
            session: None,
        }
    }

    pub fn options(&self) -> &DragOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: DragOptions) {
        self.options = options;
    }

    pub fn phase(&self) -> DragPhase {
        if self.session.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession<K>> {
        self.session.as_ref()
    }

    /// The absolute index the dragged item occupies right now.
    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(DragSession::current_index)
    }

    pub fn dragged_key(&self) -> Option<&K> {
        self.session.as_ref().map(DragSession::key)
    }

    /// Cumulative pointer displacement since the press. Zero while idle.
    pub fn dragged_distance(&self) -> f32 {
        self.session
            .as_ref()
            .map_or(0.0, DragSession::dragged_distance)
    }

    /// Starts a drag for the item under `pointer_y`.
    ///
    /// Returns `false` (and stays idle) when no visible item contains the pointer. A start while
    /// already dragging replaces the previous session.
    pub fn on_drag_start(
        &mut self,
        window: &VisibleWindow<K>,
        pointer_y: f32,
        haptics: &mut impl HapticFeedback,
    ) -> bool {
        let position = pointer_y as i32;
        let Some(item) = window.item_at(position) else {
            rtrace!(position, "DragController::on_drag_start: no item under pointer");
            return false;
        };

        if self.session.is_some() {
            rwarn!("DragController::on_drag_start: replacing an unfinished session");
        }

        rdebug!(
            index = item.index,
            offset = item.offset,
            size = item.size,
            "DragController::on_drag_start"
        );
        self.session = Some(DragSession::new(item.clone()));
        if self.options.haptics_enabled {
            haptics.long_press();
        }
        true
    }

    /// Applies a vertical pointer delta.
    ///
    /// Emits at most one move per call, and only when the hovered index actually changes.
    pub fn on_drag<L>(&mut self, window: &VisibleWindow<K>, delta_y: f32, list: &mut L) -> DragUpdate
    where
        L: ListMutator<K> + ?Sized,
    {
        let Some(session) = self.session.as_mut() else {
            return DragUpdate::default();
        };
        session.accumulate(delta_y);

        let moved = session.target(window);
        if let Some(m) = moved {
            rtrace!(from = m.from, to = m.to, "DragController::on_drag: move");
            list.move_item(m.from, m.to);
            session.set_current_index(m.to);
        }

        DragUpdate {
            moved,
            over_scroll: self.over_scroll(window),
        }
    }

    pub fn on_drag_end(&mut self) {
        rdebug!(
            index = self.current_index(),
            distance = self.dragged_distance(),
            "DragController::on_drag_end"
        );
        self.session = None;
    }

    pub fn on_drag_cancel(&mut self) {
        rdebug!(
            index = self.current_index(),
            distance = self.dragged_distance(),
            "DragController::on_drag_cancel"
        );
        self.session = None;
    }

    /// Points the session at `index` after the list was changed outside of [`Self::on_drag`],
    /// e.g. a row above the dragged one was deleted. No-op while idle.
    pub fn relocate(&mut self, index: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.current_index() != index {
            rdebug!(
                from = session.current_index(),
                to = index,
                "DragController::relocate"
            );
            session.set_current_index(index);
        }
    }

    /// How far the projected span overflows the viewport in the direction of travel.
    ///
    /// Positive when dragging down past `viewport_end`, negative when dragging up past
    /// `viewport_start`, zero otherwise (and while idle).
    pub fn over_scroll(&self, window: &VisibleWindow<K>) -> f32 {
        let Some(session) = &self.session else {
            return 0.0;
        };
        let span = session.projected_span();
        let distance = session.dragged_distance();

        if distance > 0.0 {
            let diff = span.end - window.viewport_end() as f32;
            if diff > 0.0 { diff } else { 0.0 }
        } else if distance < 0.0 {
            let diff = span.start - window.viewport_start() as f32;
            if diff < 0.0 { diff } else { 0.0 }
        } else {
            0.0
        }
    }

    /// The hovered item as currently laid out, if visible.
    pub fn hovered_item<'w>(&self, window: &'w VisibleWindow<K>) -> Option<&'w VisibleItem<K>> {
        window.item_for(self.current_index()?)
    }

    /// The translation to apply to the item rendered at `index` so the dragged item floats under
    /// the pointer while the list reflows beneath it.
    ///
    /// Zero for every index other than the current one.
    pub fn item_translation(&self, window: &VisibleWindow<K>, index: usize) -> f32 {
        let Some(session) = &self.session else {
            return 0.0;
        };
        if index != session.current_index() {
            return 0.0;
        }
        window.item_for(index).map_or(0.0, |hovered| {
            session.anchor().offset as f32 + session.dragged_distance() - hovered.offset as f32
        })
    }
}
