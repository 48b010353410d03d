use crate::{DragDirection, Move, Span, VisibleItem, VisibleWindow};

/// Transient per-gesture state: the pressed item as it was laid out at press time, the
/// cumulative pointer displacement, and the index the dragged item currently occupies.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragSession<K> {
    anchor: VisibleItem<K>,
    dragged_distance: f32,
    current_index: usize,
}

impl<K> DragSession<K> {
    pub fn new(anchor: VisibleItem<K>) -> Self {
        let current_index = anchor.index;
        Self {
            anchor,
            dragged_distance: 0.0,
            current_index,
        }
    }

    pub fn anchor(&self) -> &VisibleItem<K> {
        &self.anchor
    }

    pub fn key(&self) -> &K {
        &self.anchor.key
    }

    pub fn dragged_distance(&self) -> f32 {
        self.dragged_distance
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The anchor's span shifted by the cumulative displacement. The extent never changes.
    pub fn projected_span(&self) -> Span {
        let start = self.anchor.offset as f32 + self.dragged_distance;
        Span::new(start, start + self.anchor.size as f32)
    }

    pub(crate) fn accumulate(&mut self, delta: f32) {
        self.dragged_distance += delta;
    }

    /// Direction of travel relative to where the hovered item is laid out right now.
    pub fn direction(&self, hovered: &VisibleItem<K>) -> DragDirection {
        if self.projected_span().start - hovered.offset as f32 > 0.0 {
            DragDirection::Forward
        } else {
            DragDirection::Backward
        }
    }

    /// Picks the item the dragged item should swap into, if it has crossed one.
    ///
    /// Candidates are the visible items overlapping the projected span, hovered item excluded.
    /// Moving forward, the first candidate after the hovered index whose far edge has been passed
    /// wins; moving backward, the first candidate before it whose near edge has been passed.
    /// With several qualifying candidates the first in window order is taken.
    pub fn target(&self, window: &VisibleWindow<K>) -> Option<Move> {
        let hovered = window.item_for(self.current_index)?;
        let span = self.projected_span();
        let direction = self.direction(hovered);

        let target = window
            .items()
            .iter()
            .filter(|it| it.index != hovered.index && it.overlaps(span))
            .find(|it| match direction {
                DragDirection::Forward => it.index > hovered.index && span.end > it.end() as f32,
                DragDirection::Backward => {
                    it.index < hovered.index && span.start < it.offset as f32
                }
            })?;

        (target.index != self.current_index).then_some(Move {
            from: self.current_index,
            to: target.index,
        })
    }

    pub(crate) fn set_current_index(&mut self, index: usize) {
        self.current_index = index;
    }
}
