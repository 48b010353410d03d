use alloc::vec::Vec;

use crate::VisibleItem;

/// The subset of the list currently laid out by the host, plus the viewport bounds.
///
/// Items must be in ascending absolute-index order with no holes; this matches what a
/// virtualized list lays out for a contiguous range. The host is expected to rebuild the window
/// whenever layout or the scroll offset changes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow<K> {
    items: Vec<VisibleItem<K>>,
    viewport_start: i32,
    viewport_end: i32,
}

impl<K> Default for VisibleWindow<K> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            viewport_start: 0,
            viewport_end: 0,
        }
    }
}

impl<K> VisibleWindow<K> {
    pub fn new(items: Vec<VisibleItem<K>>, viewport_start: i32, viewport_end: i32) -> Self {
        debug_assert!(
            items.windows(2).all(|w| w[1].index == w[0].index + 1),
            "VisibleWindow: items must be contiguous and ascending"
        );
        debug_assert!(
            viewport_start <= viewport_end,
            "VisibleWindow: viewport_start > viewport_end"
        );
        Self {
            items,
            viewport_start,
            viewport_end,
        }
    }

    pub fn items(&self) -> &[VisibleItem<K>] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn viewport_start(&self) -> i32 {
        self.viewport_start
    }

    pub fn viewport_end(&self) -> i32 {
        self.viewport_end
    }

    pub fn first_index(&self) -> Option<usize> {
        self.items.first().map(|it| it.index)
    }

    /// Looks up a visible item by its absolute list index.
    ///
    /// Returns `None` when the window is empty or the index is outside the laid-out range.
    pub fn item_for(&self, absolute_index: usize) -> Option<&VisibleItem<K>> {
        let first = self.first_index()?;
        let relative = absolute_index.checked_sub(first)?;
        self.items.get(relative)
    }

    /// Finds the first visible item whose span contains `position`.
    pub fn item_at(&self, position: i32) -> Option<&VisibleItem<K>> {
        self.items.iter().find(|it| it.contains(position))
    }
}
