use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use dragreorder::ListMutator;

use crate::{ListKey, ReorderableList};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind<K> {
    Move { from: usize, to: usize },
    Delete(K),
}

/// A custom accessibility action exposed on a row, so reordering and deleting work without
/// gestures.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessibilityAction<K> {
    pub label: String,
    pub kind: ActionKind<K>,
}

impl<K> AccessibilityAction<K> {
    pub fn perform<L>(&self, list: &mut L)
    where
        L: ListMutator<K> + ?Sized,
    {
        match &self.kind {
            ActionKind::Move { from, to } => list.move_item(*from, *to),
            ActionKind::Delete(key) => list.delete(key),
        }
    }
}

/// Builds the actions for the row at `index`: swap with the previous row, swap with the next
/// row, then delete. Swaps are only offered when the neighbour exists.
pub fn accessibility_actions<K, T>(
    list: &ReorderableList<K, T>,
    index: usize,
) -> Vec<AccessibilityAction<K>>
where
    K: ListKey + fmt::Display,
{
    let Some(item) = list.get(index) else {
        return Vec::new();
    };

    let mut actions = Vec::with_capacity(3);
    let neighbours = [index.checked_sub(1), index.checked_add(1)];
    for to in neighbours.into_iter().flatten() {
        if let Some(other) = list.get(to) {
            actions.push(AccessibilityAction {
                label: format!("Swap with id:{}", other.key()),
                kind: ActionKind::Move { from: index, to },
            });
        }
    }
    actions.push(AccessibilityAction {
        label: String::from("Delete"),
        kind: ActionKind::Delete(item.key().clone()),
    });
    actions
}
