use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use dragreorder::ListMutator;

use crate::ListKey;
use crate::key::KeySet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    #[error("duplicate key at index {index}")]
    DuplicateKey { index: usize },
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A keyed list entry. Immutable once created; reorders and deletes move it wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item<K, T> {
    key: K,
    value: T,
}

impl<K, T> Item<K, T> {
    pub fn new(key: K, value: T) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_parts(self) -> (K, T) {
        (self.key, self.value)
    }
}

/// The canonical ordered list. Display order is storage order and keys are unique.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReorderableList<K, T> {
    items: Vec<Item<K, T>>,
}

impl<K, T> Default for ReorderableList<K, T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<K: ListKey, T> ReorderableList<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from `(key, value)` pairs in display order.
    pub fn from_items(items: impl IntoIterator<Item = (K, T)>) -> Result<Self, ListError> {
        let items: Vec<Item<K, T>> = items
            .into_iter()
            .map(|(key, value)| Item::new(key, value))
            .collect();

        let mut seen = KeySet::<K>::new();
        for (index, item) in items.iter().enumerate() {
            if !seen.insert(item.key.clone()) {
                return Err(ListError::DuplicateKey { index });
            }
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item<K, T>> {
        self.items.get(index)
    }

    pub fn get_by_key(&self, key: &K) -> Option<&Item<K, T>> {
        self.items.iter().find(|it| &it.key == key)
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.items.iter().position(|it| &it.key == key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index_of(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item<K, T>> {
        self.items.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.items.iter().map(Item::key)
    }

    pub fn as_slice(&self) -> &[Item<K, T>] {
        &self.items
    }

    pub fn push(&mut self, key: K, value: T) -> Result<(), ListError> {
        let len = self.items.len();
        self.insert(len, key, value)
    }

    pub fn insert(&mut self, index: usize, key: K, value: T) -> Result<(), ListError> {
        let len = self.items.len();
        if index > len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        if let Some(existing) = self.index_of(&key) {
            return Err(ListError::DuplicateKey { index: existing });
        }
        self.items.insert(index, Item::new(key, value));
        Ok(())
    }

    /// Removes the item at `from` and re-inserts it at `to`.
    ///
    /// Both indexes refer to the list before the move. On error the list is left untouched.
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), ListError> {
        let len = self.items.len();
        if from >= len {
            return Err(ListError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(ListError::IndexOutOfRange { index: to, len });
        }
        if from == to {
            return Ok(());
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        Ok(())
    }

    /// Removes the item with `key`, keeping the relative order of the rest.
    pub fn delete(&mut self, key: &K) -> Option<Item<K, T>> {
        let index = self.index_of(key)?;
        Some(self.items.remove(index))
    }

    pub fn into_items(self) -> Vec<Item<K, T>> {
        self.items
    }
}

impl<K: ListKey, T> ListMutator<K> for ReorderableList<K, T> {
    fn move_item(&mut self, from: usize, to: usize) {
        if ReorderableList::move_item(self, from, to).is_err() {
            awarn!(from, to, len = self.len(), "ReorderableList: rejected out-of-range move");
        }
    }

    fn delete(&mut self, key: &K) {
        if ReorderableList::delete(self, key).is_none() {
            awarn!("ReorderableList: delete of unknown key");
        }
    }
}

/// The seeded demo data set: keys `1..=count`, each labelled `"id: {key}"`.
pub fn sample_list(count: u64) -> ReorderableList<u64, String> {
    ReorderableList {
        items: (1..=count)
            .map(|id| Item::new(id, format!("id: {id}")))
            .collect(),
    }
}
