//! A list that broadcasts its changes, used as the backing store of list views.

use tokio::sync::broadcast;

const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// A change applied to an [`ObservableList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// `count` items were appended starting at `index`
    Added { index: usize, count: usize },
    /// Every item was removed
    Cleared,
}

/// `Vec<T>` plus a broadcast of every change made through it
#[derive(Debug)]
pub struct ObservableList<T> {
    items: Vec<T>,
    changes: broadcast::Sender<ListChange>,
}

impl<T> ObservableList<T> {
    pub fn new() -> Self {
        Self::from(Vec::new())
    }

    /// Receive changes made after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ListChange> {
        self.changes.subscribe()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.notify(ListChange::Added {
            index: self.items.len() - 1,
            count: 1,
        });
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.notify(ListChange::Cleared);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    fn notify(&self, change: ListChange) {
        // No subscribers is fine.
        let _ = self.changes.send(change);
    }
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for ObservableList<T> {
    fn from(items: Vec<T>) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self { items, changes }
    }
}

impl<T> From<ObservableList<T>> for Vec<T> {
    fn from(list: ObservableList<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for ObservableList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T> Extend<T> for ObservableList<T> {
    /// Appends the batch and emits a single `Added` for it.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let index = self.items.len();
        self.items.extend(iter);
        let count = self.items.len() - index;
        if count > 0 {
            self.notify(ListChange::Added { index, count });
        }
    }
}

impl<'a, T> IntoIterator for &'a ObservableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
