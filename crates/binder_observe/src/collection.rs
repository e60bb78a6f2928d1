//! An ordered list that reports changes to its observers.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use binder_utils::vec::insertion_index;

use crate::observers::{Observers, SubscriptionId};

// -----------------------------------------------------------------------------
// CollectionEvent

/// A change to a [`NotifyingCollection`].
///
/// Single-item operations report `Added`, `Removed` or `Replaced`; batch
/// operations report one `Reset`. Every operation that changes the length,
/// and every batch operation, is followed by `CountChanged`.
#[derive(Debug, PartialEq, Eq)]
pub enum CollectionEvent<'a, T> {
    Added { index: usize, item: &'a T },
    Removed { index: usize, item: &'a T },
    Replaced { index: usize, old: &'a T, new: &'a T },
    /// The contents changed too much to describe item by item.
    Reset,
    CountChanged { count: usize },
}

type Observer<T> = dyn FnMut(&CollectionEvent<'_, T>);

// -----------------------------------------------------------------------------
// NotifyingCollection

/// A `Vec` that notifies observers of every change.
///
/// [`append_range`](Self::append_range) and [`reset`](Self::reset) notify
/// once per call, however many items they touch.
///
/// # Examples
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
/// use binder_observe::{CollectionEvent, NotifyingCollection};
///
/// let mut list = NotifyingCollection::from(vec![1, 1, 1]);
/// let resets = Rc::new(RefCell::new(0));
///
/// let counter = resets.clone();
/// list.subscribe(move |event| {
///     if let CollectionEvent::Reset = event {
///         *counter.borrow_mut() += 1;
///     }
/// });
///
/// list.reset([2, 3]);
/// assert_eq!(list.as_slice(), [2, 3]);
/// assert_eq!(*resets.borrow(), 1);
/// ```
pub struct NotifyingCollection<T> {
    items: Vec<T>,
    observers: Observers<Observer<T>>,
}

impl<T> NotifyingCollection<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            observers: Observers::new(),
        }
    }

    /// Registers an observer for every later change.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&CollectionEvent<'_, T>) + 'static,
    ) -> SubscriptionId {
        self.observers.insert(Box::new(observer))
    }

    /// Returns `false` if `id` is not subscribed.
    #[inline]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    fn notify(observers: &mut Observers<Observer<T>>, event: CollectionEvent<'_, T>) {
        for observer in observers.iter_mut() {
            observer(&event);
        }
    }

    fn notify_count(&mut self) {
        let count = self.items.len();
        Self::notify(&mut self.observers, CollectionEvent::CountChanged { count });
    }

    fn notify_reset(&mut self) {
        Self::notify(&mut self.observers, CollectionEvent::Reset);
        self.notify_count();
    }

    // -------------------------------------------------------------------------
    // Read access

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    // -------------------------------------------------------------------------
    // Single-item changes

    /// Appends `item`.
    pub fn push(&mut self, item: T) {
        let index = self.items.len();
        self.items.push(item);
        Self::notify(
            &mut self.observers,
            CollectionEvent::Added {
                index,
                item: &self.items[index],
            },
        );
        self.notify_count();
    }

    /// Inserts `item` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
        Self::notify(
            &mut self.observers,
            CollectionEvent::Added {
                index,
                item: &self.items[index],
            },
        );
        self.notify_count();
    }

    /// Inserts `item` at `index` clamped to `[0, len]`, so negative indices
    /// insert at the front and indices past the end append.
    #[inline]
    pub fn insert_or_add(&mut self, index: isize, item: T) {
        self.insert(insertion_index(index, self.items.len()), item);
    }

    /// Removes the item at `index`, or returns `None` without notifying if
    /// `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        let item = self.items.remove(index);
        Self::notify(
            &mut self.observers,
            CollectionEvent::Removed { index, item: &item },
        );
        self.notify_count();
        Some(item)
    }

    /// Swaps the item at `index` for `item` and returns the old one.
    ///
    /// Out of range, nothing changes and `item` is handed back in `Err`.
    pub fn replace(&mut self, item: T, index: usize) -> Result<T, T> {
        let Some(slot) = self.items.get_mut(index) else {
            return Err(item);
        };
        let old = core::mem::replace(slot, item);
        Self::notify(
            &mut self.observers,
            CollectionEvent::Replaced {
                index,
                old: &old,
                new: &self.items[index],
            },
        );
        Ok(old)
    }

    // -------------------------------------------------------------------------
    // Batch changes

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.notify_reset();
    }

    /// Appends `items` in order, then notifies once.
    ///
    /// An empty `items` still notifies.
    pub fn append_range(&mut self, items: impl IntoIterator<Item = T>) {
        let before = self.items.len();
        self.items.extend(items);
        log::trace!(
            "append_range: {} items added, {} total",
            self.items.len() - before,
            self.items.len()
        );
        self.notify_reset();
    }

    /// Replaces the contents with `items`, then notifies once.
    ///
    /// An empty `items` still notifies.
    pub fn reset(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.clear();
        self.items.extend(items);
        log::trace!("reset: {} items", self.items.len());
        self.notify_reset();
    }
}

impl<T> Default for NotifyingCollection<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for NotifyingCollection<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            observers: Observers::new(),
        }
    }
}

impl<T> FromIterator<T> for NotifyingCollection<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Index<usize> for NotifyingCollection<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a NotifyingCollection<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for NotifyingCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifyingCollection")
            .field("items", &self.items)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec;
    use core::cell::RefCell;

    /// Subscribes a recorder that renders each event as a string.
    fn record(list: &mut NotifyingCollection<i32>) -> (SubscriptionId, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let id = list.subscribe(move |event| {
            let line = match event {
                CollectionEvent::Added { index, item } => format!("added {item} at {index}"),
                CollectionEvent::Removed { index, item } => format!("removed {item} at {index}"),
                CollectionEvent::Replaced { index, old, new } => {
                    format!("replaced {old} with {new} at {index}")
                }
                CollectionEvent::Reset => String::from("reset"),
                CollectionEvent::CountChanged { count } => format!("count {count}"),
            };
            sink.borrow_mut().push(line);
        });
        (id, log)
    }

    #[test]
    fn append_empty_range_still_notifies_once() {
        let mut list = NotifyingCollection::from(vec![1, 2]);
        let (_, log) = record(&mut list);

        list.append_range([]);

        assert_eq!(list.len(), 2);
        assert_eq!(*log.borrow(), ["reset", "count 2"]);
    }

    #[test]
    fn append_range_notifies_once_for_many_items() {
        let mut list = NotifyingCollection::new();
        let (_, log) = record(&mut list);

        list.append_range(0..100);

        assert_eq!(list.len(), 100);
        assert_eq!(list[99], 99);
        assert_eq!(*log.borrow(), ["reset", "count 100"]);
    }

    #[test]
    fn reset_replaces_contents() {
        let mut list = NotifyingCollection::from(vec![1, 1, 1]);
        let (_, log) = record(&mut list);

        list.reset([2, 3]);

        assert_eq!(list.as_slice(), [2, 3]);
        assert_eq!(*log.borrow(), ["reset", "count 2"]);
    }

    #[test]
    fn reset_to_empty() {
        let mut list = NotifyingCollection::from(vec![1, 2, 3]);
        let (_, log) = record(&mut list);

        list.reset([]);

        assert!(list.is_empty());
        assert_eq!(*log.borrow(), ["reset", "count 0"]);
    }

    #[test]
    fn replace_in_range() {
        let mut list = NotifyingCollection::from(vec![1, 2, 3]);
        let (_, log) = record(&mut list);

        assert_eq!(list.replace(9, 1), Ok(2));

        assert_eq!(list.as_slice(), [1, 9, 3]);
        assert_eq!(*log.borrow(), ["replaced 2 with 9 at 1"]);
    }

    #[test]
    fn replace_out_of_range_is_a_no_op() {
        let mut list = NotifyingCollection::from(vec![1, 2, 3]);
        let (_, log) = record(&mut list);

        assert_eq!(list.replace(9, 3), Err(9));

        assert_eq!(list.as_slice(), [1, 2, 3]);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn single_item_changes() {
        let mut list = NotifyingCollection::new();
        let (_, log) = record(&mut list);

        list.push(1);
        list.insert(0, 0);
        list.insert_or_add(-4, -1);
        list.insert_or_add(50, 2);
        assert_eq!(list.remove(1), Some(0));
        assert_eq!(list.remove(7), None);

        assert_eq!(list.as_slice(), [-1, 1, 2]);
        assert_eq!(
            *log.borrow(),
            [
                "added 1 at 0",
                "count 1",
                "added 0 at 0",
                "count 2",
                "added -1 at 0",
                "count 3",
                "added 2 at 3",
                "count 4",
                "removed 0 at 1",
                "count 3",
            ]
        );
    }

    #[test]
    fn clear_resets() {
        let mut list: NotifyingCollection<i32> = (1..=3).collect();
        let (_, log) = record(&mut list);

        list.clear();

        assert!(list.is_empty());
        assert_eq!(*log.borrow(), ["reset", "count 0"]);
    }

    #[test]
    fn unsubscribed_observers_are_silent() {
        let mut list = NotifyingCollection::new();
        let (id, log) = record(&mut list);
        let (_, other) = record(&mut list);

        assert!(list.unsubscribe(id));
        assert!(!list.unsubscribe(id));
        list.push(5);

        assert!(log.borrow().is_empty());
        assert_eq!(other.borrow().len(), 2);
    }

    #[test]
    fn read_access() {
        let list: NotifyingCollection<_> = vec!['a', 'b'].into();
        assert_eq!(list.get(1), Some(&'b'));
        assert_eq!(list.get(2), None);
        assert_eq!((&list).into_iter().collect::<String>(), "ab");
        assert_eq!(list.iter().count(), 2);
    }
}
