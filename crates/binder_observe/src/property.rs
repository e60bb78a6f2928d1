//! Property-changed notification for plain structs.

use alloc::boxed::Box;
use core::fmt;

use crate::observers::{Observers, SubscriptionId};

/// The notification sent when a property changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyChanged<'a> {
    /// Name of the changed property.
    pub property: &'a str,
}

type Observer = dyn FnMut(&PropertyChanged<'_>);

/// A list of property-changed observers, meant to be embedded in a struct
/// next to the fields it reports on.
///
/// # Examples
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
/// use binder_observe::PropertyNotifier;
///
/// #[derive(Default)]
/// struct Settings {
///     volume: u8,
///     notifier: PropertyNotifier,
/// }
///
/// impl Settings {
///     fn set_volume(&mut self, volume: u8) -> bool {
///         self.notifier.set(&mut self.volume, volume, "volume")
///     }
/// }
///
/// let changes = Rc::new(RefCell::new(Vec::new()));
/// let mut settings = Settings::default();
///
/// let sink = changes.clone();
/// settings.notifier.subscribe(move |changed| sink.borrow_mut().push(changed.property.to_owned()));
///
/// assert!(settings.set_volume(7));
/// assert!(!settings.set_volume(7));
/// assert_eq!(*changes.borrow(), ["volume"]);
/// ```
pub struct PropertyNotifier {
    observers: Observers<Observer>,
}

impl PropertyNotifier {
    #[inline]
    pub fn new() -> Self {
        Self {
            observers: Observers::new(),
        }
    }

    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&PropertyChanged<'_>) + 'static,
    ) -> SubscriptionId {
        self.observers.insert(Box::new(observer))
    }

    /// Returns `false` if `id` is not subscribed.
    #[inline]
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id)
    }

    /// Notifies every observer that `property` changed.
    pub fn raise(&mut self, property: &str) {
        let changed = PropertyChanged { property };
        for observer in self.observers.iter_mut() {
            observer(&changed);
        }
    }

    /// Assigns `value` to `field` and raises `property`, unless the two
    /// are already equal.
    ///
    /// Returns whether the field changed.
    pub fn set<T: PartialEq>(&mut self, field: &mut T, value: T, property: &str) -> bool {
        if *field == value {
            return false;
        }
        *field = value;
        self.raise(property);
        true
    }

    /// Drops every observer. Later notifications reach no one.
    #[inline]
    pub fn clear(&mut self) {
        self.observers.clear();
    }
}

impl Default for PropertyNotifier {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PropertyNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyNotifier")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::rc::Rc;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use core::cell::RefCell;

    fn record(notifier: &mut PropertyNotifier) -> (SubscriptionId, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let id = notifier.subscribe(move |changed| sink.borrow_mut().push(changed.property.to_string()));
        (id, log)
    }

    #[test]
    fn set_raises_only_on_change() {
        let mut notifier = PropertyNotifier::new();
        let (_, log) = record(&mut notifier);
        let mut name = String::from("Rex");

        assert!(!notifier.set(&mut name, String::from("Rex"), "name"));
        assert!(notifier.set(&mut name, String::from("Fido"), "name"));

        assert_eq!(name, "Fido");
        assert_eq!(*log.borrow(), ["name"]);
    }

    #[test]
    fn raise_reaches_every_observer() {
        let mut notifier = PropertyNotifier::new();
        let (_, first) = record(&mut notifier);
        let (second_id, second) = record(&mut notifier);

        notifier.raise("size");
        assert!(notifier.unsubscribe(second_id));
        notifier.raise("color");

        assert_eq!(*first.borrow(), ["size", "color"]);
        assert_eq!(*second.borrow(), ["size"]);
    }

    #[test]
    fn clear_drops_observers() {
        let mut notifier = PropertyNotifier::new();
        let (_, log) = record(&mut notifier);

        notifier.clear();
        notifier.raise("anything");

        assert!(log.borrow().is_empty());
        assert_eq!(format!("{notifier:?}"), "PropertyNotifier { observers: 0 }");
    }
}
