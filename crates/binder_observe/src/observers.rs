use alloc::boxed::Box;

use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Identifies one observer; returned by `subscribe` and passed back to
    /// `unsubscribe`.
    pub struct SubscriptionId;
}

/// Storage for boxed observer closures of type `F`, usually a
/// `dyn FnMut(&Event)`.
///
/// Observers are visited in an unspecified order.
pub(crate) struct Observers<F: ?Sized> {
    slots: SlotMap<SubscriptionId, Box<F>>,
}

impl<F: ?Sized> Observers<F> {
    #[inline]
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
        }
    }

    #[inline]
    pub fn insert(&mut self, observer: Box<F>) -> SubscriptionId {
        self.slots.insert(observer)
    }

    /// Returns `false` if `id` was already removed.
    #[inline]
    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        self.slots.remove(id).is_some()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<F>> {
        self.slots.values_mut()
    }
}

impl<F: ?Sized> Default for Observers<F> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_ids_stay_removed() {
        let mut observers: Observers<dyn FnMut(u8) -> u8> = Observers::new();
        let double = observers.insert(Box::new(|x| x * 2));
        observers.insert(Box::new(|x| x + 1));
        assert_eq!(observers.len(), 2);

        assert!(observers.remove(double));
        assert!(!observers.remove(double));

        let results: alloc::vec::Vec<u8> = observers.iter_mut().map(|f| f(3)).collect();
        assert_eq!(results, [4]);

        // A reused slot gets a fresh id.
        let again = observers.insert(Box::new(|x| x));
        assert_ne!(again, double);
    }
}
