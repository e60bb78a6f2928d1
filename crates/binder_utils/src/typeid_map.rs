use core::any::TypeId;
use core::fmt;

use hashbrown::hash_map::Entry;

use crate::hash::{HashMap, PassThroughState};

// -----------------------------------------------------------------------------
// TypeIdMap

/// A map keyed by [`TypeId`].
///
/// A `TypeId` is already a good hash, so keys go through [`PassThroughState`]
/// unchanged.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use binder_utils::TypeIdMap;
///
/// let mut labels = TypeIdMap::new();
/// labels.insert(TypeId::of::<f32>(), "float");
///
/// assert_eq!(labels.get(&TypeId::of::<f32>()), Some(&"float"));
/// assert!(!labels.contains(&TypeId::of::<u8>()));
/// ```
pub struct TypeIdMap<V>(HashMap<TypeId, V, PassThroughState>);

impl<V> TypeIdMap<V> {
    #[inline]
    pub const fn new() -> Self {
        Self(HashMap::with_hasher(PassThroughState))
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(HashMap::with_capacity_and_hasher(capacity, PassThroughState))
    }

    /// Stores `make()` under `type_id` unless the key is taken.
    ///
    /// Returns whether a value was stored; `make` runs only in that case.
    #[inline]
    pub fn try_insert(&mut self, type_id: TypeId, make: impl FnOnce() -> V) -> bool {
        match self.0.entry(type_id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(make());
                true
            }
        }
    }

    /// Stores `value`, returning the one it replaced.
    #[inline]
    pub fn insert(&mut self, type_id: TypeId, value: V) -> Option<V> {
        self.0.insert(type_id, value)
    }

    #[inline]
    pub fn get(&self, type_id: &TypeId) -> Option<&V> {
        self.0.get(type_id)
    }

    #[inline]
    pub fn contains(&self, type_id: &TypeId) -> bool {
        self.0.contains_key(type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Values in arbitrary order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> {
        self.0.values()
    }
}

impl<V> Default for TypeIdMap<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for TypeIdMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.values()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::TypeIdMap;
    use core::any::TypeId;

    #[test]
    fn first_insert_wins() {
        let mut map = TypeIdMap::with_capacity(1);
        let key = TypeId::of::<u8>();

        assert!(map.try_insert(key, || "first"));
        assert!(!map.try_insert(key, || unreachable!()));
        assert_eq!(map.get(&key), Some(&"first"));

        assert_eq!(map.insert(key, "second"), Some("first"));
        assert_eq!(map.values().copied().collect::<alloc::vec::Vec<_>>(), ["second"]);
    }

    #[test]
    fn unsized_keys() {
        let mut map = TypeIdMap::new();
        map.insert(TypeId::of::<str>(), 1);
        map.insert(TypeId::of::<[u8]>(), 2);

        assert_eq!(map.len(), 2);
        assert!(map.contains(&TypeId::of::<str>()));
        assert!(!map.is_empty());
    }
}
