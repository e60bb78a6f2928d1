//! Vector helpers.

use alloc::vec::Vec;

pub use fastvec::FastVec;

/// Clamps `index` into the valid insertion range `[0, len]`.
#[inline]
pub const fn insertion_index(index: isize, len: usize) -> usize {
    if index < 0 {
        0
    } else if index as usize > len {
        len
    } else {
        index as usize
    }
}

/// Inserts `item` at `index`, or pushes it when `index` is past the end.
///
/// Negative indices insert at the front. Never panics.
///
/// # Examples
///
/// ```
/// use binder_utils::vec::insert_or_add;
///
/// let mut list = vec![1, 2, 3];
/// insert_or_add(&mut list, 10, 4);
/// insert_or_add(&mut list, -1, 0);
/// insert_or_add(&mut list, 2, 9);
/// assert_eq!(list, [0, 1, 9, 2, 3, 4]);
/// ```
#[inline]
pub fn insert_or_add<T>(list: &mut Vec<T>, index: isize, item: T) {
    let index = insertion_index(index, list.len());
    list.insert(index, item);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn clamps_both_ends() {
        assert_eq!(insertion_index(-5, 3), 0);
        assert_eq!(insertion_index(0, 3), 0);
        assert_eq!(insertion_index(3, 3), 3);
        assert_eq!(insertion_index(isize::MAX, 3), 3);
    }

    #[test]
    fn insert_into_empty() {
        let mut list = Vec::new();
        insert_or_add(&mut list, 7, 'a');
        insert_or_add(&mut list, 0, 'b');
        assert_eq!(list, vec!['b', 'a']);
    }
}
