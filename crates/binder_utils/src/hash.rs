//! Hash containers with deterministic hashing.
//!
//! [`FixedHashState`] seeds `foldhash` with a constant, so two runs hash the
//! same key to the same value. [`PassThroughState`] is for keys that already
//! are hashes, such as [`TypeId`](core::any::TypeId).

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

pub use foldhash;
pub use hashbrown;

/// A [`hashbrown::HashMap`] hashed with [`FixedHashState`] by default.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] hashed with [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

// -----------------------------------------------------------------------------
// FixedHashState

const SEEDED: FixedState = FixedState::with_seed(0x9E37_79B9_7F4A_7C15);

/// Builds `foldhash` hashers from a constant seed.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use binder_utils::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one("name"), FixedHashState.hash_one("name"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FoldHasher<'static>;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        SEEDED.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// PassThroughState

/// Uses the last `u64` written as the hash.
///
/// Byte writes are folded in, so arbitrary keys still work, just poorly.
#[derive(Copy, Clone, Default, Debug)]
pub struct PassThroughHasher(u64);

impl Hasher for PassThroughHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        self.0 = bytes
            .iter()
            .fold(self.0, |acc, &b| (acc << 8 | acc >> 56) ^ u64::from(b));
    }

    #[inline]
    fn write_u64(&mut self, value: u64) {
        self.0 = value;
    }
}

/// Builds [`PassThroughHasher`]s.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use binder_utils::hash::PassThroughState;
///
/// assert_eq!(PassThroughState.hash_one(7_u64), 7);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct PassThroughState;

impl BuildHasher for PassThroughState {
    type Hasher = PassThroughHasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        PassThroughHasher::default()
    }
}
