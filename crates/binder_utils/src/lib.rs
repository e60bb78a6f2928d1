//! Shared containers and small helpers used across the `binder` workspace.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// No STD Support

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// -----------------------------------------------------------------------------
// Modules

mod rolling_mean;
mod typeid_map;

pub mod hash;
pub mod num;
pub mod text;
pub mod vec;

// -----------------------------------------------------------------------------
// Top-level exports

pub use rolling_mean::RollingMean;
pub use typeid_map::TypeIdMap;
