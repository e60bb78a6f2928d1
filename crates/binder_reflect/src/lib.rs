//! Reflective member access for data-binding layers.
//!
//! Types describe themselves with a static [`TypeInfo`](info::TypeInfo)
//! table, usually produced by [`#[derive(Reflect)]`](derive::Reflect).
//! On top of that table this crate provides:
//!
//! - [`catalog`]: member enumeration across a base chain, deduplicated so
//!   that the most-derived declaration wins.
//! - [`locate`]: lookup of a single field or property by name.
//! - [`access`]: dotted path reads and writes on live values, resolved
//!   against the runtime type of every intermediate value.
//! - [`display`]: human-readable names for types, enum values and members.
//!
//! # Examples
//!
//! ```
//! use binder_reflect::{derive::Reflect, access::PathAccessor, registry::TypeRegistry};
//!
//! #[derive(Reflect)]
//! struct Animal {
//!     name: String,
//! }
//!
//! #[derive(Reflect)]
//! struct Dog {
//!     #[reflect(base)]
//!     animal: Animal,
//!     good: bool,
//! }
//!
//! let mut registry = TypeRegistry::new();
//! registry.register::<Dog>();
//!
//! let dog = Dog { animal: Animal { name: "Rex".into() }, good: true };
//! let accessor = PathAccessor::new(&registry);
//!
//! assert_eq!(accessor.get_as::<String>(&dog, "name").unwrap(), "Rex");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names `::binder_reflect`, which must also resolve inside
// this crate's own tests and doctests.
extern crate self as binder_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod access;
pub mod catalog;
pub mod display;
pub mod info;
pub mod locate;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use binder_reflect_derive as derive;
pub use reflection::Reflect;
