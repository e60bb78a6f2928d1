//! The [`TypeRegistry`]: runtime lookup from a value's type to its
//! [`TypeInfo`](crate::info::TypeInfo).

// -----------------------------------------------------------------------------
// Modules

mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_registry::TypeRegistry;
