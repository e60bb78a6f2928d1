//! Static type descriptions.
//!
//! - [`Type`]: `TypeId`, full path and short identifier of a type.
//! - [`TypeInfo`]: a type's base link, declared members, enum variants and
//!   attributes.
//! - [`BaseInfo`]: the link from a type to the base sub-object it extends.
//! - [`MemberInfo`]: one declared member, one of:
//!     - [`FieldInfo`]: stored data, readable and writable in place.
//!     - [`PropertyInfo`]: data behind accessor functions; writable only with a setter.
//!     - [`MethodInfo`]: a callable taking only its receiver.
//!     - [`ConstructorInfo`]: a function producing a new value.
//!     - [`EventInfo`]: a named notification point.
//!     - [`NestedTypeInfo`]: a type declared in the scope of another.
//! - [`EnumInfo`] and [`VariantInfo`]: the variant table of an enum.
//! - [`CustomAttributes`]: side-table of attributes, one per attribute type.
//! - [`DisplayName`]: the attribute carrying a human-readable label.
//! - [`Typed`]: static access to a type's `TypeInfo`.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod enum_info;
mod member_info;
mod ty;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

use attributes::{impl_custom_attributes_fn, impl_with_custom_attributes};

// -----------------------------------------------------------------------------
// Exports

pub use attributes::{CustomAttributes, DisplayName};
pub use enum_info::{EnumInfo, VariantInfo};
pub use member_info::{ConstructorInfo, EventInfo, FieldInfo, MethodInfo};
pub use member_info::{MemberInfo, MemberKind, NestedTypeInfo, PropertyInfo};
pub use member_info::{SlotKey, SlotNamespace};
pub use ty::Type;
pub use type_info::{BaseInfo, TypeInfo};
pub use typed::{TypeInfoCell, Typed};

pub(crate) use ty::short_ident;
