use std::sync::OnceLock;

use crate::Reflect;
use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to a type's [`TypeInfo`].
///
/// Implemented by [`#[derive(Reflect)]`](crate::derive::Reflect), or by hand
/// with a [`TypeInfoCell`].
///
/// # Manually Impl
///
/// ```
/// use binder_reflect::info::{FieldInfo, TypeInfo, TypeInfoCell, Typed};
///
/// struct Health {
///     current: u32,
/// }
///
/// impl Typed for Health {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: TypeInfoCell = TypeInfoCell::new();
///         CELL.get_or_init(|| {
///             TypeInfo::new::<Self>().with_member(FieldInfo::new::<Self, u32>(
///                 "current",
///                 |h| &h.current,
///                 |h| &mut h.current,
///             ))
///         })
///     }
/// }
///
/// assert!(Health::type_info().field("current").is_some());
/// ```
pub trait Typed: Reflect {
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// TypeInfoCell

/// Storage for the `'static` [`TypeInfo`] of a non-generic type.
///
/// The description is built on first access. Do not call the same type's
/// [`Typed::type_info`] from inside the initializer; base and member links
/// are function pointers for that reason.
pub struct TypeInfoCell(OnceLock<TypeInfo>);

impl TypeInfoCell {
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        self.0.get_or_init(f)
    }
}
