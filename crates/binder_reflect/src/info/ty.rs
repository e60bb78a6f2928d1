use core::any::{Any, TypeId, type_name};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// Type

/// Identity of a Rust type: its [`TypeId`], full path and short identifier.
///
/// Equality and hashing only consider the `TypeId`.
///
/// # Examples
///
/// ```
/// use binder_reflect::info::Type;
///
/// let ty = Type::of::<Vec<String>>();
/// assert!(ty.is::<Vec<String>>());
/// assert_eq!(ty.ident(), "Vec");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
    ident: &'static str,
}

impl Type {
    /// Creates the [`Type`] of `T`.
    pub fn of<T: ?Sized + Any>() -> Self {
        let path = type_name::<T>();
        Self {
            id: TypeId::of::<T>(),
            path,
            ident: short_ident(path),
        }
    }

    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// The full type path, e.g. `alloc::string::String`.
    #[inline]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// The type name without module path and generics, e.g. `String`.
    #[inline]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    #[inline]
    pub fn is<T: ?Sized + Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

/// Strips generics and module path from a full type path.
pub(crate) fn short_ident(path: &'static str) -> &'static str {
    let base = match path.find('<') {
        Some(index) => &path[..index],
        None => path,
    };
    match base.rfind("::") {
        Some(index) => &base[index + 2..],
        None => base,
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::{Type, short_ident};

    #[test]
    fn short_identifiers() {
        assert_eq!(short_ident("u8"), "u8");
        assert_eq!(short_ident("my_crate::model::Dog"), "Dog");
        assert_eq!(short_ident("alloc::boxed::Box<dyn my_crate::Reflect>"), "Box");
        assert_eq!(short_ident("(i32, f32)"), "(i32, f32)");
    }

    #[test]
    fn identity_is_type_id() {
        assert_eq!(Type::of::<u8>(), Type::of::<u8>());
        assert_ne!(Type::of::<u8>(), Type::of::<i8>());
        assert!(Type::of::<str>().is::<str>());
    }
}
