use alloc::boxed::Box;
use core::any::{Any, TypeId};

use binder_utils::TypeIdMap;

// -----------------------------------------------------------------------------
// CustomAttributes

/// Metadata attached to a type, a member or an enum variant.
///
/// Attributes are stored by their [`TypeId`], so there is at most one
/// attribute per attribute type. They are usually declared with
/// `#[reflect(@expr)]` on a [`#[derive(Reflect)]`](crate::derive::Reflect)
/// type.
///
/// # Example
///
/// ```
/// # use binder_reflect::{derive::Reflect, info::Typed};
/// struct Range(f32, f32);
///
/// #[derive(Reflect)]
/// #[reflect(@false)]
/// struct Slider {
///     #[reflect(@Range(0.0, 10.0))]
///     value: f32,
///     name: String,
/// }
///
/// let info = Slider::type_info();
/// assert!(info.has_attribute::<bool>());
///
/// let value = info.field("value").unwrap();
/// assert_eq!(value.get_attribute::<Range>().unwrap().1, 10.0);
///
/// let name = info.field("name").unwrap();
/// assert!(name.custom_attributes().is_empty());
/// ```
#[derive(Default)]
pub struct CustomAttributes {
    attributes: TypeIdMap<Box<dyn Any + Send + Sync>>,
}

impl CustomAttributes {
    /// Creates an empty [`CustomAttributes`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            attributes: TypeIdMap::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            attributes: TypeIdMap::with_capacity(capacity),
        }
    }

    /// Adds an attribute, replacing an earlier one of the same type.
    #[inline]
    pub fn with_attribute<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.attributes.insert(TypeId::of::<T>(), Box::new(value));
        self
    }

    #[inline]
    pub fn contains<T: Any>(&self) -> bool {
        self.contains_by_id(TypeId::of::<T>())
    }

    #[inline]
    pub fn contains_by_id(&self, id: TypeId) -> bool {
        self.attributes.contains(&id)
    }

    /// Returns the attribute of type `T`, if present.
    #[inline]
    pub fn get<T: Any>(&self) -> Option<&T> {
        self.get_by_id(TypeId::of::<T>())
            .and_then(<dyn Any>::downcast_ref)
    }

    #[inline]
    pub fn get_by_id(&self, id: TypeId) -> Option<&dyn Any> {
        self.attributes
            .get(&id)
            .map(|value| &**value as &dyn Any)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl core::fmt::Debug for CustomAttributes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CustomAttributes")
            .field("len", &self.attributes.len())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// DisplayName

/// Human-readable label for a type, a member or an enum variant.
///
/// Declared with `#[reflect(display = "...")]` or
/// `#[reflect(@DisplayName("..."))]`.
///
/// # Example
///
/// ```
/// # use binder_reflect::{derive::Reflect, info::{DisplayName, Typed}};
/// #[derive(Reflect)]
/// #[reflect(display = "All These Governors")]
/// struct Governors;
///
/// let info = Governors::type_info();
/// assert_eq!(info.get_attribute::<DisplayName>().unwrap().name(), "All These Governors");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayName(pub &'static str);

impl DisplayName {
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

// -----------------------------------------------------------------------------
// Auxiliary macro

/// Implements `custom_attributes` and the `get_attribute` family.
macro_rules! impl_custom_attributes_fn {
    ($field:ident) => {
        /// Returns the attached [`CustomAttributes`](crate::info::CustomAttributes).
        #[inline]
        pub fn custom_attributes(&self) -> &$crate::info::CustomAttributes {
            &self.$field
        }

        /// Returns the attribute of type `T`, if present.
        #[inline]
        pub fn get_attribute<T: ::core::any::Any>(&self) -> Option<&T> {
            self.$field.get::<T>()
        }

        /// Returns `true` if an attribute of type `T` is attached.
        #[inline]
        pub fn has_attribute<T: ::core::any::Any>(&self) -> bool {
            self.$field.contains::<T>()
        }

        /// Returns the [`DisplayName`](crate::info::DisplayName) text, if any.
        #[inline]
        pub fn display_name(&self) -> Option<&'static str> {
            self.$field
                .get::<$crate::info::DisplayName>()
                .map($crate::info::DisplayName::name)
        }
    };
}

/// Implements `with_custom_attributes`.
macro_rules! impl_with_custom_attributes {
    ($field:ident) => {
        /// Replaces stored attributes (overwrite, do not merge).
        #[inline]
        pub fn with_custom_attributes(self, attributes: $crate::info::CustomAttributes) -> Self {
            Self {
                $field: attributes,
                ..self
            }
        }
    };
}

pub(super) use impl_custom_attributes_fn;
pub(super) use impl_with_custom_attributes;

#[cfg(test)]
mod tests {
    use super::{CustomAttributes, DisplayName};

    #[test]
    fn one_attribute_per_type() {
        let attrs = CustomAttributes::new()
            .with_attribute(DisplayName("first"))
            .with_attribute(3_u8)
            .with_attribute(DisplayName("second"));

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get::<DisplayName>(), Some(&DisplayName("second")));
        assert_eq!(attrs.get::<u8>(), Some(&3));
        assert!(!attrs.contains::<u16>());
    }
}
