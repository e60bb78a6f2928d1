use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::Reflect;
use crate::info::CustomAttributes;
use crate::info::{impl_custom_attributes_fn, impl_with_custom_attributes};

// -----------------------------------------------------------------------------
// VariantInfo

/// A single enum variant: its identifier and attributes.
pub struct VariantInfo {
    name: &'static str,
    custom_attributes: CustomAttributes,
}

impl VariantInfo {
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            custom_attributes: CustomAttributes::new(),
        }
    }

    /// The variant identifier as written in source.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for VariantInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// -----------------------------------------------------------------------------
// EnumInfo

/// Variant table of an enum type.
///
/// # Examples
///
/// ```
/// use binder_reflect::info::{CustomAttributes, DisplayName, EnumInfo, VariantInfo};
///
/// enum Coast { Skeleton, Gold }
///
/// let info = EnumInfo::new::<Coast>(
///     [
///         VariantInfo::new("Skeleton")
///             .with_custom_attributes(CustomAttributes::new().with_attribute(DisplayName("Skeleton Coast"))),
///         VariantInfo::new("Gold"),
///     ],
///     |value| match value {
///         Coast::Skeleton => 0,
///         Coast::Gold => 1,
///     },
/// );
///
/// assert_eq!(info.variant_of(&Coast::Gold).unwrap().name(), "Gold");
/// assert_eq!(info.variant_of(&Coast::Skeleton).unwrap().display_name(), Some("Skeleton Coast"));
/// assert!(info.variant_of(&1_u8).is_none());
/// ```
pub struct EnumInfo {
    variants: Box<[VariantInfo]>,
    index_of: Box<dyn Fn(&dyn Reflect) -> Option<usize> + Send + Sync>,
}

impl EnumInfo {
    /// Creates the table for enum `T`; `index_of` maps a value to the
    /// position of its variant in `variants`.
    pub fn new<T: Reflect>(
        variants: impl IntoIterator<Item = VariantInfo>,
        index_of: fn(&T) -> usize,
    ) -> Self {
        Self {
            variants: variants.into_iter().collect::<Vec<_>>().into_boxed_slice(),
            index_of: Box::new(move |value: &dyn Reflect| {
                value.downcast_ref::<T>().map(index_of)
            }),
        }
    }

    #[inline]
    pub fn variants(&self) -> &[VariantInfo] {
        &self.variants
    }

    #[inline]
    pub fn variant(&self, name: &str) -> Option<&VariantInfo> {
        self.variants.iter().find(|variant| variant.name == name)
    }

    #[inline]
    pub fn variant_at(&self, index: usize) -> Option<&VariantInfo> {
        self.variants.get(index)
    }

    /// The variant of `value`, or `None` if `value` is not of this enum.
    pub fn variant_of(&self, value: &dyn Reflect) -> Option<&VariantInfo> {
        (self.index_of)(value).and_then(|index| self.variants.get(index))
    }
}

impl fmt::Debug for EnumInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.variants.iter()).finish()
    }
}
