//! Paths of the `binder_reflect` items named by generated code.
//!
//! Keeping them in one place limits the changes needed when the runtime
//! crate is reorganized.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `binder_reflect` crate.
///
/// 1. For crates that depend on `binder_reflect`, `::binder_reflect` is returned.
/// 2. For crates that depend on `binder`, `::binder::reflect` is returned.
/// 3. Otherwise `::binder_reflect` is returned, which may be incorrect.
///
/// This reads the builder's manifest, so the result is passed around rather
/// than recomputed.
pub(crate) fn binder_reflect() -> syn::Path {
    binder_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("binder_reflect"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn typed_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::info::Typed }
}

#[inline(always)]
pub(crate) fn type_info_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::info::TypeInfo }
}

#[inline(always)]
pub(crate) fn type_info_cell_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::info::TypeInfoCell }
}

#[inline(always)]
pub(crate) fn base_info_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::info::BaseInfo }
}

#[inline(always)]
pub(crate) fn field_info_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::info::FieldInfo }
}

#[inline(always)]
pub(crate) fn property_info_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::info::PropertyInfo }
}

#[inline(always)]
pub(crate) fn method_info_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::info::MethodInfo }
}

#[inline(always)]
pub(crate) fn constructor_info_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::info::ConstructorInfo }
}

#[inline(always)]
pub(crate) fn event_info_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::info::EventInfo }
}

#[inline(always)]
pub(crate) fn nested_type_info_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::info::NestedTypeInfo }
}

#[inline(always)]
pub(crate) fn enum_info_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::info::EnumInfo }
}

#[inline(always)]
pub(crate) fn variant_info_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::info::VariantInfo }
}

#[inline(always)]
pub(crate) fn custom_attributes_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::info::CustomAttributes }
}

#[inline(always)]
pub(crate) fn display_name_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::info::DisplayName }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::__macro_exports::auto_register }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn type_registry_(binder_reflect_path: &syn::Path) -> TokenStream {
    quote! { #binder_reflect_path::registry::TypeRegistry }
}
