use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::Variant;

use super::{FieldAttributes, ReflectMeta};

// -----------------------------------------------------------------------------
// Define

pub(crate) struct ReflectEnum<'a> {
    pub meta: ReflectMeta<'a>,
    pub variants: Vec<EnumVariant<'a>>,
}

/// Represents a variant on an enum.
///
/// Variant fields are not reflected; only the variant identity is.
pub(crate) struct EnumVariant<'a> {
    /// The raw variant.
    pub data: &'a Variant,
    /// The reflection-based attributes on the variant.
    pub attrs: FieldAttributes,
}

// -----------------------------------------------------------------------------
// EnumVariant Implementation

impl EnumVariant<'_> {
    /// Generates a `TokenStream` for `VariantInfo` construction.
    pub fn to_info_tokens(&self, binder_reflect_path: &syn::Path) -> TokenStream {
        let variant_info_ = crate::path::variant_info_(binder_reflect_path);
        let name = self.data.ident.to_string();
        let with_custom_attributes = self
            .attrs
            .custom_attributes
            .get_expression_with(binder_reflect_path);

        quote! {
            #variant_info_::new(#name)
                #with_custom_attributes
        }
    }
}

// -----------------------------------------------------------------------------
// Enum Implementation

impl<'a> ReflectEnum<'a> {
    #[inline]
    pub fn new(meta: ReflectMeta<'a>, variants: Vec<EnumVariant<'a>>) -> Self {
        Self { meta, variants }
    }

    /// Access the metadata associated with this enum definition.
    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    pub fn to_info_tokens(&self) -> TokenStream {
        let binder_reflect_path = self.meta.binder_reflect_path();
        let type_info_ = crate::path::type_info_(binder_reflect_path);
        let enum_info_ = crate::path::enum_info_(binder_reflect_path);

        let variant_infos = self
            .variants
            .iter()
            .map(|variant| variant.to_info_tokens(binder_reflect_path));

        // `{ .. }` matches unit, tuple and struct variants alike.
        let arms = self.variants.iter().enumerate().map(|(index, variant)| {
            let ident = &variant.data.ident;
            let index = Literal::usize_unsuffixed(index);
            quote! { Self::#ident { .. } => #index, }
        });

        let with_members = self.meta.with_members_expression();
        let with_custom_attributes = self.meta.with_custom_attributes_expression();

        quote! {
            #type_info_::new::<Self>()
                .with_enum(#enum_info_::new::<Self>(
                    [ #(#variant_infos),* ],
                    |value: &Self| match *value { #(#arms)* },
                ))
                #with_members
                #with_custom_attributes
        }
    }
}
