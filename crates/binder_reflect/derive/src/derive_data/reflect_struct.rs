use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Index, LitStr, Member};

use super::{FieldAttributes, ReflectMeta};

// -----------------------------------------------------------------------------
// Define

pub(crate) struct ReflectStruct<'a> {
    pub meta: ReflectMeta<'a>,
    pub fields: Vec<StructField<'a>>,
}

/// Represents a field on a struct or tuple struct.
pub(crate) struct StructField<'a> {
    /// The raw field.
    pub data: &'a Field,
    /// The reflection-based attributes on the field.
    pub attrs: FieldAttributes,
    /// The index of this field within the struct.
    pub index: usize,
}

// -----------------------------------------------------------------------------
// StructField Implementation

impl StructField<'_> {
    /// `name` for `struct T { name: .. }`, `0` for `struct T(..)`.
    pub fn member(&self) -> Member {
        match &self.data.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(self.index)),
        }
    }

    /// The reflected name; tuple fields are named by position.
    pub fn name(&self) -> LitStr {
        match &self.data.ident {
            Some(ident) => LitStr::new(&ident.to_string(), ident.span()),
            None => LitStr::new(&self.index.to_string(), proc_macro2::Span::call_site()),
        }
    }

    /// Generates a `TokenStream` for `FieldInfo` construction.
    pub fn to_info_tokens(&self, binder_reflect_path: &syn::Path) -> TokenStream {
        let field_info_ = crate::path::field_info_(binder_reflect_path);
        let ty = &self.data.ty;
        let name = self.name();
        let member = self.member();

        let with_type_info = self.attrs.typed.map(|_| {
            let typed_ = crate::path::typed_(binder_reflect_path);
            quote! { .with_type_info(<#ty as #typed_>::type_info) }
        });

        let with_optional = crate::utils::option_inner(ty).map(|inner| {
            quote! { .with_optional::<#inner>() }
        });

        let with_custom_attributes = self
            .attrs
            .custom_attributes
            .get_expression_with(binder_reflect_path);

        quote! {
            #field_info_::new::<Self, #ty>(
                #name,
                |this| &this.#member,
                |this| &mut this.#member,
            )
            #with_type_info
            #with_optional
            #with_custom_attributes
        }
    }
}

// -----------------------------------------------------------------------------
// Struct Implementation

impl<'a> ReflectStruct<'a> {
    pub fn new(meta: ReflectMeta<'a>, fields: Vec<StructField<'a>>) -> syn::Result<Self> {
        let mut bases = fields.iter().filter_map(|field| field.attrs.base);
        if let (Some(_), Some(second)) = (bases.next(), bases.next()) {
            return Err(syn::Error::new(second, "a type can only have one `base` field"));
        }
        Ok(Self { meta, fields })
    }

    /// Access the metadata associated with this struct definition.
    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields which become members: not skipped and not the base.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields
            .iter()
            .filter(|field| field.attrs.skip.is_none() && field.attrs.base.is_none())
    }

    pub fn base_field(&self) -> Option<&StructField<'a>> {
        self.fields.iter().find(|field| field.attrs.base.is_some())
    }

    pub fn to_info_tokens(&self) -> TokenStream {
        let binder_reflect_path = self.meta.binder_reflect_path();
        let type_info_ = crate::path::type_info_(binder_reflect_path);

        let with_base = self.base_field().map(|field| {
            let base_info_ = crate::path::base_info_(binder_reflect_path);
            let ty = &field.data.ty;
            let member = field.member();
            quote! {
                .with_base(#base_info_::new::<Self, #ty>(
                    |this| &this.#member,
                    |this| &mut this.#member,
                ))
            }
        });

        let fields = self
            .active_fields()
            .map(|field| field.to_info_tokens(binder_reflect_path));

        let with_members = self.meta.with_members_expression();
        let with_custom_attributes = self.meta.with_custom_attributes_expression();

        quote! {
            #type_info_::new::<Self>()
                #with_base
                #( .with_member(#fields) )*
                #with_members
                #with_custom_attributes
        }
    }
}
