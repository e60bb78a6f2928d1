use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, Path};

use super::TypeAttributes;

/// Type-level data shared by structs and enums.
pub(crate) struct ReflectMeta<'a> {
    binder_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident) -> Self {
        Self {
            attrs,
            ident,
            binder_reflect_path: crate::path::binder_reflect(),
        }
    }

    #[inline]
    pub fn binder_reflect_path(&self) -> &Path {
        &self.binder_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    /// Generate custom attibutes codes
    ///
    /// Similar to following:
    ///
    /// ```ignore
    /// .with_custom_attributes(
    ///     _path_::CustomAttributes::with_capacity(N)
    ///         (.with_attribute( ... ))*
    /// )
    /// ```
    #[inline]
    pub fn with_custom_attributes_expression(&self) -> TokenStream {
        self.attrs
            .custom_attributes
            .get_expression_with(&self.binder_reflect_path)
    }

    /// `.with_member(..)` calls for every member declared at type level:
    /// properties, methods, the default constructor, events and nested types.
    pub fn with_members_expression(&self) -> TokenStream {
        let path = &self.binder_reflect_path;
        let attrs = &self.attrs;

        let properties = attrs.properties.iter().map(|property| {
            let property_info_ = crate::path::property_info_(path);
            let name = &property.name;
            let get = &property.get;
            let with_getter_mut = property.get_mut.as_ref().map(|get_mut| {
                quote! { .with_getter_mut::<Self, _>(#get_mut) }
            });
            let with_setter = property.set.as_ref().map(|set| {
                quote! { .with_setter::<Self, _>(#set) }
            });
            let with_custom_attributes = property.custom_attributes.get_expression_with(path);
            quote! {
                #property_info_::new::<Self, _>(#name, #get)
                    #with_getter_mut
                    #with_setter
                    #with_custom_attributes
            }
        });

        let methods = attrs.methods.iter().map(|method| {
            let method_info_ = crate::path::method_info_(path);
            let name = &method.name;
            let call = &method.call;
            let with_custom_attributes = method.custom_attributes.get_expression_with(path);
            let new = if method.is_mut {
                quote! { new_mut }
            } else {
                quote! { new }
            };
            quote! {
                #method_info_::#new::<Self, _>(#name, #call)
                    #with_custom_attributes
            }
        });

        let constructor = attrs.default.map(|_| {
            let constructor_info_ = crate::path::constructor_info_(path);
            quote! {
                #constructor_info_::new::<Self>("default", <Self as ::core::default::Default>::default)
            }
        });

        let events = attrs.events.iter().map(|event| {
            let event_info_ = crate::path::event_info_(path);
            let name = &event.name;
            let handler = &event.handler;
            let with_custom_attributes = event.custom_attributes.get_expression_with(path);
            quote! {
                #event_info_::new::<#handler>(#name)
                    #with_custom_attributes
            }
        });

        let nested = attrs.nested.iter().map(|ty| {
            let nested_type_info_ = crate::path::nested_type_info_(path);
            quote! { #nested_type_info_::new::<#ty>() }
        });

        let members = properties
            .chain(methods)
            .chain(constructor)
            .chain(events)
            .chain(nested);

        quote! {
            #( .with_member(#members) )*
        }
    }
}
