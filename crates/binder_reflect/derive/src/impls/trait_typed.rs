use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Typed`
///
/// `type_info_tokens` is the builder expression from `to_info_tokens` of
/// [`ReflectStruct`] or [`ReflectEnum`]. It runs once, on first access.
///
/// [`ReflectStruct`]: crate::derive_data::ReflectStruct
/// [`ReflectEnum`]: crate::derive_data::ReflectEnum
pub(crate) fn impl_trait_typed(meta: &ReflectMeta, type_info_tokens: TokenStream) -> TokenStream {
    let binder_reflect_path = meta.binder_reflect_path();
    let typed_ = crate::path::typed_(binder_reflect_path);
    let type_info_ = crate::path::type_info_(binder_reflect_path);
    let info_cell = crate::path::type_info_cell_(binder_reflect_path);
    let ident = meta.ident();

    quote! {
        impl #typed_ for #ident {
            fn type_info() -> &'static #type_info_ {
                static CELL: #info_cell = #info_cell::new();
                CELL.get_or_init(|| {
                    #type_info_tokens
                })
            }
        }
    }
}
