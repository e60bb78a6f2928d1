use crate::derive_data::ReflectMeta;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &ReflectMeta) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    if let Some(span) = meta.attrs().auto_register {
        let binder_reflect_path = meta.binder_reflect_path();
        let auto_register_ = crate::path::auto_register_(binder_reflect_path);
        let type_registry_ = crate::path::type_registry_(binder_reflect_path);
        let ident = meta.ident();

        quote_spanned! { span =>
            #auto_register_::inventory::submit!{
                #auto_register_::AutoRegistration(#type_registry_::register::<#ident>)
            }
        }
    } else {
        crate::utils::empty()
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectMeta) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
