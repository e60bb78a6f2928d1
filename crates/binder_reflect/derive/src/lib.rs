//! See [`Reflect`](derive_reflect).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Type Metadata Derivation
///
/// `#[derive(Reflect)]` implements `Typed`, describing the type's members in
/// a static `TypeInfo`. `Reflect` itself is implemented for every `'static`
/// type and needs no derive.
///
/// Generic types and unions are rejected.
///
/// ## Fields
///
/// Every named field becomes a field member. Tuple struct fields are named
/// by position (`"0"`, `"1"`, ...). Enum variant fields are not reflected.
///
/// A field whose type is spelled `Option<U>` is marked optional: member
/// paths continue into the content and fail on `None`.
///
/// Field-level attributes:
///
/// - `base`: the field holds the base sub-object. Members of the base type
///   are inherited, and the field itself is not a member.
/// - `skip`: the field is not reflected.
/// - `typed`: registering the owner also registers the field type, which
///   must implement `Typed`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// struct Dog {
///     #[reflect(base)]
///     animal: Animal,
///     #[reflect(typed)]
///     collar: Collar,
///     #[reflect(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// ## Other Members
///
/// Properties, methods, events and nested types are declared at type level:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(property(get = Self::label, set = Self::set_label, display = "Label"))]
/// #[reflect(property(name = "Size", get = Self::size, get_mut = Self::size_mut))]
/// #[reflect(method(call = Self::area), method(name = "Grow", call_mut = Self::grow))]
/// #[reflect(event(name = "Changed", handler = dyn Fn(u32)))]
/// #[reflect(nested(Corner))]
/// #[reflect(default)]
/// struct Shape { /* ... */ }
/// ```
///
/// - `property`: `get` is required, `get_mut` lets paths continue through the
///   property when writing, `set` makes it writable. `name` defaults to the
///   last segment of the `get` path.
/// - `method`: exactly one of `call` (`fn(&Self) -> R`) or `call_mut`
///   (`fn(&mut Self) -> R`). `name` defaults to the last path segment.
/// - `event`: `name` and the `handler` type are required.
/// - `nested`: a list of `Typed` types.
/// - `default`: a constructor named `"default"` backed by `Default`.
///
/// ## Custom Attributes
///
/// The syntax is `#[reflect(@Expr)]`, at type, field, variant and member
/// level. Attributes are stored by type, so a later attribute of the same
/// type replaces an earlier one.
///
/// `display = "..."` is shorthand for `@DisplayName("...")`.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(display = "All These Governors", @0.5_f32)]
/// enum Coast {
///     #[reflect(display = "Skeleton Coast")]
///     Skeleton,
///     Gold,
/// }
/// ```
///
/// ## Auto Registration
///
/// `#[reflect(auto_register)]` submits the type to
/// `TypeRegistry::auto_register`. It is a no-op when the `auto_register`
/// feature is disabled.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    use crate::derive_data::ReflectDerive;

    let ast = parse_macro_input!(input as DeriveInput);

    let derive = match ReflectDerive::from_input(&ast) {
        Ok(derive) => derive,
        Err(err) => return err.into_compile_error().into(),
    };

    let meta = derive.meta();
    let typed_impl = impls::impl_trait_typed(meta, derive.to_info_tokens());
    let auto_register_impl = impls::get_auto_register_impl(meta);

    TokenStream::from(quote! {
        const _: () = {
            #typed_impl
            #auto_register_impl
        };
    })
}
