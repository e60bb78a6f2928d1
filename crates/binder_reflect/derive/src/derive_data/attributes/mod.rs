//! Parsing of `#[reflect(...)]` attributes.
//!
//! Type, field and variant attributes share the same surface syntax: a
//! comma-separated list of items, where `@expr` adds a custom attribute and
//! `display = "..."` is shorthand for `@DisplayName("...")`.

// -----------------------------------------------------------------------------
// Modules

mod custom_attributes;
mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::Span;
use syn::{Attribute, Ident, Token, parse::ParseStream};

use custom_attributes::CustomAttributes;

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::TypeAttributes;

/// Hands every item of every `#[reflect(...)]` in `attrs` to `parse_item`.
fn parse_reflect_attrs(
    attrs: &[Attribute],
    mut parse_item: impl FnMut(ParseStream) -> syn::Result<()>,
) -> syn::Result<()> {
    for attr in attrs {
        if !attr.path().is_ident(crate::REFLECT_ATTRIBUTE_NAME) {
            continue;
        }
        attr.parse_args_with(|input: ParseStream| parse_list(input, &mut parse_item))?;
    }
    Ok(())
}

/// Parses `item (, item)* ,?` until `input` is exhausted.
fn parse_list(
    input: ParseStream,
    parse_item: &mut impl FnMut(ParseStream) -> syn::Result<()>,
) -> syn::Result<()> {
    while !input.is_empty() {
        parse_item(input)?;
        if input.is_empty() {
            break;
        }
        input.parse::<Token![,]>()?;
    }
    Ok(())
}

/// Records a bare flag such as `base` or `auto_register`.
fn set_flag(slot: &mut Option<Span>, ident: &Ident) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(
            ident.span(),
            format!("duplicate `{ident}` attribute"),
        ));
    }
    *slot = Some(ident.span());
    Ok(())
}

/// Parses `= value` after `ident`, rejecting a second occurrence.
fn parse_value<T: syn::parse::Parse>(
    slot: &mut Option<T>,
    ident: &Ident,
    input: ParseStream,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(
            ident.span(),
            format!("duplicate `{ident}` attribute"),
        ));
    }
    input.parse::<Token![=]>()?;
    *slot = Some(input.parse()?);
    Ok(())
}
