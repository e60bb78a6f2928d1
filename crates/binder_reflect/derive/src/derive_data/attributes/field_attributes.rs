use proc_macro2::Span;
use syn::{Attribute, Ident, Token, parse::ParseStream};

use super::CustomAttributes;

/// Attributes on a struct field or an enum variant.
///
/// - `base`: the field is the base sub-object; it becomes the type's base
///   link instead of a member.
/// - `skip`: the field is not reflected.
/// - `typed`: registering the owner also registers the field type.
/// - `display = "..."` and `@expr`: custom attributes.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub base: Option<Span>,
    pub skip: Option<Span>,
    pub typed: Option<Span>,
    pub custom_attributes: CustomAttributes,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        super::parse_reflect_attrs(attrs, |input| this.parse_item(input))?;

        if let (Some(_), Some(skip)) = (this.base, this.skip) {
            return Err(syn::Error::new(skip, "a `base` field cannot be skipped"));
        }
        Ok(this)
    }

    fn parse_item(&mut self, input: ParseStream) -> syn::Result<()> {
        if input.peek(Token![@]) {
            return self.custom_attributes.parse_inner_stream(input);
        }

        let ident: Ident = input.parse()?;
        match ident.to_string().as_str() {
            "base" => super::set_flag(&mut self.base, &ident),
            "skip" => super::set_flag(&mut self.skip, &ident),
            "typed" => super::set_flag(&mut self.typed, &ident),
            "display" => self.custom_attributes.parse_display(&ident, input),
            _ => Err(syn::Error::new(
                ident.span(),
                "unknown attribute, expected `base`, `skip`, `typed`, `display` or `@expr`",
            )),
        }
    }

    /// Variants only accept `display` and `@expr`.
    pub fn check_variant(&self) -> syn::Result<()> {
        match self.base.or(self.skip).or(self.typed) {
            Some(span) => Err(syn::Error::new(
                span,
                "enum variants only accept `display` and `@expr`",
            )),
            None => Ok(()),
        }
    }
}
