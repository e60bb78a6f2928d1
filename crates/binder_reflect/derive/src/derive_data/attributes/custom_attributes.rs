use proc_macro2::TokenStream;
use quote::quote;
use syn::{Expr, Ident, LitStr, Path, Token, parse::ParseStream};

/// A container for custom attribute expressions.
///
/// This corresponds to `binder_reflect::info::CustomAttributes`.
#[derive(Default)]
pub(crate) struct CustomAttributes {
    display: Option<LitStr>,
    attributes: Vec<Expr>,
}

impl CustomAttributes {
    /// Parse `@` attribute.
    ///
    /// Examples:
    /// - `#[reflect(@Foo)]`
    /// - `#[reflect(@Bar::baz("qux"))]`
    /// - `#[reflect(@0..256u8)]`
    pub fn parse_inner_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        input.parse::<Token![@]>()?;
        self.attributes.push(input.parse()?);
        Ok(())
    }

    /// Parse the value of `display = "..."`; the key is already consumed.
    pub fn parse_display(&mut self, ident: &Ident, input: ParseStream) -> syn::Result<()> {
        super::parse_value(&mut self.display, ident, input)
    }

    /// If there are no attributes, this function returns an empty token stream.
    ///
    /// Otherwise, it returns content similar to this:
    ///
    /// ```ignore
    /// .with_custom_attributes(
    ///     _path_::CustomAttributes::with_capacity(N)
    ///         (.with_attribute( ... ))*
    /// )
    /// ```
    ///
    /// `display = "..."` is emitted first, so an explicit `@DisplayName(..)`
    /// overrides it.
    pub fn get_expression_with(&self, binder_reflect_path: &Path) -> TokenStream {
        if self.display.is_none() && self.attributes.is_empty() {
            return crate::utils::empty();
        }

        let capacity = self.attributes.len() + usize::from(self.display.is_some());

        let with_display = self.display.as_ref().map(|display| {
            let display_name_ = crate::path::display_name_(binder_reflect_path);
            quote! {
                .with_attribute(#display_name_(#display))
            }
        });

        let with_attributes = self.attributes.iter().map(|value| {
            quote! {
                .with_attribute(#value)
            }
        });

        let custom_attributes_ = crate::path::custom_attributes_(binder_reflect_path);

        quote! {
            .with_custom_attributes(
                #custom_attributes_::with_capacity(#capacity)
                    #with_display
                    #(#with_attributes)*
            )
        }
    }
}
