use syn::{Data, DeriveInput, Fields, spanned::Spanned};

use super::{
    EnumVariant, FieldAttributes, ReflectEnum, ReflectMeta, ReflectStruct, StructField,
    TypeAttributes,
};

/// A parsed `#[derive(Reflect)]` input.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    Enum(ReflectEnum<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        // `TypeInfo` lives in a single static per type, which a generic
        // type cannot provide.
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new(
                input.generics.span(),
                "`#[derive(Reflect)]` does not support generic types",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = ReflectMeta::new(attrs, &input.ident);

        match &input.data {
            Data::Struct(data) => {
                let fields = match &data.fields {
                    Fields::Named(fields) => Some(&fields.named),
                    Fields::Unnamed(fields) => Some(&fields.unnamed),
                    Fields::Unit => None,
                };

                let fields = fields
                    .into_iter()
                    .flatten()
                    .enumerate()
                    .map(|(index, data)| {
                        Ok(StructField {
                            data,
                            attrs: FieldAttributes::parse_attrs(&data.attrs)?,
                            index,
                        })
                    })
                    .collect::<syn::Result<Vec<_>>>()?;

                Ok(Self::Struct(ReflectStruct::new(meta, fields)?))
            }
            Data::Enum(data) => {
                let variants = data
                    .variants
                    .iter()
                    .map(|data| {
                        let attrs = FieldAttributes::parse_attrs(&data.attrs)?;
                        attrs.check_variant()?;
                        Ok(EnumVariant { data, attrs })
                    })
                    .collect::<syn::Result<Vec<_>>>()?;

                Ok(Self::Enum(ReflectEnum::new(meta, variants)))
            }
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span,
                "`#[derive(Reflect)]` does not support unions",
            )),
        }
    }

    pub fn meta(&self) -> &ReflectMeta<'a> {
        match self {
            Self::Struct(data) => data.meta(),
            Self::Enum(data) => data.meta(),
        }
    }

    /// The `TypeInfo` builder expression.
    pub fn to_info_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Self::Struct(data) => data.to_info_tokens(),
            Self::Enum(data) => data.to_info_tokens(),
        }
    }
}
