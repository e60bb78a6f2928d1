use proc_macro2::Span;
use syn::parse::{Parse, ParseStream};
use syn::{Attribute, Expr, Ident, LitStr, Token, Type, spanned::Spanned};

use super::CustomAttributes;

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes on the type itself.
///
/// - `display = "..."` and `@expr`: custom attributes of the type.
/// - `auto_register`: submit the type for `TypeRegistry::auto_register`.
/// - `default`: a `"default"` constructor backed by `Default`.
/// - `property(..)`, `method(..)`, `event(..)`, `nested(..)`: members that
///   are not fields.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub auto_register: Option<Span>,
    pub default: Option<Span>,
    pub custom_attributes: CustomAttributes,
    pub properties: Vec<PropertyDef>,
    pub methods: Vec<MethodDef>,
    pub events: Vec<EventDef>,
    pub nested: Vec<Type>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        super::parse_reflect_attrs(attrs, |input| this.parse_item(input))?;
        Ok(this)
    }

    fn parse_item(&mut self, input: ParseStream) -> syn::Result<()> {
        if input.peek(Token![@]) {
            return self.custom_attributes.parse_inner_stream(input);
        }

        let ident: Ident = input.parse()?;
        match ident.to_string().as_str() {
            "display" => self.custom_attributes.parse_display(&ident, input),
            "auto_register" => super::set_flag(&mut self.auto_register, &ident),
            "default" => super::set_flag(&mut self.default, &ident),
            "property" => {
                let property = PropertyDef::parse(&ident, input)?;
                self.properties.push(property);
                Ok(())
            }
            "method" => {
                let method = MethodDef::parse(&ident, input)?;
                self.methods.push(method);
                Ok(())
            }
            "event" => {
                let event = EventDef::parse(&ident, input)?;
                self.events.push(event);
                Ok(())
            }
            "nested" => {
                let content;
                syn::parenthesized!(content in input);
                let types = content.parse_terminated(Type::parse, Token![,])?;
                self.nested.extend(types);
                Ok(())
            }
            _ => Err(syn::Error::new(
                ident.span(),
                "unknown attribute, expected `display`, `auto_register`, `default`, \
                 `property`, `method`, `event`, `nested` or `@expr`",
            )),
        }
    }
}

/// Runs `parse_item` over the parenthesized list following a member keyword.
fn parse_group(
    input: ParseStream,
    mut parse_item: impl FnMut(ParseStream) -> syn::Result<()>,
) -> syn::Result<()> {
    let content;
    syn::parenthesized!(content in input);
    super::parse_list(&content, &mut parse_item)
}

/// `name = "..."`, or the last segment when `expr` is a plain path.
fn member_name(name: Option<LitStr>, expr: &Expr, keyword: &Ident) -> syn::Result<LitStr> {
    if let Some(name) = name {
        return Ok(name);
    }
    match expr {
        Expr::Path(path) => match path.path.segments.last() {
            Some(segment) => Ok(LitStr::new(&segment.ident.to_string(), segment.ident.span())),
            None => Err(syn::Error::new(path.span(), "expected a path")),
        },
        _ => Err(syn::Error::new(
            keyword.span(),
            format!("`{keyword}` needs `name = \"...\"` when its accessor is not a path"),
        )),
    }
}

// -----------------------------------------------------------------------------
// PropertyDef

/// `property(name = "..", get = .., get_mut = .., set = .., display = "..", @expr)`
///
/// `get` is required and `name` defaults to its last path segment.
pub(crate) struct PropertyDef {
    pub name: LitStr,
    pub get: Expr,
    pub get_mut: Option<Expr>,
    pub set: Option<Expr>,
    pub custom_attributes: CustomAttributes,
}

impl PropertyDef {
    fn parse(keyword: &Ident, input: ParseStream) -> syn::Result<Self> {
        let mut name = None;
        let mut get = None;
        let mut get_mut = None;
        let mut set = None;
        let mut custom_attributes = CustomAttributes::default();

        parse_group(input, |input| {
            if input.peek(Token![@]) {
                return custom_attributes.parse_inner_stream(input);
            }
            let ident: Ident = input.parse()?;
            match ident.to_string().as_str() {
                "name" => super::parse_value(&mut name, &ident, input),
                "get" => super::parse_value(&mut get, &ident, input),
                "get_mut" => super::parse_value(&mut get_mut, &ident, input),
                "set" => super::parse_value(&mut set, &ident, input),
                "display" => custom_attributes.parse_display(&ident, input),
                _ => Err(syn::Error::new(
                    ident.span(),
                    "expected `name`, `get`, `get_mut`, `set`, `display` or `@expr`",
                )),
            }
        })?;

        let Some(get) = get else {
            return Err(syn::Error::new(keyword.span(), "`property` needs `get = ...`"));
        };

        Ok(Self {
            name: member_name(name, &get, keyword)?,
            get,
            get_mut,
            set,
            custom_attributes,
        })
    }
}

// -----------------------------------------------------------------------------
// MethodDef

/// `method(name = "..", call = .. | call_mut = .., display = "..", @expr)`
pub(crate) struct MethodDef {
    pub name: LitStr,
    pub call: Expr,
    pub is_mut: bool,
    pub custom_attributes: CustomAttributes,
}

impl MethodDef {
    fn parse(keyword: &Ident, input: ParseStream) -> syn::Result<Self> {
        let mut name = None;
        let mut call = None;
        let mut call_mut = None;
        let mut custom_attributes = CustomAttributes::default();

        parse_group(input, |input| {
            if input.peek(Token![@]) {
                return custom_attributes.parse_inner_stream(input);
            }
            let ident: Ident = input.parse()?;
            match ident.to_string().as_str() {
                "name" => super::parse_value(&mut name, &ident, input),
                "call" => super::parse_value(&mut call, &ident, input),
                "call_mut" => super::parse_value(&mut call_mut, &ident, input),
                "display" => custom_attributes.parse_display(&ident, input),
                _ => Err(syn::Error::new(
                    ident.span(),
                    "expected `name`, `call`, `call_mut`, `display` or `@expr`",
                )),
            }
        })?;

        let (call, is_mut) = match (call, call_mut) {
            (Some(call), None) => (call, false),
            (None, Some(call)) => (call, true),
            _ => {
                return Err(syn::Error::new(
                    keyword.span(),
                    "`method` needs exactly one of `call = ...` or `call_mut = ...`",
                ));
            }
        };

        Ok(Self {
            name: member_name(name, &call, keyword)?,
            call,
            is_mut,
            custom_attributes,
        })
    }
}

// -----------------------------------------------------------------------------
// EventDef

/// `event(name = "..", handler = Type, display = "..", @expr)`
pub(crate) struct EventDef {
    pub name: LitStr,
    pub handler: Type,
    pub custom_attributes: CustomAttributes,
}

impl EventDef {
    fn parse(keyword: &Ident, input: ParseStream) -> syn::Result<Self> {
        let mut name = None;
        let mut handler = None;
        let mut custom_attributes = CustomAttributes::default();

        parse_group(input, |input| {
            if input.peek(Token![@]) {
                return custom_attributes.parse_inner_stream(input);
            }
            let ident: Ident = input.parse()?;
            match ident.to_string().as_str() {
                "name" => super::parse_value(&mut name, &ident, input),
                "handler" => super::parse_value(&mut handler, &ident, input),
                "display" => custom_attributes.parse_display(&ident, input),
                _ => Err(syn::Error::new(
                    ident.span(),
                    "expected `name`, `handler`, `display` or `@expr`",
                )),
            }
        })?;

        match (name, handler) {
            (Some(name), Some(handler)) => Ok(Self {
                name,
                handler,
                custom_attributes,
            }),
            _ => Err(syn::Error::new(
                keyword.span(),
                "`event` needs `name = \"...\"` and `handler = Type`",
            )),
        }
    }
}
