use alloc::boxed::Box;
use core::any::Any;
use core::fmt;

use crate::Reflect;
use crate::info::{CustomAttributes, Type, TypeInfo, Typed};
use crate::info::{impl_custom_attributes_fn, impl_with_custom_attributes};
use crate::reflection::take_value;

// -----------------------------------------------------------------------------
// Erased accessors

pub(crate) type GetFn =
    Box<dyn for<'a> Fn(&'a dyn Reflect) -> Option<&'a dyn Reflect> + Send + Sync>;

pub(crate) type GetMutFn =
    Box<dyn for<'a> Fn(&'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> + Send + Sync>;

type SetFn =
    Box<dyn Fn(&mut dyn Reflect, Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> + Send + Sync>;

type CallRefFn = Box<dyn Fn(&dyn Reflect) -> Option<Box<dyn Reflect>> + Send + Sync>;

type CallMutFn = Box<dyn Fn(&mut dyn Reflect) -> Option<Box<dyn Reflect>> + Send + Sync>;

// The helpers pin the closure signatures to the higher-ranked form.

fn getter<F>(f: F) -> GetFn
where
    F: for<'a> Fn(&'a dyn Reflect) -> Option<&'a dyn Reflect> + Send + Sync + 'static,
{
    Box::new(f)
}

fn getter_mut<F>(f: F) -> GetMutFn
where
    F: for<'a> Fn(&'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> + Send + Sync + 'static,
{
    Box::new(f)
}

fn setter<F>(f: F) -> SetFn
where
    F: Fn(&mut dyn Reflect, Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>
        + Send
        + Sync
        + 'static,
{
    Box::new(f)
}

pub(crate) fn erase_get<T: Reflect, V: Reflect>(get: fn(&T) -> &V) -> GetFn {
    getter(move |owner| {
        owner
            .downcast_ref::<T>()
            .map(|owner| get(owner) as &dyn Reflect)
    })
}

pub(crate) fn erase_get_mut<T: Reflect, V: Reflect>(get_mut: fn(&mut T) -> &mut V) -> GetMutFn {
    getter_mut(move |owner| {
        owner
            .downcast_mut::<T>()
            .map(|owner| get_mut(owner) as &mut dyn Reflect)
    })
}

fn erase_assign<T: Reflect, V: Reflect>(get_mut: fn(&mut T) -> &mut V) -> SetFn {
    setter(move |owner, value| {
        let Some(owner) = owner.downcast_mut::<T>() else {
            return Err(value);
        };
        *get_mut(owner) = take_value::<V>(value)?;
        Ok(())
    })
}

fn erase_set<T: Reflect, V: Reflect>(set: fn(&mut T, V)) -> SetFn {
    setter(move |owner, value| {
        let Some(owner) = owner.downcast_mut::<T>() else {
            return Err(value);
        };
        set(owner, take_value::<V>(value)?);
        Ok(())
    })
}

// -----------------------------------------------------------------------------
// Optional values

/// Projection from an `Option<U>` value to its content.
struct Optional {
    get: GetFn,
    get_mut: GetMutFn,
}

impl Optional {
    fn of<U: Reflect>() -> Self {
        Self {
            get: getter(|value| {
                let inner = value.downcast_ref::<Option<U>>()?.as_ref()?;
                Some(inner as &dyn Reflect)
            }),
            get_mut: getter_mut(|value| {
                let inner = value.downcast_mut::<Option<U>>()?.as_mut()?;
                Some(inner as &mut dyn Reflect)
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// Kinds and slots

/// The closed set of member kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Property,
    Method,
    Constructor,
    Event,
    NestedType,
}

impl MemberKind {
    /// Every kind, in the order members are reported by the catalog.
    pub const ALL: [MemberKind; 6] = [
        Self::Field,
        Self::Property,
        Self::Method,
        Self::Constructor,
        Self::Event,
        Self::NestedType,
    ];

    /// The namespace a member of this kind occupies.
    ///
    /// Fields and properties share [`SlotNamespace::Data`].
    #[inline]
    pub const fn namespace(self) -> SlotNamespace {
        match self {
            Self::Field | Self::Property => SlotNamespace::Data,
            Self::Method => SlotNamespace::Method,
            Self::Constructor => SlotNamespace::Constructor,
            Self::Event => SlotNamespace::Event,
            Self::NestedType => SlotNamespace::Type,
        }
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::Property => "property",
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::Event => "event",
            Self::NestedType => "nested type",
        }
    }
}

impl fmt::Display for MemberKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotNamespace {
    Data,
    Method,
    Constructor,
    Event,
    Type,
}

/// Logical slot identity of a member.
///
/// Two declarations at different levels of a base chain with the same key
/// are the same slot; the more derived one overrides the other.
///
/// A field and a property of the same name on one level also share a slot.
/// The catalog then reports the field, since fields are listed first, while
/// [`locate`](crate::locate::locate) prefers the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub namespace: SlotNamespace,
    pub name: &'static str,
}

// -----------------------------------------------------------------------------
// FieldInfo

/// A stored data member, read and written in place.
///
/// # Examples
///
/// ```
/// use binder_reflect::info::FieldInfo;
///
/// struct Point { x: f32 }
///
/// let field = FieldInfo::new::<Point, f32>("x", |p| &p.x, |p| &mut p.x);
/// let mut point = Point { x: 1.0 };
///
/// assert!(field.ty().is::<f32>());
/// assert_eq!(field.get(&point).unwrap().downcast_ref::<f32>(), Some(&1.0));
///
/// field.set(&mut point, Box::new(4.0_f32)).unwrap();
/// assert_eq!(point.x, 4.0);
/// ```
pub struct FieldInfo {
    name: &'static str,
    ty: Type,
    // Resolved lazily so that self-referential type graphs can be described.
    type_info: Option<fn() -> &'static TypeInfo>,
    optional: Option<Optional>,
    get: GetFn,
    get_mut: GetMutFn,
    set: SetFn,
    custom_attributes: CustomAttributes,
}

impl FieldInfo {
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Creates a field of type `V` on owner `T`.
    pub fn new<T: Reflect, V: Reflect>(
        name: &'static str,
        get: fn(&T) -> &V,
        get_mut: fn(&mut T) -> &mut V,
    ) -> Self {
        Self {
            name,
            ty: Type::of::<V>(),
            type_info: None,
            optional: None,
            get: erase_get(get),
            get_mut: erase_get_mut(get_mut),
            set: erase_assign(get_mut),
            custom_attributes: CustomAttributes::new(),
        }
    }

    /// Links the [`TypeInfo`] of the field type, so that registering the
    /// owner also registers it.
    #[inline]
    pub fn with_type_info(self, type_info: fn() -> &'static TypeInfo) -> Self {
        Self {
            type_info: Some(type_info),
            ..self
        }
    }

    /// Marks the field as an `Option<U>`: path access continues into the
    /// content and fails on `None`.
    ///
    /// The derive does this for fields declared as `Option<U>`.
    pub fn with_optional<U: Reflect>(self) -> Self {
        debug_assert!(self.ty.is::<Option<U>>(), "field `{}` is not an `Option<U>`", self.name);
        Self {
            optional: Some(Optional::of::<U>()),
            ..self
        }
    }

    #[inline]
    pub const fn is_optional(&self) -> bool {
        self.optional.is_some()
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub fn type_info(&self) -> Option<&'static TypeInfo> {
        self.type_info.map(|f| f())
    }

    /// Reads the field, or `None` if `owner` is not of the declaring type.
    #[inline]
    pub fn get<'a>(&self, owner: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        (self.get)(owner)
    }

    #[inline]
    pub fn get_mut<'a>(&self, owner: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> {
        (self.get_mut)(owner)
    }

    /// Replaces the field value, handing `value` back if either the owner
    /// or the value has the wrong type.
    #[inline]
    pub fn set(
        &self,
        owner: &mut dyn Reflect,
        value: Box<dyn Reflect>,
    ) -> Result<(), Box<dyn Reflect>> {
        (self.set)(owner, value)
    }
}

// -----------------------------------------------------------------------------
// PropertyInfo

/// A data member exposed through accessor functions.
///
/// A property is always readable and writable only if it has a setter.
/// Without a mutable getter, path access cannot continue through it when
/// writing.
///
/// # Examples
///
/// ```
/// use binder_reflect::info::PropertyInfo;
///
/// struct Label { text: String }
///
/// impl Label {
///     fn text(&self) -> &String { &self.text }
///     fn set_text(&mut self, text: String) { self.text = text.trim().to_owned(); }
/// }
///
/// let read_only = PropertyInfo::new::<Label, String>("Text", Label::text);
/// assert!(!read_only.is_writable());
///
/// let property = read_only.with_setter::<Label, String>(Label::set_text);
/// let mut label = Label { text: String::new() };
/// property.set(&mut label, Box::new(String::from(" Rex "))).unwrap();
/// assert_eq!(label.text, "Rex");
/// ```
pub struct PropertyInfo {
    name: &'static str,
    ty: Type,
    type_info: Option<fn() -> &'static TypeInfo>,
    optional: Option<Optional>,
    get: GetFn,
    get_mut: Option<GetMutFn>,
    set: Option<SetFn>,
    custom_attributes: CustomAttributes,
}

impl PropertyInfo {
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Creates a read-only property of type `V` on owner `T`.
    pub fn new<T: Reflect, V: Reflect>(name: &'static str, get: fn(&T) -> &V) -> Self {
        Self {
            name,
            ty: Type::of::<V>(),
            type_info: None,
            optional: None,
            get: erase_get(get),
            get_mut: None,
            set: None,
            custom_attributes: CustomAttributes::new(),
        }
    }

    /// Adds a mutable getter, used to walk through this property.
    pub fn with_getter_mut<T: Reflect, V: Reflect>(self, get_mut: fn(&mut T) -> &mut V) -> Self {
        debug_assert!(self.ty.is::<V>(), "property `{}` getter types differ", self.name);
        Self {
            get_mut: Some(erase_get_mut(get_mut)),
            ..self
        }
    }

    /// Adds a setter, making the property writable.
    pub fn with_setter<T: Reflect, V: Reflect>(self, set: fn(&mut T, V)) -> Self {
        debug_assert!(self.ty.is::<V>(), "property `{}` setter type differs", self.name);
        Self {
            set: Some(erase_set(set)),
            ..self
        }
    }

    #[inline]
    pub fn with_type_info(self, type_info: fn() -> &'static TypeInfo) -> Self {
        Self {
            type_info: Some(type_info),
            ..self
        }
    }

    /// See [`FieldInfo::with_optional`].
    pub fn with_optional<U: Reflect>(self) -> Self {
        debug_assert!(self.ty.is::<Option<U>>(), "property `{}` is not an `Option<U>`", self.name);
        Self {
            optional: Some(Optional::of::<U>()),
            ..self
        }
    }

    #[inline]
    pub const fn is_optional(&self) -> bool {
        self.optional.is_some()
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub fn type_info(&self) -> Option<&'static TypeInfo> {
        self.type_info.map(|f| f())
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        self.set.is_some()
    }

    #[inline]
    pub const fn has_getter_mut(&self) -> bool {
        self.get_mut.is_some()
    }

    #[inline]
    pub fn get<'a>(&self, owner: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        (self.get)(owner)
    }

    /// Returns `None` if there is no mutable getter or the owner type differs.
    #[inline]
    pub fn get_mut<'a>(&self, owner: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> {
        self.get_mut.as_ref().and_then(|get_mut| get_mut(owner))
    }

    /// Runs the setter, handing `value` back on any failure.
    pub fn set(
        &self,
        owner: &mut dyn Reflect,
        value: Box<dyn Reflect>,
    ) -> Result<(), Box<dyn Reflect>> {
        match &self.set {
            Some(set) => set(owner, value),
            None => Err(value),
        }
    }
}

// -----------------------------------------------------------------------------
// MethodInfo

enum Call {
    Ref(CallRefFn),
    Mut(CallMutFn),
}

/// A callable member taking no arguments besides its receiver.
pub struct MethodInfo {
    name: &'static str,
    ty: Type,
    call: Call,
    custom_attributes: CustomAttributes,
}

impl MethodInfo {
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Creates a method taking `&T` and returning `R`.
    pub fn new<T: Reflect, R: Reflect>(name: &'static str, call: fn(&T) -> R) -> Self {
        let call: CallRefFn = Box::new(move |owner: &dyn Reflect| {
            owner
                .downcast_ref::<T>()
                .map(|owner| Box::new(call(owner)) as Box<dyn Reflect>)
        });
        Self {
            name,
            ty: Type::of::<R>(),
            call: Call::Ref(call),
            custom_attributes: CustomAttributes::new(),
        }
    }

    /// Creates a method taking `&mut T` and returning `R`.
    pub fn new_mut<T: Reflect, R: Reflect>(name: &'static str, call: fn(&mut T) -> R) -> Self {
        let call: CallMutFn = Box::new(move |owner: &mut dyn Reflect| {
            owner
                .downcast_mut::<T>()
                .map(|owner| Box::new(call(owner)) as Box<dyn Reflect>)
        });
        Self {
            name,
            ty: Type::of::<R>(),
            call: Call::Mut(call),
            custom_attributes: CustomAttributes::new(),
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The return type.
    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub const fn is_mut(&self) -> bool {
        matches!(self.call, Call::Mut(_))
    }

    /// Calls the method, or returns `None` if `owner` has the wrong type.
    pub fn invoke(&self, owner: &mut dyn Reflect) -> Option<Box<dyn Reflect>> {
        match &self.call {
            Call::Ref(call) => call(&*owner),
            Call::Mut(call) => call(owner),
        }
    }

    /// Calls a `&self` method; `&mut self` methods return `None`.
    pub fn invoke_ref(&self, owner: &dyn Reflect) -> Option<Box<dyn Reflect>> {
        match &self.call {
            Call::Ref(call) => call(owner),
            Call::Mut(_) => None,
        }
    }
}

// -----------------------------------------------------------------------------
// ConstructorInfo

pub struct ConstructorInfo {
    name: &'static str,
    ty: Type,
    construct: Box<dyn Fn() -> Box<dyn Reflect> + Send + Sync>,
    custom_attributes: CustomAttributes,
}

impl ConstructorInfo {
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    pub fn new<T: Reflect>(name: &'static str, construct: fn() -> T) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            construct: Box::new(move || Box::new(construct()) as Box<dyn Reflect>),
            custom_attributes: CustomAttributes::new(),
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The constructed type.
    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub fn construct(&self) -> Box<dyn Reflect> {
        (self.construct)()
    }
}

// -----------------------------------------------------------------------------
// EventInfo

/// A named notification point; `ty` is the handler type.
pub struct EventInfo {
    name: &'static str,
    ty: Type,
    custom_attributes: CustomAttributes,
}

impl EventInfo {
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    pub fn new<H: ?Sized + Any>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<H>(),
            custom_attributes: CustomAttributes::new(),
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }
}

// -----------------------------------------------------------------------------
// NestedTypeInfo

pub struct NestedTypeInfo {
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
    custom_attributes: CustomAttributes,
}

impl NestedTypeInfo {
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    pub fn new<N: Typed>() -> Self {
        Self {
            ty: Type::of::<N>(),
            type_info: N::type_info,
            custom_attributes: CustomAttributes::new(),
        }
    }

    /// The short identifier of the nested type.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.ty.ident()
    }

    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

// -----------------------------------------------------------------------------
// MemberInfo

/// One declared member of a type.
pub enum MemberInfo {
    Field(FieldInfo),
    Property(PropertyInfo),
    Method(MethodInfo),
    Constructor(ConstructorInfo),
    Event(EventInfo),
    NestedType(NestedTypeInfo),
}

macro_rules! dispatch {
    ($value:expr, $inner:ident => $expr:expr) => {
        match $value {
            MemberInfo::Field($inner) => $expr,
            MemberInfo::Property($inner) => $expr,
            MemberInfo::Method($inner) => $expr,
            MemberInfo::Constructor($inner) => $expr,
            MemberInfo::Event($inner) => $expr,
            MemberInfo::NestedType($inner) => $expr,
        }
    };
}

macro_rules! impl_as_kind {
    ($($fn_name:ident: $variant:ident => $info:ty;)*) => {
        $(
            #[inline]
            pub fn $fn_name(&self) -> Option<&$info> {
                match self {
                    Self::$variant(info) => Some(info),
                    _ => None,
                }
            }
        )*
    };
}

impl MemberInfo {
    impl_as_kind! {
        as_field: Field => FieldInfo;
        as_property: Property => PropertyInfo;
        as_method: Method => MethodInfo;
        as_constructor: Constructor => ConstructorInfo;
        as_event: Event => EventInfo;
        as_nested_type: NestedType => NestedTypeInfo;
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        dispatch!(self, info => info.name())
    }

    /// The value type: field or property type, method return type,
    /// constructed type, handler type or the nested type itself.
    #[inline]
    pub fn ty(&self) -> Type {
        dispatch!(self, info => info.ty())
    }

    #[inline]
    pub const fn kind(&self) -> MemberKind {
        match self {
            Self::Field(_) => MemberKind::Field,
            Self::Property(_) => MemberKind::Property,
            Self::Method(_) => MemberKind::Method,
            Self::Constructor(_) => MemberKind::Constructor,
            Self::Event(_) => MemberKind::Event,
            Self::NestedType(_) => MemberKind::NestedType,
        }
    }

    #[inline]
    pub fn slot(&self) -> SlotKey {
        SlotKey {
            namespace: self.kind().namespace(),
            name: self.name(),
        }
    }

    #[inline]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Field(_) | Self::Property(_))
    }

    #[inline]
    pub const fn is_readable(&self) -> bool {
        self.is_data()
    }

    #[inline]
    pub const fn is_writable(&self) -> bool {
        match self {
            Self::Field(_) => true,
            Self::Property(info) => info.is_writable(),
            _ => false,
        }
    }

    /// The linked [`TypeInfo`] of the member's value type, if known.
    pub fn type_info(&self) -> Option<&'static TypeInfo> {
        match self {
            Self::Field(info) => info.type_info(),
            Self::Property(info) => info.type_info(),
            Self::NestedType(info) => Some(info.type_info()),
            _ => None,
        }
    }

    fn optional(&self) -> Option<&Optional> {
        match self {
            Self::Field(info) => info.optional.as_ref(),
            Self::Property(info) => info.optional.as_ref(),
            _ => None,
        }
    }

    /// Returns `true` for a data member holding an `Option`.
    #[inline]
    pub fn is_optional(&self) -> bool {
        self.optional().is_some()
    }

    /// The value a path continues with after reading this member.
    ///
    /// For an optional member that is the content, or `None` when the
    /// option is empty. Any other member passes `value` through.
    pub fn inner_value<'a>(&self, value: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        match self.optional() {
            Some(optional) => (optional.get)(value),
            None => Some(value),
        }
    }

    /// Mutable version of [`inner_value`](Self::inner_value).
    pub fn inner_value_mut<'a>(&self, value: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> {
        match self.optional() {
            Some(optional) => (optional.get_mut)(value),
            None => Some(value),
        }
    }

    #[inline]
    pub fn custom_attributes(&self) -> &CustomAttributes {
        dispatch!(self, info => info.custom_attributes())
    }

    #[inline]
    pub fn get_attribute<T: Any>(&self) -> Option<&T> {
        self.custom_attributes().get::<T>()
    }

    #[inline]
    pub fn has_attribute<T: Any>(&self) -> bool {
        self.custom_attributes().contains::<T>()
    }

    #[inline]
    pub fn display_name(&self) -> Option<&'static str> {
        dispatch!(self, info => info.display_name())
    }
}

macro_rules! impl_from_info {
    ($($variant:ident($info:ty)),* $(,)?) => {
        $(
            impl From<$info> for MemberInfo {
                #[inline]
                fn from(value: $info) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_info!(
    Field(FieldInfo),
    Property(PropertyInfo),
    Method(MethodInfo),
    Constructor(ConstructorInfo),
    Event(EventInfo),
    NestedType(NestedTypeInfo),
);

impl fmt::Debug for MemberInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberInfo")
            .field("kind", &self.kind())
            .field("name", &self.name())
            .field("ty", &self.ty())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    struct Counter {
        count: u32,
        label: String,
    }

    impl Counter {
        fn label(&self) -> &String {
            &self.label
        }

        fn bump(&mut self) -> u32 {
            self.count += 1;
            self.count
        }
    }

    #[test]
    fn capabilities_follow_kind() {
        let field: MemberInfo = FieldInfo::new::<Counter, u32>("count", |c| &c.count, |c| &mut c.count).into();
        let property: MemberInfo = PropertyInfo::new::<Counter, String>("Label", Counter::label).into();
        let method: MemberInfo = MethodInfo::new_mut::<Counter, u32>("bump", Counter::bump).into();
        let event: MemberInfo = EventInfo::new::<dyn Fn(u32)>("changed").into();

        assert!(field.is_readable() && field.is_writable());
        assert!(property.is_readable() && !property.is_writable());
        assert!(!method.is_readable() && !method.is_writable());
        assert!(!event.is_readable() && !event.is_writable());

        assert_eq!(field.slot().namespace, SlotNamespace::Data);
        assert_eq!(property.slot().namespace, SlotNamespace::Data);
        assert_eq!(method.slot().namespace, SlotNamespace::Method);
        assert!(method.ty().is::<u32>());
    }

    #[test]
    fn field_rejects_wrong_value_type() {
        let field = FieldInfo::new::<Counter, u32>("count", |c| &c.count, |c| &mut c.count);
        let mut counter = Counter { count: 1, label: String::new() };

        let back = field.set(&mut counter, Box::new(2_u64)).unwrap_err();
        assert!(back.is::<u64>());
        assert_eq!(counter.count, 1);

        assert!(field.get(&5_u8).is_none());
    }

    #[test]
    fn methods_need_matching_receiver() {
        let method = MethodInfo::new_mut::<Counter, u32>("bump", Counter::bump);
        let mut counter = Counter { count: 0, label: String::new() };

        let result = method.invoke(&mut counter).unwrap();
        assert_eq!(result.downcast_ref::<u32>(), Some(&1));
        assert!(method.invoke_ref(&counter).is_none());
        assert!(method.invoke(&mut 0_u8).is_none());
    }

    #[test]
    fn optional_members_expose_content() {
        struct Slot {
            item: Option<u32>,
        }

        let member: MemberInfo =
            FieldInfo::new::<Slot, Option<u32>>("item", |s| &s.item, |s| &mut s.item)
                .with_optional::<u32>()
                .into();
        assert!(member.is_optional());

        let mut slot = Slot { item: Some(4) };
        let value = member.as_field().unwrap().get(&slot).unwrap();
        assert_eq!(member.inner_value(value).unwrap().downcast_ref::<u32>(), Some(&4));

        let value = member.as_field().unwrap().get_mut(&mut slot).unwrap();
        *member.inner_value_mut(value).unwrap().downcast_mut::<u32>().unwrap() = 5;
        assert_eq!(slot.item, Some(5));

        slot.item = None;
        let value = member.as_field().unwrap().get(&slot).unwrap();
        assert!(member.inner_value(value).is_none());

        // Plain members pass the value through.
        let plain: MemberInfo =
            FieldInfo::new::<Slot, Option<u32>>("item", |s| &s.item, |s| &mut s.item).into();
        assert!(!plain.is_optional());
        assert!(plain.inner_value(&7_u8).is_some());
    }

    #[test]
    fn constructor_builds_value() {
        let ctor = ConstructorInfo::new::<String>("default", String::new);
        assert!(ctor.ty().is::<String>());
        assert_eq!(ctor.construct().take::<String>().unwrap(), "");
    }
}
