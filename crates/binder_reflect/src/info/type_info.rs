use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;

use crate::Reflect;
use crate::info::member_info::{GetFn, GetMutFn, erase_get, erase_get_mut};
use crate::info::{CustomAttributes, EnumInfo, FieldInfo, MemberInfo, MemberKind};
use crate::info::{MethodInfo, PropertyInfo, Type, Typed};
use crate::info::{impl_custom_attributes_fn, impl_with_custom_attributes};

// -----------------------------------------------------------------------------
// BaseInfo

/// Link from a type to its base in an inheritance chain.
///
/// The base is a sub-object of the derived value; the projections reach it
/// from a derived value.
pub struct BaseInfo {
    type_info: fn() -> &'static TypeInfo,
    get: GetFn,
    get_mut: GetMutFn,
}

impl BaseInfo {
    /// Declares `B` as the base of `T`.
    pub fn new<T: Reflect, B: Typed>(get: fn(&T) -> &B, get_mut: fn(&mut T) -> &mut B) -> Self {
        Self {
            type_info: B::type_info,
            get: erase_get(get),
            get_mut: erase_get_mut(get_mut),
        }
    }

    /// The base type's [`TypeInfo`].
    #[inline]
    pub fn info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Projects a derived value onto its base sub-object.
    #[inline]
    pub fn project<'a>(&self, value: &'a dyn Reflect) -> Option<&'a dyn Reflect> {
        (self.get)(value)
    }

    #[inline]
    pub fn project_mut<'a>(&self, value: &'a mut dyn Reflect) -> Option<&'a mut dyn Reflect> {
        (self.get_mut)(value)
    }
}

impl fmt::Debug for BaseInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BaseInfo").field(&self.info().ty()).finish()
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Static description of a type: identity, base link, declared members,
/// enum variants and custom attributes.
///
/// Built once per type, usually by [`#[derive(Reflect)]`](crate::derive::Reflect).
/// Members are kept in declaration order.
///
/// # Examples
///
/// Built by hand:
///
/// ```
/// use binder_reflect::info::{FieldInfo, MethodInfo, TypeInfo};
///
/// struct Counter { count: u32 }
///
/// let info = TypeInfo::new::<Counter>()
///     .with_member(FieldInfo::new::<Counter, u32>("count", |c| &c.count, |c| &mut c.count))
///     .with_member(MethodInfo::new::<Counter, bool>("is_zero", |c| c.count == 0));
///
/// assert_eq!(info.type_ident(), "Counter");
/// assert!(info.field("count").is_some());
/// assert!(info.method("is_zero").is_some());
/// assert!(info.base().is_none());
/// ```
pub struct TypeInfo {
    ty: Type,
    base: Option<BaseInfo>,
    members: Vec<MemberInfo>,
    enum_info: Option<EnumInfo>,
    custom_attributes: CustomAttributes,
}

impl TypeInfo {
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Creates an empty description of `T`.
    pub fn new<T: Reflect>() -> Self {
        Self {
            ty: Type::of::<T>(),
            base: None,
            members: Vec::new(),
            enum_info: None,
            custom_attributes: CustomAttributes::new(),
        }
    }

    #[inline]
    pub fn with_base(self, base: BaseInfo) -> Self {
        Self {
            base: Some(base),
            ..self
        }
    }

    /// Appends a member.
    #[inline]
    pub fn with_member(mut self, member: impl Into<MemberInfo>) -> Self {
        self.members.push(member.into());
        self
    }

    /// Appends members, in order.
    #[inline]
    pub fn with_members(mut self, members: impl IntoIterator<Item = MemberInfo>) -> Self {
        self.members.extend(members);
        self
    }

    #[inline]
    pub fn with_enum(self, enum_info: EnumInfo) -> Self {
        Self {
            enum_info: Some(enum_info),
            ..self
        }
    }

    #[inline]
    pub const fn ty(&self) -> Type {
        self.ty
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.ty.id()
    }

    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.ty.path()
    }

    #[inline]
    pub const fn type_ident(&self) -> &'static str {
        self.ty.ident()
    }

    #[inline]
    pub fn base(&self) -> Option<&BaseInfo> {
        self.base.as_ref()
    }

    /// Members declared directly on this type, in declaration order.
    #[inline]
    pub fn members(&self) -> &[MemberInfo] {
        &self.members
    }

    /// Declared members of one kind, in declaration order.
    pub fn members_of(&self, kind: MemberKind) -> impl Iterator<Item = &MemberInfo> {
        self.members.iter().filter(move |member| member.kind() == kind)
    }

    /// A declared member of `kind` named `name`.
    pub fn member(&self, kind: MemberKind, name: &str) -> Option<&MemberInfo> {
        self.members_of(kind).find(|member| member.name() == name)
    }

    /// A field declared directly on this type.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.member(MemberKind::Field, name)
            .and_then(MemberInfo::as_field)
    }

    /// A property declared directly on this type.
    #[inline]
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.member(MemberKind::Property, name)
            .and_then(MemberInfo::as_property)
    }

    /// A method declared directly on this type.
    #[inline]
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.member(MemberKind::Method, name)
            .and_then(MemberInfo::as_method)
    }

    #[inline]
    pub fn as_enum(&self) -> Option<&EnumInfo> {
        self.enum_info.as_ref()
    }

    #[inline]
    pub const fn is_enum(&self) -> bool {
        self.enum_info.is_some()
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("ty", &self.ty)
            .field("base", &self.base)
            .field("members", &self.members)
            .field("enum_info", &self.enum_info)
            .finish_non_exhaustive()
    }
}
