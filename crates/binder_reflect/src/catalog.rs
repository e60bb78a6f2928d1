//! Member enumeration across a base chain.
//!
//! Members are reported from the most derived level to the root. A member
//! whose [`SlotKey`] was already reported by a more derived level is skipped,
//! so overrides and shadowing declarations replace the base declaration.
//!
//! # Examples
//!
//! ```
//! use binder_reflect::{catalog, derive::Reflect, info::{DisplayName, Typed}};
//!
//! #[derive(Reflect)]
//! struct Animal {
//!     #[reflect(display = "Animal Name")]
//!     name: String,
//!     legs: u8,
//! }
//!
//! #[derive(Reflect)]
//! struct Dog {
//!     #[reflect(base)]
//!     animal: Animal,
//!     // Shadows `Animal::legs`.
//!     legs: u8,
//! }
//!
//! let members = catalog::all_members(Dog::type_info());
//! let names: Vec<_> = members.iter().map(|m| (m.name(), m.depth())).collect();
//! assert_eq!(names, [("legs", 0), ("name", 1)]);
//!
//! let labelled = catalog::all_members_with::<DisplayName>(Dog::type_info());
//! assert_eq!(labelled.len(), 1);
//! assert_eq!(labelled[0].declaring_type().type_ident(), "Animal");
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

use binder_utils::hash::HashSet;

use crate::Reflect;
use crate::info::{CustomAttributes, MemberInfo, MemberKind, SlotKey, Type, TypeInfo};

// -----------------------------------------------------------------------------
// Ancestors

/// Upper bound on base chain length checked with the `debug` feature.
#[cfg(all(debug_assertions, feature = "debug"))]
const MAX_DEPTH: usize = 256;

/// Iterator over a type and its ancestors, most derived first.
///
/// Yields `(depth, info)` where the queried type has depth `0`.
#[derive(Clone)]
pub struct Ancestors<'a> {
    next: Option<&'a TypeInfo>,
    depth: usize,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = (usize, &'a TypeInfo);

    fn next(&mut self) -> Option<Self::Item> {
        let info = self.next?;
        let depth = self.depth;

        #[cfg(all(debug_assertions, feature = "debug"))]
        debug_assert!(
            depth < MAX_DEPTH,
            "base chain of `{}` is deeper than {MAX_DEPTH}, is it cyclic?",
            info.type_path(),
        );

        self.next = info.base().map(|base| base.info());
        self.depth += 1;
        Some((depth, info))
    }
}

/// Walks from `info` up through its base links.
#[inline]
pub fn ancestors(info: &TypeInfo) -> Ancestors<'_> {
    Ancestors {
        next: Some(info),
        depth: 0,
    }
}

// -----------------------------------------------------------------------------
// Member

/// A member resolved against a queried type.
///
/// Carries the declaring type and the distance from the queried type, so
/// that it can be read from or written to a value of the queried type.
#[derive(Clone, Copy)]
pub struct Member<'a> {
    info: &'a MemberInfo,
    declaring: &'a TypeInfo,
    owner: &'a TypeInfo,
    depth: usize,
}

impl<'a> Member<'a> {
    pub(crate) fn new(
        info: &'a MemberInfo,
        declaring: &'a TypeInfo,
        owner: &'a TypeInfo,
        depth: usize,
    ) -> Self {
        Self {
            info,
            declaring,
            owner,
            depth,
        }
    }

    #[inline]
    pub fn info(&self) -> &'a MemberInfo {
        self.info
    }

    /// The type that declares this member.
    #[inline]
    pub fn declaring_type(&self) -> &'a TypeInfo {
        self.declaring
    }

    /// The type the member was resolved against.
    #[inline]
    pub fn owner_type(&self) -> &'a TypeInfo {
        self.owner
    }

    /// Levels between the queried type (`0`) and the declaring type.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.info.name()
    }

    #[inline]
    pub fn kind(&self) -> MemberKind {
        self.info.kind()
    }

    #[inline]
    pub fn ty(&self) -> Type {
        self.info.ty()
    }

    #[inline]
    pub fn slot(&self) -> SlotKey {
        self.info.slot()
    }

    #[inline]
    pub fn is_readable(&self) -> bool {
        self.info.is_readable()
    }

    #[inline]
    pub fn is_writable(&self) -> bool {
        self.info.is_writable()
    }

    /// Returns `true` for a `Box<dyn Reflect>` member, which accepts values
    /// of any type.
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.info.ty().is::<Box<dyn Reflect>>()
    }

    /// Returns `true` if `value` may be written to this member.
    #[inline]
    pub fn accepts(&self, value: &dyn Reflect) -> bool {
        self.is_dynamic() || value.ty_id() == self.info.ty().id()
    }

    #[inline]
    pub fn custom_attributes(&self) -> &'a CustomAttributes {
        self.info.custom_attributes()
    }

    #[inline]
    pub fn get_attribute<T: Any>(&self) -> Option<&'a T> {
        self.info.get_attribute::<T>()
    }

    #[inline]
    pub fn has_attribute<T: Any>(&self) -> bool {
        self.info.has_attribute::<T>()
    }

    fn project<'r>(&self, mut value: &'r dyn Reflect) -> Option<&'r dyn Reflect> {
        let mut info = self.owner;
        for _ in 0..self.depth {
            let base = info.base()?;
            value = base.project(value)?;
            info = base.info();
        }
        Some(value)
    }

    fn project_mut<'r>(&self, mut value: &'r mut dyn Reflect) -> Option<&'r mut dyn Reflect> {
        let mut info = self.owner;
        for _ in 0..self.depth {
            let base = info.base()?;
            value = base.project_mut(value)?;
            info = base.info();
        }
        Some(value)
    }

    /// Reads the member from a value of the owner type.
    ///
    /// Returns `None` for members that are not data, or if `owner` does not
    /// match the owner type.
    pub fn read<'r>(&self, owner: &'r dyn Reflect) -> Option<&'r dyn Reflect> {
        let owner = self.project(owner)?;
        match self.info {
            MemberInfo::Field(field) => field.get(owner),
            MemberInfo::Property(property) => property.get(owner),
            _ => None,
        }
    }

    /// Mutable access, used to walk through the member.
    ///
    /// Properties without a mutable getter return `None`.
    pub fn read_mut<'r>(&self, owner: &'r mut dyn Reflect) -> Option<&'r mut dyn Reflect> {
        let owner = self.project_mut(owner)?;
        match self.info {
            MemberInfo::Field(field) => field.get_mut(owner),
            MemberInfo::Property(property) => property.get_mut(owner),
            _ => None,
        }
    }

    /// Writes `value` to the member, handing it back on failure.
    pub fn write(
        &self,
        owner: &mut dyn Reflect,
        value: Box<dyn Reflect>,
    ) -> Result<(), Box<dyn Reflect>> {
        let Some(owner) = self.project_mut(owner) else {
            return Err(value);
        };
        match self.info {
            MemberInfo::Field(field) => field.set(owner, value),
            MemberInfo::Property(property) => property.set(owner, value),
            _ => Err(value),
        }
    }

    /// Calls a method member. Returns `None` for other kinds.
    pub fn invoke(&self, owner: &mut dyn Reflect) -> Option<Box<dyn Reflect>> {
        let owner = self.project_mut(owner)?;
        self.info.as_method()?.invoke(owner)
    }
}

impl fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("kind", &self.kind())
            .field("name", &self.name())
            .field("declaring", &self.declaring.ty())
            .field("depth", &self.depth)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Enumeration

const DATA: &[MemberKind] = &[MemberKind::Field, MemberKind::Property];
const METHODS: &[MemberKind] = &[MemberKind::Method];

fn collect<'a>(
    info: &'a TypeInfo,
    kinds: &[MemberKind],
    filter: impl Fn(&MemberInfo) -> bool,
) -> Vec<Member<'a>> {
    let mut seen: HashSet<SlotKey> = HashSet::default();
    let mut members = Vec::new();

    for (depth, level) in ancestors(info) {
        for &kind in kinds {
            // Constructors belong to their own type only.
            if kind == MemberKind::Constructor && depth > 0 {
                continue;
            }
            for member in level.members_of(kind) {
                if seen.insert(member.slot()) && filter(member) {
                    members.push(Member::new(member, level, info, depth));
                }
            }
        }
    }

    members
}

/// Fields and properties of `info` and its ancestors, most derived first.
///
/// At each level fields come before properties. The root type yields only
/// its own members; an empty result is not an error.
#[inline]
pub fn all_members(info: &TypeInfo) -> Vec<Member<'_>> {
    collect(info, DATA, |_| true)
}

/// Like [`all_members`], keeping only members carrying an attribute `A`.
///
/// Slots are claimed before filtering: an override without `A` hides a base
/// declaration that has it.
#[inline]
pub fn all_members_with<A: Any>(info: &TypeInfo) -> Vec<Member<'_>> {
    collect(info, DATA, MemberInfo::has_attribute::<A>)
}

/// Methods of `info` and its ancestors, most derived first.
#[inline]
pub fn all_methods(info: &TypeInfo) -> Vec<Member<'_>> {
    collect(info, METHODS, |_| true)
}

#[inline]
pub fn all_methods_with<A: Any>(info: &TypeInfo) -> Vec<Member<'_>> {
    collect(info, METHODS, MemberInfo::has_attribute::<A>)
}

/// Every member kind of `info` and its ancestors, most derived first.
///
/// Constructors are only reported for `info` itself.
#[inline]
pub fn all_declared(info: &TypeInfo) -> Vec<Member<'_>> {
    collect(info, &MemberKind::ALL, |_| true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::{
        BaseInfo, ConstructorInfo, DisplayName, EventInfo, FieldInfo, MethodInfo, PropertyInfo,
        TypeInfoCell, Typed,
    };
    use alloc::string::String;

    struct Entity {
        id: u32,
        tag: String,
    }

    struct Actor {
        entity: Entity,
        tag: String,
        speed: f32,
    }

    struct Player {
        actor: Actor,
        speed: f32,
    }

    impl Entity {
        fn id(&self) -> &u32 {
            &self.id
        }

        fn describe(&self) -> String {
            alloc::format!("entity {}", self.id)
        }
    }

    impl Actor {
        fn describe(&self) -> String {
            alloc::format!("actor {}", self.entity.id)
        }
    }

    impl Typed for Entity {
        fn type_info() -> &'static TypeInfo {
            static CELL: TypeInfoCell = TypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::new::<Self>()
                    .with_member(FieldInfo::new::<Self, String>("tag", |e| &e.tag, |e| &mut e.tag))
                    .with_member(
                        PropertyInfo::new::<Self, u32>("Id", Self::id).with_custom_attributes(
                            CustomAttributes::new().with_attribute(DisplayName("Identifier")),
                        ),
                    )
                    .with_member(MethodInfo::new::<Self, String>("describe", Self::describe))
                    .with_member(ConstructorInfo::new::<Self>("new", || Entity {
                        id: 0,
                        tag: String::new(),
                    }))
            })
        }
    }

    impl Typed for Actor {
        fn type_info() -> &'static TypeInfo {
            static CELL: TypeInfoCell = TypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::new::<Self>()
                    .with_base(BaseInfo::new::<Self, Entity>(|a| &a.entity, |a| &mut a.entity))
                    .with_member(FieldInfo::new::<Self, String>("tag", |a| &a.tag, |a| &mut a.tag))
                    .with_member(FieldInfo::new::<Self, f32>(
                        "speed",
                        |a| &a.speed,
                        |a| &mut a.speed,
                    ))
                    .with_member(MethodInfo::new::<Self, String>("describe", Self::describe))
                    .with_member(EventInfo::new::<dyn Fn(f32)>("moved"))
            })
        }
    }

    impl Typed for Player {
        fn type_info() -> &'static TypeInfo {
            static CELL: TypeInfoCell = TypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::new::<Self>()
                    .with_base(BaseInfo::new::<Self, Actor>(|p| &p.actor, |p| &mut p.actor))
                    .with_member(PropertyInfo::new::<Self, f32>("speed", |p| &p.speed))
            })
        }
    }

    fn player() -> Player {
        Player {
            actor: Actor {
                entity: Entity {
                    id: 7,
                    tag: "entity".into(),
                },
                tag: "actor".into(),
                speed: 1.0,
            },
            speed: 2.0,
        }
    }

    #[test]
    fn ancestors_walk_to_root() {
        let chain: Vec<_> = ancestors(Player::type_info())
            .map(|(depth, info)| (depth, info.type_ident()))
            .collect();
        assert_eq!(chain, [(0, "Player"), (1, "Actor"), (2, "Entity")]);
    }

    #[test]
    fn most_derived_slot_wins() {
        let members = all_members(Player::type_info());
        let summary: Vec<_> = members
            .iter()
            .map(|m| (m.name(), m.kind(), m.depth()))
            .collect();

        assert_eq!(
            summary,
            [
                ("speed", MemberKind::Property, 0),
                ("tag", MemberKind::Field, 1),
                ("Id", MemberKind::Property, 2),
            ]
        );
    }

    #[test]
    fn root_type_reports_only_its_members() {
        let members = all_members(Entity::type_info());
        let names: Vec<_> = members.iter().map(Member::name).collect();
        assert_eq!(names, ["tag", "Id"]);
    }

    #[test]
    fn members_read_through_base_projection() {
        let player = player();
        let members = all_members(Player::type_info());

        let tag = members.iter().find(|m| m.name() == "tag").unwrap();
        assert_eq!(tag.read(&player).unwrap().downcast_ref::<String>().unwrap(), "actor");

        let id = members.iter().find(|m| m.name() == "Id").unwrap();
        assert_eq!(id.read(&player).unwrap().downcast_ref::<u32>(), Some(&7));
        assert!(id.read(&5_u8).is_none());
    }

    #[test]
    fn attribute_filter() {
        let labelled = all_members_with::<DisplayName>(Player::type_info());
        assert_eq!(labelled.len(), 1);
        assert_eq!(labelled[0].name(), "Id");
        assert_eq!(labelled[0].declaring_type().type_ident(), "Entity");

        assert!(all_members_with::<u64>(Player::type_info()).is_empty());
    }

    #[test]
    fn methods_are_deduplicated() {
        let methods = all_methods(Player::type_info());
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].declaring_type().type_ident(), "Actor");

        let mut player = player();
        let result = methods[0].invoke(&mut player).unwrap();
        assert_eq!(result.downcast_ref::<String>().unwrap(), "actor 7");

        assert!(all_methods_with::<DisplayName>(Player::type_info()).is_empty());
    }

    #[test]
    fn all_declared_includes_every_kind() {
        let declared = all_declared(Actor::type_info());
        let kinds: Vec<_> = declared.iter().map(|m| (m.kind(), m.name())).collect();

        assert_eq!(
            kinds,
            [
                (MemberKind::Field, "tag"),
                (MemberKind::Field, "speed"),
                (MemberKind::Method, "describe"),
                (MemberKind::Event, "moved"),
                (MemberKind::Property, "Id"),
            ]
        );

        let own = all_declared(Entity::type_info());
        assert!(own.iter().any(|m| m.kind() == MemberKind::Constructor));
    }
}
