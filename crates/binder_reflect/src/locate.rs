//! Lookup of a single data member by name.

use crate::catalog::{Member, ancestors};
use crate::info::{MemberKind, TypeInfo};

/// Finds the most derived field or property named `name` on `info` or one
/// of its ancestors.
///
/// At each level a property is preferred over a field of the same name.
/// Methods, constructors, events and nested types are never returned.
///
/// # Examples
///
/// ```
/// use binder_reflect::{derive::Reflect, info::{MemberKind, Typed}, locate::locate};
///
/// #[derive(Reflect)]
/// struct Animal {
///     name: String,
/// }
///
/// #[derive(Reflect)]
/// struct Dog {
///     #[reflect(base)]
///     animal: Animal,
/// }
///
/// let member = locate(Dog::type_info(), "name").unwrap();
/// assert_eq!(member.kind(), MemberKind::Field);
/// assert_eq!(member.declaring_type().type_ident(), "Animal");
/// assert_eq!(member.depth(), 1);
///
/// assert!(locate(Dog::type_info(), "Missing").is_none());
/// ```
pub fn locate<'a>(info: &'a TypeInfo, name: &str) -> Option<Member<'a>> {
    ancestors(info).find_map(|(depth, level)| {
        level
            .member(MemberKind::Property, name)
            .or_else(|| level.member(MemberKind::Field, name))
            .map(|member| Member::new(member, level, info, depth))
    })
}
