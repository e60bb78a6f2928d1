//! Human-readable names for types, enum values and members.
//!
//! A [`DisplayName`](crate::info::DisplayName) attribute wins; otherwise
//! the raw identifier is used. None of these functions fail.

use crate::Reflect;
use crate::catalog::Member;
use crate::info::{TypeInfo, Typed, short_ident};
use crate::locate::locate;
use crate::registry::TypeRegistry;

fn variant_label(info: &'static TypeInfo, value: &dyn Reflect) -> Option<&'static str> {
    let variant = info.as_enum()?.variant_of(value)?;
    Some(variant.display_name().unwrap_or(variant.name()))
}

/// The display name of an enum value, or its variant identifier.
///
/// Returns `""` when `E` is not an enum.
///
/// # Examples
///
/// ```
/// use binder_reflect::{derive::Reflect, display::enum_display_name};
///
/// #[derive(Reflect)]
/// enum Game {
///     #[reflect(display = "Like a Dragon")]
///     Yakuza,
///     Tetris,
/// }
///
/// assert_eq!(enum_display_name(&Game::Yakuza), "Like a Dragon");
/// assert_eq!(enum_display_name(&Game::Tetris), "Tetris");
/// ```
#[inline]
pub fn enum_display_name<E: Typed>(value: &E) -> &'static str {
    variant_label(E::type_info(), value).unwrap_or("")
}

/// The display name of a type, or its short identifier.
///
/// Returns `""` for `None`.
#[inline]
pub fn type_display_name(info: Option<&TypeInfo>) -> &'static str {
    match info {
        Some(info) => info.display_name().unwrap_or(info.type_ident()),
        None => "",
    }
}

/// [`type_display_name`] for a static type.
#[inline]
pub fn type_display_name_of<T: Typed>() -> &'static str {
    type_display_name(Some(T::type_info()))
}

/// The display name of the field or property `name` on `owner`, or `name`
/// itself when the member is unlabelled or missing.
///
/// # Examples
///
/// ```
/// use binder_reflect::{derive::Reflect, display::property_display_name, info::Typed};
///
/// #[derive(Reflect)]
/// struct Track {
///     #[reflect(display = "Title")]
///     name: String,
///     length: u32,
/// }
///
/// let info = Track::type_info();
/// assert_eq!(property_display_name(info, "name"), "Title");
/// assert_eq!(property_display_name(info, "length"), "length");
/// assert_eq!(property_display_name(info, "missing"), "missing");
/// ```
pub fn property_display_name<'a>(owner: &TypeInfo, name: &'a str) -> &'a str {
    locate(owner, name)
        .and_then(|member| member.info().display_name())
        .unwrap_or(name)
}

/// The display name of a resolved member, or its identifier.
#[inline]
pub fn member_display_name(member: &Member<'_>) -> &'static str {
    member.info().display_name().unwrap_or(member.name())
}

impl TypeRegistry {
    /// The type label for a runtime value.
    ///
    /// Unregistered types fall back to the short identifier of their type
    /// path.
    pub fn display_name_of(&self, value: &dyn Reflect) -> &'static str {
        let value = value.look_through();
        match self.get_of_value(value) {
            Some(info) => type_display_name(Some(info)),
            None => short_ident(value.reflect_type_path()),
        }
    }

    /// [`enum_display_name`] for a runtime value.
    ///
    /// Returns `""` for values that are not of a registered enum type.
    pub fn enum_display_name_dyn(&self, value: &dyn Reflect) -> &'static str {
        let value = value.look_through();
        self.get_of_value(value)
            .and_then(|info| variant_label(info, value))
            .unwrap_or("")
    }
}
