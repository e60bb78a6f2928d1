//! String and path helpers.

use alloc::string::String;

/// Keeps only the alphanumeric characters of `value`.
///
/// The result is safe to use as a file name.
///
/// # Examples
///
/// ```
/// use binder_utils::text::to_safe_string;
///
/// assert_eq!(to_safe_string("Like a Dragon: 2!"), "LikeaDragon2");
/// assert_eq!(to_safe_string("Öl-Straße"), "ÖlStraße");
/// ```
pub fn to_safe_string(value: &str) -> String {
    value.chars().filter(|c| c.is_alphanumeric()).collect()
}

/// The path component that moves one directory up.
pub const UP_ONE_DIRECTORY: &str = "..";

/// Builds a relative path that climbs `levels` directories, e.g. `../..`.
///
/// Zero levels produce an empty path.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use binder_utils::text::ancestor_path;
///
/// assert_eq!(ancestor_path(2), Path::new("..").join(".."));
/// assert_eq!(ancestor_path(0), Path::new(""));
/// ```
#[cfg(feature = "std")]
pub fn ancestor_path(levels: u8) -> std::path::PathBuf {
    (0..levels).map(|_| UP_ONE_DIRECTORY).collect()
}
