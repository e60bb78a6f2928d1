//! Small numeric helpers shared by bound values.

use core::f32::consts::TAU;

/// A full turn in radians.
pub const TWO_PI: f32 = TAU;

/// Tolerance used by [`has_minimal_difference`] when callers have no
/// better one.
pub const DEFAULT_MINIMAL_DIFFERENCE: f32 = 0.00001;

/// Clamps `value` into `[minimum, maximum]`.
///
/// Unlike [`Ord::clamp`] this never panics: when `minimum > maximum` the
/// minimum wins.
///
/// # Examples
///
/// ```
/// use binder_utils::num::clamp;
///
/// assert_eq!(clamp(12_u16, 0, 10), 10);
/// assert_eq!(clamp(-0.5_f32, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(5, 8, 2), 8);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, minimum: T, maximum: T) -> T {
    let upper = if value < maximum { value } else { maximum };
    if minimum > upper { minimum } else { upper }
}

/// Returns `true` if `a` and `b` differ by at most `difference`.
///
/// # Examples
///
/// ```
/// use binder_utils::num::{has_minimal_difference, DEFAULT_MINIMAL_DIFFERENCE};
///
/// assert!(has_minimal_difference(0.1 + 0.2, 0.3, DEFAULT_MINIMAL_DIFFERENCE));
/// assert!(!has_minimal_difference(1.0, 1.1, DEFAULT_MINIMAL_DIFFERENCE));
/// ```
#[inline]
pub fn has_minimal_difference(a: f32, b: f32, difference: f32) -> bool {
    let delta = a - b;
    let delta = if delta < 0.0 { -delta } else { delta };
    delta <= difference
}

/// Returns `true` if `value` is a positive power of two.
#[inline]
pub const fn is_power_of_two(value: i32) -> bool {
    value > 0 && (value & (value - 1)) == 0
}

/// Maps an angle in radians onto `[0, TWO_PI)`.
///
/// Non-finite input is returned unchanged.
pub fn normalize_angle(value: f32) -> f32 {
    if !value.is_finite() {
        return value;
    }

    let mut angle = value % TWO_PI;
    if angle < 0.0 {
        angle += TWO_PI;
    }

    // `-tiny + TWO_PI` can round up to exactly `TWO_PI`.
    if angle >= TWO_PI { 0.0 } else { angle }
}

/// Returns `-1.0` for negative values and `1.0` otherwise (zero included).
#[inline]
pub fn to_sign(value: f32) -> f32 {
    if value < 0.0 { -1.0 } else { 1.0 }
}
