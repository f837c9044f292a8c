//! Tolerance defaults for analytic objects (internal).
//!
//! Policy
//! - Equality is decided on a fixed decimal grid. Every comparison in the crate
//!   (equality, hashing, lies-on, collinearity) goes through `rounded_key`, so
//!   the picture maps and the incidence tests can never disagree about what
//!   "equal" means within a single picture.

/// Number of decimal places kept when comparing coordinates.
pub const ROUNDING_DIGITS: i32 = 6;

/// `10^ROUNDING_DIGITS`, precomputed.
pub(crate) const ROUNDING_SCALE: f64 = 1e6;

/// Snap `v` onto the comparison grid. `-0.0` and `0.0` share the key `0`.
#[inline]
pub(crate) fn rounded_key(v: f64) -> i64 {
    (v * ROUNDING_SCALE).round() as i64
}

/// True iff `v` rounds to zero on the comparison grid.
#[inline]
pub(crate) fn is_zero(v: f64) -> bool {
    rounded_key(v) == 0
}
