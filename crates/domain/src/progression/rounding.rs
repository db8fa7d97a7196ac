//! Signed rounding helpers shared by the attribute and trait engines.
//!
//! Attributes and traits both level every [`LEVEL_STEP`] experience points
//! and both treat an exact boundary as "just reached" rather than "one
//! level banked ahead". The correction is sign-aware so experience debt
//! behaves symmetrically with surplus.

/// Experience points per attribute score / trait level.
pub const LEVEL_STEP: i32 = 100;

/// Whole levels attained at `step`-point intervals, rounding toward zero.
///
/// Positive totals floor (`250 -> 2`), negative totals ceil
/// (`-250 -> -2`), so debt shrinks level magnitude symmetrically instead
/// of overshooting toward negative infinity.
pub fn toward_zero_level(total: i32, step: i32) -> i32 {
    debug_assert!(step > 0);
    total / step
}

/// Whole levels attained at `step`-point intervals, rounding down.
pub fn floor_level(total: i32, step: i32) -> i32 {
    debug_assert!(step > 0);
    total.div_euclid(step)
}

/// Residual experience after the exact-boundary correction.
///
/// A total sitting exactly on a step multiple counts as "just reached", so
/// the residual is pulled back one full step toward zero
/// (`200 -> 100`, `-200 -> -100`). Any other total is left as-is. A total
/// of zero banks nothing and settles to zero.
pub fn boundary_residual(total: i32, step: i32) -> i32 {
    debug_assert!(step > 0);
    if total == 0 || total % step != 0 {
        total
    } else if total > 0 {
        total - step
    } else {
        total + step
    }
}
