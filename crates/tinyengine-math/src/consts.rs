//! Tolerances, angle constants and small scalar helpers.
//!
//! Tolerances:
//! - `EPSILON` is the general comparison tolerance and the singularity threshold
//!   used by [`Mat3::inverse`](crate::Mat3::inverse)
//! - `ZERO_THRESHOLD` decides when a length is treated as zero (normalize, follow)
//! - `EPSILON_NORMAL` / `EPSILON_HIGH` are coarser/finer tolerances for callers

use std::f64::consts::PI;

/// General-purpose tolerance.
pub const EPSILON: f64 = 1e-10;

/// Normal-precision tolerance (round trips through several matrix products).
pub const EPSILON_NORMAL: f64 = 1e-6;

/// High-precision tolerance.
pub const EPSILON_HIGH: f64 = 1e-12;

/// Lengths below this are treated as zero.
pub const ZERO_THRESHOLD: f64 = 1e-8;

/// Smallest scale accepted by [`clamp_scale`].
pub const MIN_SCALE: f64 = 1e-6;

/// Largest scale accepted by [`clamp_scale`].
pub const MAX_SCALE: f64 = 1e6;

pub const HALF_PI: f64 = PI / 2.0;
pub const QUARTER_PI: f64 = PI / 4.0;
pub const TWO_PI: f64 = PI * 2.0;

pub const DEG_TO_RAD: f64 = PI / 180.0;
pub const RAD_TO_DEG: f64 = 180.0 / PI;

/// Returns true when `value` is within [`ZERO_THRESHOLD`] of zero.
#[inline]
pub fn is_zero(value: f64) -> bool {
    value.abs() < ZERO_THRESHOLD
}

/// Returns true when `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[inline]
pub fn approx_eq_with(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Clamps a scale factor into `[MIN_SCALE, MAX_SCALE]`.
#[inline]
pub fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_SCALE, MAX_SCALE)
}

/// Wraps an angle in radians into `[0, 2π)`.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TWO_PI);
    // rem_euclid can round up to exactly 2π for tiny negative inputs.
    if wrapped >= TWO_PI { 0.0 } else { wrapped }
}

#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_zero_uses_zero_threshold() {
        assert!(is_zero(0.0));
        assert!(is_zero(-5e-9));
        assert!(!is_zero(1e-7));
    }

    #[test]
    fn approx_eq_is_strict_at_epsilon() {
        assert!(approx_eq(1.0, 1.0 + 1e-11));
        assert!(!approx_eq(1.0, 1.0 + 1e-9));
        assert!(approx_eq_with(1.0, 1.05, 0.1));
    }

    #[test]
    fn clamp_scale_limits_both_ends() {
        assert_eq!(clamp_scale(0.0), MIN_SCALE);
        assert_eq!(clamp_scale(1e9), MAX_SCALE);
        assert_eq!(clamp_scale(2.5), 2.5);
    }

    #[test]
    fn normalize_angle_wraps_into_range() {
        assert!(approx_eq(normalize_angle(-HALF_PI), 3.0 * HALF_PI));
        assert!(approx_eq(normalize_angle(TWO_PI + QUARTER_PI), QUARTER_PI));
        assert_eq!(normalize_angle(TWO_PI), 0.0);
        assert_eq!(normalize_angle(-1e-20), 0.0);
    }

    #[test]
    fn degree_conversions() {
        assert!(approx_eq(deg_to_rad(180.0), PI));
        assert!(approx_eq(rad_to_deg(HALF_PI), 90.0));
    }
}
