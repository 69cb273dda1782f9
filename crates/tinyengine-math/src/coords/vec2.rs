use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::consts::is_zero;

use super::Vec3;

/// 2D vector in world units.
///
/// Used both for points (positions) and directions; the distinction only matters
/// when lifting into homogeneous coordinates (see [`Vec2::to_vec3`] and
/// [`Mat3::transform_vector`](crate::Mat3::transform_vector)).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub const fn one() -> Self {
        Self { x: 1.0, y: 1.0 }
    }

    /// Vector with both components set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn scale(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }

    /// Componentwise product.
    #[inline]
    pub fn component_mul(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x * rhs.x, self.y * rhs.y)
    }

    #[inline]
    pub fn dot(self, rhs: Vec2) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared length; avoids the square root when only comparing magnitudes.
    #[inline]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Returns the unit vector in the same direction.
    ///
    /// Vectors shorter than [`ZERO_THRESHOLD`](crate::consts::ZERO_THRESHOLD)
    /// normalize to the zero vector instead of dividing by (nearly) zero.
    #[inline]
    pub fn normalize(self) -> Vec2 {
        let len = self.length();
        if is_zero(len) {
            Vec2::zero()
        } else {
            self / len
        }
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (self - other).length()
    }

    /// Componentwise minimum.
    #[inline]
    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Componentwise maximum.
    #[inline]
    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Lifts the vector to a homogeneous point (`z = 1`).
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, 1.0)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f64) -> Vec2 {
        self.scale(rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-10
    }

    #[test]
    fn arithmetic_operators() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(1.0, 2.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(a - b, Vec2::new(2.0, 2.0));
        assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
        assert_eq!(a.scale(0.5), Vec2::new(1.5, 2.0));
        assert_eq!(-a, Vec2::new(-3.0, -4.0));
    }

    #[test]
    fn dot_and_lengths() {
        let a = Vec2::new(3.0, 4.0);
        assert_eq!(a.dot(Vec2::new(2.0, 1.0)), 10.0);
        assert_eq!(a.length(), 5.0);
        assert_eq!(a.length_squared(), 25.0);
        assert_eq!(a.distance(Vec2::new(0.0, 0.0)), 5.0);
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = Vec2::new(3.0, 4.0).normalize();
        assert!(close(n.length(), 1.0));
        assert!(close(n.x, 0.6));
        assert!(close(n.y, 0.8));
    }

    #[test]
    fn normalize_zero_vector_returns_zero() {
        assert_eq!(Vec2::zero().normalize(), Vec2::zero());
        // Below the zero threshold counts as zero too.
        assert_eq!(Vec2::new(1e-9, 0.0).normalize(), Vec2::zero());
    }

    #[test]
    fn to_vec3_sets_homogeneous_one() {
        assert_eq!(Vec2::new(2.0, 3.0).to_vec3(), Vec3::new(2.0, 3.0, 1.0));
    }

    #[test]
    fn componentwise_helpers() {
        let a = Vec2::new(1.0, 5.0);
        let b = Vec2::new(3.0, 2.0);
        assert_eq!(a.component_mul(b), Vec2::new(3.0, 10.0));
        assert_eq!(a.min(b), Vec2::new(1.0, 2.0));
        assert_eq!(a.max(b), Vec2::new(3.0, 5.0));
    }
}
