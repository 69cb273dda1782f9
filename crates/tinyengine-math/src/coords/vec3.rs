use core::ops::{Add, Mul, Sub};

use crate::consts::is_zero;

use super::Vec2;

/// 3-component vector, used as the homogeneous carrier for 2D math.
///
/// `z = 1` marks a point, `z = 0` a direction.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    #[inline]
    pub fn scale(self, scalar: f64) -> Vec3 {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    #[inline]
    pub fn dot(self, rhs: Vec3) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Standard right-handed cross product.
    #[inline]
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    /// Unit vector, or zero when the length is below the zero threshold.
    #[inline]
    pub fn normalize(self) -> Vec3 {
        let len = self.length();
        if is_zero(len) {
            Vec3::zero()
        } else {
            self.scale(1.0 / len)
        }
    }

    #[inline]
    pub fn distance(self, other: Vec3) -> f64 {
        (self - other).length()
    }

    /// Projects back to 2D.
    ///
    /// Divides by `z` (perspective divide) unless `z == 0`, in which case the
    /// vector is a direction and `x`/`y` pass through unchanged.
    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        if self.z == 0.0 {
            Vec2::new(self.x, self.y)
        } else {
            Vec2::new(self.x / self.z, self.y / self.z)
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f64) -> Vec3 {
        self.scale(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn cross_of_basis_vectors() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn length_and_normalize() {
        let v = Vec3::new(2.0, 3.0, 6.0);
        assert_eq!(v.length(), 7.0);
        assert!((v.normalize().length() - 1.0).abs() < 1e-10);
        assert_eq!(Vec3::zero().normalize(), Vec3::zero());
    }

    #[test]
    fn to_vec2_divides_by_z() {
        assert_eq!(Vec3::new(4.0, 6.0, 2.0).to_vec2(), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn to_vec2_with_zero_z_passes_through() {
        assert_eq!(Vec3::new(4.0, 6.0, 0.0).to_vec2(), Vec2::new(4.0, 6.0));
    }
}
