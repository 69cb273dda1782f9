use core::ops::{Mul, MulAssign};

use crate::consts::EPSILON;
use crate::coords::{Vec2, Vec3};
use crate::error::SingularMatrixError;

/// 3x3 matrix representing a 2D affine map in homogeneous coordinates.
///
/// Storage is row-major: `rows[r][c]`. Points are column vectors, so
/// `transform_point(p)` computes `rows[0]·(x, y, 1)`, `rows[1]·(x, y, 1)`, ...
/// and the translation lives in the last column.
///
/// Composition reads right to left: `a.multiply(b)` (or `a * b`) applies `b`
/// first, then `a`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    pub rows: [[f64; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3::from_rows([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    #[inline]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub const fn translation(dx: f64, dy: f64) -> Self {
        Self::from_rows([
            [1.0, 0.0, dx],
            [0.0, 1.0, dy],
            [0.0, 0.0, 1.0],
        ])
    }

    #[inline]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::from_rows([
            [sx, 0.0, 0.0],
            [0.0, sy, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    /// Counter-clockwise rotation by `angle` radians.
    #[inline]
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_rows([
            [cos, -sin, 0.0],
            [sin, cos, 0.0],
            [0.0, 0.0, 1.0],
        ])
    }

    #[inline]
    pub fn row(&self, r: usize) -> Vec3 {
        let [x, y, z] = self.rows[r];
        Vec3::new(x, y, z)
    }

    #[inline]
    pub fn col(&self, c: usize) -> Vec3 {
        Vec3::new(self.rows[0][c], self.rows[1][c], self.rows[2][c])
    }

    /// Row-by-column product `self · other`.
    pub fn multiply(&self, other: &Mat3) -> Mat3 {
        let a = &self.rows;
        let b = &other.rows;
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        Mat3::from_rows(out)
    }

    #[inline]
    pub fn multiply_vector(&self, v: Vec3) -> Vec3 {
        Vec3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }

    /// Transforms a point (`z = 1`); translation applies.
    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        self.multiply_vector(p.to_vec3()).to_vec2()
    }

    /// Transforms a direction (`z = 0`); translation is ignored.
    #[inline]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        let r = self.multiply_vector(Vec3::new(v.x, v.y, 0.0));
        Vec2::new(r.x, r.y)
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.rows;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverse via the adjugate.
    ///
    /// Fails when `|det| < EPSILON`.
    pub fn inverse(&self) -> Result<Mat3, SingularMatrixError> {
        let det = self.determinant();
        if det.abs() < EPSILON {
            return Err(SingularMatrixError::new(det));
        }

        let m = &self.rows;
        let inv = 1.0 / det;

        Ok(Mat3::from_rows([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv,
            ],
        ]))
    }

    pub fn transpose(&self) -> Mat3 {
        let m = &self.rows;
        Mat3::from_rows([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    /// Componentwise comparison within [`EPSILON`].
    #[inline]
    pub fn approx_eq(&self, other: &Mat3) -> bool {
        self.approx_eq_with(other, EPSILON)
    }

    pub fn approx_eq_with(&self, other: &Mat3, tolerance: f64) -> bool {
        self.rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.approx_eq(&Mat3::IDENTITY)
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat3 {
    type Output = Mat3;
    #[inline]
    fn mul(self, rhs: Mat3) -> Mat3 {
        self.multiply(&rhs)
    }
}

impl MulAssign for Mat3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Mat3) {
        *self = self.multiply(&rhs);
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.multiply_vector(rhs)
    }
}
