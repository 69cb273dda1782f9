//! Object transform: position + rotation + non-uniform scale.
//!
//! The matrix is always composed in SRT order:
//!
//! ```text
//! M = Translation(position) · Rotation(rotation) · Scale(scale)
//! ```
//!
//! so a local point is scaled first, then rotated, then placed in the world.
//! Parent/child relationships are not stored; compose values on demand with
//! [`Transform::combine`].

use crate::consts::{EPSILON, deg_to_rad, rad_to_deg};
use crate::coords::Vec2;
use crate::error::SingularMatrixError;
use crate::matrix::Mat3;

/// Position, rotation (radians, counter-clockwise) and scale of an object.
///
/// Plain value type: owned by one game object and mutated in place every frame.
/// The matrix is derived on each call to [`to_matrix`](Self::to_matrix).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f64,
    pub scale: Vec2,
}

impl Transform {
    /// Identity transform: origin, no rotation, unit scale.
    #[inline]
    pub const fn new() -> Self {
        Self {
            position: Vec2::zero(),
            rotation: 0.0,
            scale: Vec2::one(),
        }
    }

    #[inline]
    pub const fn from_parts(position: Vec2, rotation: f64, scale: Vec2) -> Self {
        Self { position, rotation, scale }
    }

    /// Local-to-world matrix, `T · R · S`.
    pub fn to_matrix(&self) -> Mat3 {
        Mat3::translation(self.position.x, self.position.y)
            * Mat3::rotation(self.rotation)
            * Mat3::scale(self.scale.x, self.scale.y)
    }

    /// World-to-local matrix.
    ///
    /// Fails when a scale axis is zero (or otherwise collapses the determinant).
    pub fn to_inverse_matrix(&self) -> Result<Mat3, SingularMatrixError> {
        self.to_matrix().inverse()
    }

    #[inline]
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        self.to_matrix().transform_point(p)
    }

    /// Rotates and scales a direction; position is ignored.
    #[inline]
    pub fn transform_vector(&self, v: Vec2) -> Vec2 {
        self.to_matrix().transform_vector(v)
    }

    pub fn inverse_transform_point(&self, p: Vec2) -> Result<Vec2, SingularMatrixError> {
        Ok(self.to_inverse_matrix()?.transform_point(p))
    }

    pub fn inverse_transform_vector(&self, v: Vec2) -> Result<Vec2, SingularMatrixError> {
        Ok(self.to_inverse_matrix()?.transform_vector(v))
    }

    // ── mutators ──────────────────────────────────────────────────────────

    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    #[inline]
    pub fn set_rotation(&mut self, radians: f64) {
        self.rotation = radians;
    }

    #[inline]
    pub fn set_rotation_degrees(&mut self, degrees: f64) {
        self.rotation = deg_to_rad(degrees);
    }

    #[inline]
    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
    }

    /// Sets both scale axes to `s`.
    #[inline]
    pub fn set_uniform_scale(&mut self, s: f64) {
        self.scale = Vec2::splat(s);
    }

    #[inline]
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }

    #[inline]
    pub fn rotate(&mut self, delta_radians: f64) {
        self.rotation += delta_radians;
    }

    #[inline]
    pub fn rotate_degrees(&mut self, delta_degrees: f64) {
        self.rotation += deg_to_rad(delta_degrees);
    }

    /// Multiplies the scale componentwise by `factor`.
    #[inline]
    pub fn scale_by(&mut self, factor: Vec2) {
        self.scale = self.scale.component_mul(factor);
    }

    #[inline]
    pub fn scale_by_uniform(&mut self, s: f64) {
        self.scale = self.scale * s;
    }

    /// Restores the identity transform.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // ── orientation ───────────────────────────────────────────────────────

    #[inline]
    pub fn rotation_degrees(&self) -> f64 {
        rad_to_deg(self.rotation)
    }

    /// Unit heading `(cos θ, sin θ)`. Independent of position and scale.
    #[inline]
    pub fn forward(&self) -> Vec2 {
        let (sin, cos) = self.rotation.sin_cos();
        Vec2::new(cos, sin)
    }

    /// `forward` rotated a quarter turn counter-clockwise: `(-sin θ, cos θ)`.
    #[inline]
    pub fn right(&self) -> Vec2 {
        let (sin, cos) = self.rotation.sin_cos();
        Vec2::new(-sin, cos)
    }

    /// `(sin θ, -cos θ)`; points toward the top of the screen when +Y is down.
    #[inline]
    pub fn up(&self) -> Vec2 {
        let (sin, cos) = self.rotation.sin_cos();
        Vec2::new(sin, -cos)
    }

    // ── composition ───────────────────────────────────────────────────────

    /// Places `child` (expressed in this transform's local space) into the
    /// parent's space.
    ///
    /// Position goes through the full parent matrix; rotations add; scales
    /// multiply componentwise.
    pub fn combine(&self, child: &Transform) -> Transform {
        Transform {
            position: self.transform_point(child.position),
            rotation: self.rotation + child.rotation,
            scale: self.scale.component_mul(child.scale),
        }
    }

    /// Tolerant equality: position distance, rotation and each scale axis all
    /// within [`EPSILON`].
    pub fn approx_eq(&self, other: &Transform) -> bool {
        self.position.distance(other.position) < EPSILON
            && (self.rotation - other.rotation).abs() < EPSILON
            && (self.scale.x - other.scale.x).abs() < EPSILON
            && (self.scale.y - other.scale.y).abs() < EPSILON
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Transform> for Mat3 {
    fn from(t: Transform) -> Self {
        t.to_matrix()
    }
}
