//! 2D camera: world ⇄ normalized ⇄ screen-pixel conversions.
//!
//! Spaces:
//! - world: +X right, +Y up
//! - normalized (view output): the visible region spans `[-1, 1]` on both axes
//!   at zoom 1
//! - screen: pixels, origin top-left, +Y down
//!
//! The view matrix is the camera's own placement inverted,
//! `Scale(zoom) · Rotation(-rotation) · Translation(-position)`, so moving the
//! camera right slides the world left and zooming in enlarges the world.

use crate::consts::{ZERO_THRESHOLD, deg_to_rad, rad_to_deg};
use crate::coords::{Bounds, Vec2};
use crate::error::SingularMatrixError;
use crate::matrix::Mat3;

/// Camera for one viewport.
///
/// Invariant: `zoom` is strictly positive and finite. Mutators that would break
/// it are ignored (the previous value is kept) and logged at debug level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera2d {
    position: Vec2,
    zoom: f64,
    rotation: f64,
}

impl Camera2d {
    /// Camera at the world origin, zoom 1, no rotation.
    #[inline]
    pub const fn new() -> Self {
        Self {
            position: Vec2::zero(),
            zoom: 1.0,
            rotation: 0.0,
        }
    }

    /// Camera with explicit values. An invalid `zoom` falls back to 1.0.
    pub fn from_parts(position: Vec2, zoom: f64, rotation: f64) -> Self {
        let mut cam = Self { position, zoom: 1.0, rotation };
        cam.set_zoom(zoom);
        cam
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Rotation in radians.
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[inline]
    pub fn rotation_degrees(&self) -> f64 {
        rad_to_deg(self.rotation)
    }

    // ── matrices ──────────────────────────────────────────────────────────

    /// World → normalized view space.
    pub fn view_matrix(&self) -> Mat3 {
        Mat3::scale(self.zoom, self.zoom)
            * Mat3::rotation(-self.rotation)
            * Mat3::translation(-self.position.x, -self.position.y)
    }

    /// Normalized view space → screen pixels, flipping Y.
    ///
    /// `x' = x·w/2 + w/2`, `y' = h/2 - y·h/2`.
    pub fn projection_matrix(&self, screen_w: f64, screen_h: f64) -> Mat3 {
        let hw = screen_w / 2.0;
        let hh = screen_h / 2.0;
        Mat3::from_rows([
            [hw, 0.0, hw],
            [0.0, -hh, hh],
            [0.0, 0.0, 1.0],
        ])
    }

    /// World → screen pixels in one matrix (`projection · view`).
    pub fn view_projection_matrix(&self, screen_w: f64, screen_h: f64) -> Mat3 {
        self.projection_matrix(screen_w, screen_h) * self.view_matrix()
    }

    // ── conversions ───────────────────────────────────────────────────────

    pub fn world_to_screen(&self, world: Vec2, screen_w: f64, screen_h: f64) -> Vec2 {
        let v = self.view_matrix().transform_point(world);
        let hw = screen_w / 2.0;
        let hh = screen_h / 2.0;
        Vec2::new(v.x * hw + hw, hh - v.y * hh)
    }

    /// Screen pixels → world, failing when the view matrix cannot be inverted.
    pub fn try_screen_to_world(
        &self,
        screen: Vec2,
        screen_w: f64,
        screen_h: f64,
    ) -> Result<Vec2, SingularMatrixError> {
        let hw = screen_w / 2.0;
        let hh = screen_h / 2.0;
        let normalized = Vec2::new((screen.x - hw) / hw, (hh - screen.y) / hh);

        let inverse_view = self.view_matrix().inverse()?;
        Ok(inverse_view.transform_point(normalized))
    }

    /// Screen pixels → world.
    ///
    /// Returns the world origin when the view matrix is singular (zoom so small
    /// that `zoom²` underflows the singularity threshold). Use
    /// [`try_screen_to_world`](Self::try_screen_to_world) to observe that case.
    pub fn screen_to_world(&self, screen: Vec2, screen_w: f64, screen_h: f64) -> Vec2 {
        match self.try_screen_to_world(screen, screen_w, screen_h) {
            Ok(world) => world,
            Err(err) => {
                log::debug!("Camera2d: {err}; screen_to_world falls back to origin");
                Vec2::zero()
            }
        }
    }

    /// Axis-aligned world box covering everything visible on screen.
    ///
    /// With rotation the visible region is a rotated rectangle, so the box is
    /// built from all four un-projected screen corners.
    pub fn bounds(&self, screen_w: f64, screen_h: f64) -> Bounds {
        let corners = [
            Vec2::new(screen_w, 0.0),
            Vec2::new(0.0, screen_h),
            Vec2::new(screen_w, screen_h),
        ];
        let top_left = self.screen_to_world(Vec2::zero(), screen_w, screen_h);

        corners.iter().fold(Bounds::new(top_left, top_left), |b, &c| {
            b.include(self.screen_to_world(c, screen_w, screen_h))
        })
    }

    // ── mutators ──────────────────────────────────────────────────────────

    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Sets the zoom. Non-positive or non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > 0.0 && zoom.is_finite() {
            self.zoom = zoom;
        } else {
            log::debug!("Camera2d: rejected zoom {zoom}; keeping {}", self.zoom);
        }
    }

    /// Multiplies the zoom by `factor`. Non-positive factors are ignored.
    pub fn zoom_by(&mut self, factor: f64) {
        if factor > 0.0 {
            self.set_zoom(self.zoom * factor);
        } else {
            log::debug!("Camera2d: rejected zoom factor {factor}; keeping {}", self.zoom);
        }
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
    pub fn move_by(&mut self, offset: Vec2) {
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

    /// Snaps the camera onto `target`.
    #[inline]
    pub fn look_at(&mut self, target: Vec2) {
        self.position = target;
    }

    /// Moves toward `target` by at most `speed · dt` along the straight line.
    ///
    /// Never overshoots. Does nothing when already within the zero threshold of
    /// the target, or when `speed` or `dt` is not positive.
    pub fn follow_target(&mut self, target: Vec2, speed: f64, dt: f64) {
        if speed.is_nan() || dt.is_nan() || speed <= 0.0 || dt <= 0.0 {
            log::debug!("Camera2d: follow_target ignored (speed {speed}, dt {dt})");
            return;
        }

        let mut step = target - self.position;
        let distance = step.length();
        if distance <= ZERO_THRESHOLD {
            return;
        }

        let max_step = speed * dt;
        if distance > max_step {
            step = step.normalize() * max_step;
        }
        self.position += step;
    }
}

impl Default for Camera2d {
    fn default() -> Self {
        Self::new()
    }
}
