//! tinyengine math crate.
//!
//! This crate owns the 2D affine math used by the renderer and game logic:
//! vectors, 3x3 homogeneous matrices, object transforms and the 2D camera.
//! Every type is a plain `Copy` value; nothing here allocates on the hot path.

pub mod consts;
pub mod coords;
pub mod matrix;
pub mod transform;
pub mod camera;

pub mod error;
pub mod logging;

pub use camera::Camera2d;
pub use coords::{Bounds, Vec2, Vec3};
pub use error::SingularMatrixError;
pub use matrix::{GpuMat4, Mat3};
pub use transform::Transform;
