//! Vector and box types shared by matrices, transforms and the camera.
//!
//! World space:
//! - units are arbitrary (typically pixels at zoom 1)
//! - +X right, +Y up
//!
//! Screen space (see [`Camera2d`](crate::Camera2d)) flips Y so that +Y is down.

mod bounds;
mod vec2;
mod vec3;

pub use bounds::Bounds;
pub use vec2::Vec2;
pub use vec3::Vec3;
