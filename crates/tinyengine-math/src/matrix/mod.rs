//! Homogeneous 3x3 matrices and their GPU-side expansion.
//!
//! CPU math is `f64` and row-major ([`Mat3`]). Shaders receive a column-major
//! `f32` 4x4 ([`GpuMat4`]) produced by [`Mat3::to_gpu_mat4`].

mod gpu;
mod mat3;

pub use gpu::GpuMat4;
pub use mat3::Mat3;
