use bytemuck::{Pod, Zeroable};

use super::Mat3;

/// 4x4 `f32` matrix in GPU uniform layout.
///
/// Column-major (`cols[c][r]`), matching WGSL `mat4x4<f32>` and GLSL `mat4`.
/// A [`Mat3`] expands so that the 2D affine map acts on x/y/w while z passes
/// through unchanged:
///
/// ```text
/// | m00 m01  0  m02 |
/// | m10 m11  0  m12 |
/// |  0   0   1   0  |
/// | m20 m21  0  m22 |
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GpuMat4 {
    pub cols: [[f32; 4]; 4],
}

impl GpuMat4 {
    pub const IDENTITY: GpuMat4 = GpuMat4 {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// Raw bytes for a uniform buffer upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Transforms tightly packed `xyz` vertex triples in place.
    ///
    /// A trailing partial triple is left untouched.
    pub fn apply_to_vertices(&self, vertices: &mut [f32]) {
        let c = &self.cols;
        for v in vertices.chunks_exact_mut(3) {
            let (x, y, z) = (v[0], v[1], v[2]);
            v[0] = c[0][0] * x + c[1][0] * y + c[2][0] * z + c[3][0];
            v[1] = c[0][1] * x + c[1][1] * y + c[2][1] * z + c[3][1];
            v[2] = c[0][2] * x + c[1][2] * y + c[2][2] * z + c[3][2];
        }
    }
}

impl Default for GpuMat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    /// Expands to the 4x4 column-major layout consumed by shaders.
    pub fn to_gpu_mat4(&self) -> GpuMat4 {
        let m = self.rows.map(|row| row.map(|v| v as f32));
        GpuMat4 {
            cols: [
                [m[0][0], m[1][0], 0.0, m[2][0]],
                [m[0][1], m[1][1], 0.0, m[2][1]],
                [0.0, 0.0, 1.0, 0.0],
                [m[0][2], m[1][2], 0.0, m[2][2]],
            ],
        }
    }
}

impl From<Mat3> for GpuMat4 {
    fn from(m: Mat3) -> Self {
        m.to_gpu_mat4()
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn identity_expands_to_identity() {
        assert_eq!(Mat3::IDENTITY.to_gpu_mat4(), GpuMat4::IDENTITY);
    }

    #[test]
    fn translation_lands_in_last_column() {
        let g = Mat3::translation(10.0, -4.0).to_gpu_mat4();
        assert_eq!(g.cols[3], [10.0, -4.0, 0.0, 1.0]);
    }

    #[test]
    fn byte_layout_is_sixteen_floats() {
        let g = GpuMat4::from(Mat3::scale(2.0, 3.0));
        let bytes = g.as_bytes();
        assert_eq!(bytes.len(), 64);

        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats[0], 2.0);
        assert_eq!(floats[5], 3.0);
        assert_eq!(floats[10], 1.0);
        assert_eq!(floats[15], 1.0);
    }

    #[test]
    fn apply_to_vertices_matches_mat3() {
        let m = Mat3::translation(5.0, 1.0) * Mat3::rotation(PI / 2.0) * Mat3::scale(2.0, 2.0);
        let mut verts = [1.0_f32, 0.0, 0.5, -1.0, 1.0, 0.0];
        m.to_gpu_mat4().apply_to_vertices(&mut verts);

        let a = m.transform_point(crate::Vec2::new(1.0, 0.0));
        let b = m.transform_point(crate::Vec2::new(-1.0, 1.0));
        assert!((verts[0] as f64 - a.x).abs() < 1e-5);
        assert!((verts[1] as f64 - a.y).abs() < 1e-5);
        assert_eq!(verts[2], 0.5); // z untouched
        assert!((verts[3] as f64 - b.x).abs() < 1e-5);
        assert!((verts[4] as f64 - b.y).abs() < 1e-5);
    }

    #[test]
    fn apply_to_vertices_skips_partial_triple() {
        let mut verts = [1.0_f32, 1.0, 0.0, 7.0];
        Mat3::translation(1.0, 1.0).to_gpu_mat4().apply_to_vertices(&mut verts);
        assert_eq!(verts, [2.0, 2.0, 0.0, 7.0]);
    }
}
