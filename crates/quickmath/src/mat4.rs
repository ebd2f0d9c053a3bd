//! 4x4 matrix: 3D transforms, projections, and view matrices
//!
//! Columns are [`Vec4`]s, so products, transposes, and the final scale of
//! the inverse run column-at-a-time through the packed backend.

use crate::simd::{self, F32x4};
use crate::{Mat3, Vec3, Vec4};

/// 4x4 transformation matrix (column-major)
///
/// `m[c][r]` is column `c`, row `r`. Vectors are columns multiplied on the
/// right, so `a * b` applies `b` first.
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    pub cols: [Vec4; 4],
}

impl Mat4 {
    pub const ZERO: Mat4 = Mat4 {
        cols: [Vec4::ZERO; 4],
    };

    pub const IDENTITY: Mat4 = Mat4 {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Create from a column-major array
    pub fn from_cols_array(arr: &[f32; 16]) -> Self {
        bytemuck::cast(*arr)
    }

    /// Convert to a column-major array
    pub fn to_cols_array(&self) -> [f32; 16] {
        bytemuck::cast(*self)
    }

    /// Convert to 2D array format
    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        bytemuck::cast(*self)
    }

    pub fn col(&self, idx: usize) -> Vec4 {
        self.cols[idx]
    }

    pub fn row(&self, idx: usize) -> Vec4 {
        Vec4::new(
            self.cols[0][idx],
            self.cols[1][idx],
            self.cols[2][idx],
            self.cols[3][idx],
        )
    }

    #[inline(always)]
    fn packed(&self) -> [F32x4; 4] {
        self.cols.map(Vec4::packed)
    }

    #[inline(always)]
    fn from_packed(cols: [F32x4; 4]) -> Self {
        Self {
            cols: cols.map(Vec4::from_packed),
        }
    }

    /// Create a translation matrix (fourth column)
    pub fn from_translation(t: Vec3) -> Self {
        let mut result = Self::IDENTITY;
        result.cols[3] = Vec4::from((t, 1.0));
        result
    }

    /// Create a scale matrix
    pub fn from_scale(s: Vec3) -> Self {
        let mut result = Self::IDENTITY;
        result.cols[0].x = s.x;
        result.cols[1].y = s.y;
        result.cols[2].z = s.z;
        result
    }

    /// Rotation about `axis` by `angle` degrees (Rodrigues' formula)
    ///
    /// The axis is normalized first.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let n = axis.normalize();
        let (sin, cos) = angle.to_radians().sin_cos();
        let k = 1.0 - cos;

        let mut result = Self::IDENTITY;
        result.cols[0].x = n.x * n.x * k + cos;
        result.cols[0].y = n.x * n.y * k + n.z * sin;
        result.cols[0].z = n.x * n.z * k - n.y * sin;
        result.cols[1].x = n.y * n.x * k - n.z * sin;
        result.cols[1].y = n.y * n.y * k + cos;
        result.cols[1].z = n.y * n.z * k + n.x * sin;
        result.cols[2].x = n.z * n.x * k + n.y * sin;
        result.cols[2].y = n.z * n.y * k - n.x * sin;
        result.cols[2].z = n.z * n.z * k + cos;
        result
    }

    /// Rotation from Euler angles in degrees
    ///
    /// X is applied first, then Y, then Z (`Rz * Ry * Rx`).
    pub fn from_euler(euler: Vec3) -> Self {
        let (sin_x, cos_x) = euler.x.to_radians().sin_cos();
        let (sin_y, cos_y) = euler.y.to_radians().sin_cos();
        let (sin_z, cos_z) = euler.z.to_radians().sin_cos();

        let mut result = Self::IDENTITY;
        result.cols[0].x = cos_y * cos_z;
        result.cols[0].y = cos_y * sin_z;
        result.cols[0].z = -sin_y;
        result.cols[1].x = sin_x * sin_y * cos_z - cos_x * sin_z;
        result.cols[1].y = sin_x * sin_y * sin_z + cos_x * cos_z;
        result.cols[1].z = sin_x * cos_y;
        result.cols[2].x = cos_x * sin_y * cos_z + sin_x * sin_z;
        result.cols[2].y = cos_x * sin_y * sin_z - sin_x * cos_z;
        result.cols[2].z = cos_x * cos_y;
        result
    }

    /// Upper-left 3x3 block (drops translation and projection terms)
    pub fn top_left(&self) -> Mat3 {
        Mat3::from_cols(self.cols[0].xyz(), self.cols[1].xyz(), self.cols[2].xyz())
    }

    /// Right-handed perspective projection
    ///
    /// `fov` is the full vertical field of view in degrees. Depth maps to
    /// `[-1, 1]` and `m[2][3] = -1` moves `-z` into `w` for the divide.
    pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let scale = (fov * 0.5).to_radians().tan() * near;
        let right = aspect * scale;
        let top = scale;

        let mut result = Self::ZERO;
        result.cols[0].x = near / right;
        result.cols[1].y = near / top;
        result.cols[2].z = -(far + near) / (far - near);
        result.cols[3].z = -2.0 * far * near / (far - near);
        result.cols[2].w = -1.0;
        result
    }

    /// Orthographic projection of the given box onto `[-1, 1]` on every axis
    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let mut result = Self::IDENTITY;
        result.cols[0].x = 2.0 / (right - left);
        result.cols[1].y = 2.0 / (top - bottom);
        result.cols[2].z = 2.0 / (near - far);

        result.cols[3].x = (left + right) / (left - right);
        result.cols[3].y = (bottom + top) / (bottom - top);
        result.cols[3].z = (near + far) / (near - far);
        result
    }

    /// View matrix for a camera at `pos` whose backward axis is `dir`
    ///
    /// `dir` is expected to be normalized and points from the scene towards
    /// the camera (the camera looks down `-dir`).
    pub fn look(pos: Vec3, dir: Vec3, up: Vec3) -> Self {
        let r = up.cross(dir).normalize();
        let u = dir.cross(r);

        // Basis vectors become the rows of the rotation block
        let rotation = Self::from_cols(
            Vec4::new(r.x, u.x, dir.x, 0.0),
            Vec4::new(r.y, u.y, dir.y, 0.0),
            Vec4::new(r.z, u.z, dir.z, 0.0),
            Vec4::W,
        );

        rotation * Self::from_translation(-pos)
    }

    /// View matrix for a camera at `pos` looking at `target`
    pub fn look_at(pos: Vec3, target: Vec3, up: Vec3) -> Self {
        Self::look(pos, (pos - target).normalize(), up)
    }

    /// Transpose the matrix
    pub fn transpose(&self) -> Self {
        Self::from_packed(F32x4::transpose4(self.packed()))
    }

    /// Matrix of cofactors, already transposed (the classical adjoint)
    ///
    /// Laplace expansion: six 2x2 minors of the last two columns feed the
    /// first two output rows, then the minors are rebuilt from other column
    /// pairs for the remaining rows.
    pub fn adjugate(&self) -> Self {
        let [a, b, c, d] = self.cols[0].to_array();
        let [e, f, g, h] = self.cols[1].to_array();
        let [i, j, k, l] = self.cols[2].to_array();
        let [m, n, o, p] = self.cols[3].to_array();

        let mut adj = Self::ZERO;

        let mut t = [
            k * p - o * l,
            j * p - n * l,
            j * o - n * k,
            i * p - m * l,
            i * o - m * k,
            i * n - m * j,
        ];

        adj.cols[0].x = f * t[0] - g * t[1] + h * t[2];
        adj.cols[1].x = -(e * t[0] - g * t[3] + h * t[4]);
        adj.cols[2].x = e * t[1] - f * t[3] + h * t[5];
        adj.cols[3].x = -(e * t[2] - f * t[4] + g * t[5]);

        adj.cols[0].y = -(b * t[0] - c * t[1] + d * t[2]);
        adj.cols[1].y = a * t[0] - c * t[3] + d * t[4];
        adj.cols[2].y = -(a * t[1] - b * t[3] + d * t[5]);
        adj.cols[3].y = a * t[2] - b * t[4] + c * t[5];

        t = [
            g * p - o * h,
            f * p - n * h,
            f * o - n * g,
            e * p - m * h,
            e * o - m * g,
            e * n - m * f,
        ];

        adj.cols[0].z = b * t[0] - c * t[1] + d * t[2];
        adj.cols[1].z = -(a * t[0] - c * t[3] + d * t[4]);
        adj.cols[2].z = a * t[1] - b * t[3] + d * t[5];
        adj.cols[3].z = -(a * t[2] - b * t[4] + c * t[5]);

        t = [
            g * l - k * h,
            f * l - j * h,
            f * k - j * g,
            e * l - i * h,
            e * k - i * g,
            e * j - i * f,
        ];

        adj.cols[0].w = -(b * t[0] - c * t[1] + d * t[2]);
        adj.cols[1].w = a * t[0] - c * t[3] + d * t[4];
        adj.cols[2].w = -(a * t[1] - b * t[3] + d * t[5]);
        adj.cols[3].w = a * t[2] - b * t[4] + c * t[5];

        adj
    }

    pub fn determinant(&self) -> f32 {
        Self::determinant_with(&self.cols[0], &self.adjugate())
    }

    /// Calculate the inverse via the adjugate
    ///
    /// A singular matrix yields `inf`/`NaN` components.
    pub fn inverse(&self) -> Self {
        let adj = self.adjugate();
        let scale = F32x4::splat(1.0 / Self::determinant_with(&self.cols[0], &adj));
        Self::from_packed(adj.packed().map(|col| col * scale))
    }

    #[inline]
    fn determinant_with(first: &Vec4, adj: &Self) -> f32 {
        first.x * adj.cols[0].x
            + first.y * adj.cols[1].x
            + first.z * adj.cols[2].x
            + first.w * adj.cols[3].x
    }

    /// Transform a point (`w = 1`, no perspective divide)
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        (*self * Vec4::from((p, 1.0))).xyz()
    }

    /// Transform a direction (`w = 0`, ignores translation)
    pub fn transform_vector(&self, v: Vec3) -> Vec3 {
        (*self * Vec4::from((v, 0.0))).xyz()
    }
}

impl core::ops::Index<usize> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn index(&self, i: usize) -> &Vec4 {
        &self.cols[i]
    }
}

impl core::ops::IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vec4 {
        &mut self.cols[i]
    }
}

impl core::ops::Add for Mat4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        let (a, b) = (self.packed(), rhs.packed());
        Self::from_packed([a[0] + b[0], a[1] + b[1], a[2] + b[2], a[3] + b[3]])
    }
}

impl core::ops::Sub for Mat4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let (a, b) = (self.packed(), rhs.packed());
        Self::from_packed([a[0] - b[0], a[1] - b[1], a[2] - b[2], a[3] - b[3]])
    }
}

impl core::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, v: Vec4) -> Vec4 {
        Vec4::from_packed(simd::mul_column(&self.packed(), v.packed()))
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let lhs = self.packed();
        Self::from_packed(rhs.packed().map(|col| simd::mul_column(&lhs, col)))
    }
}

impl core::ops::AddAssign for Mat4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::ops::SubAssign for Mat4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl core::ops::MulAssign for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat4_near(a: &Mat4, b: &Mat4, eps: f32) {
        let (a, b) = (a.to_cols_array(), b.to_cols_array());
        for i in 0..16 {
            assert!((a[i] - b[i]).abs() < eps, "element {}: {} vs {}", i, a[i], b[i]);
        }
    }

    fn sample() -> Mat4 {
        Mat4::from_translation(Vec3::new(1.0, -2.0, 3.0))
            * Mat4::from_axis_angle(Vec3::new(1.0, 1.0, 0.0), 35.0)
            * Mat4::from_scale(Vec3::new(2.0, 0.5, 3.0))
    }

    #[test]
    fn test_translation_moves_points_not_directions() {
        let m = Mat4::from_translation(Vec3::new(3.0, 4.0, 5.0));
        assert_eq!(m * Vec4::W, Vec4::new(3.0, 4.0, 5.0, 1.0));
        assert_eq!(m.transform_vector(Vec3::X), Vec3::X);
        assert_eq!(m.transform_point(Vec3::ZERO), Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn test_product_order() {
        let t = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let s = Mat4::from_scale(Vec3::splat(2.0));
        // scale first, then translate
        assert_eq!((t * s).transform_point(Vec3::ONE), Vec3::new(3.0, 2.0, 2.0));
        // translate first, then scale
        assert_eq!((s * t).transform_point(Vec3::ONE), Vec3::new(4.0, 2.0, 2.0));
    }

    #[test]
    fn test_inverse() {
        let m = sample();
        assert_mat4_near(&(m * m.inverse()), &Mat4::IDENTITY, 1e-4);
        assert_mat4_near(&(m.inverse() * m), &Mat4::IDENTITY, 1e-4);
        assert!((m.determinant() - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_transpose() {
        let m = sample();
        let t = m.transpose();
        for c in 0..4 {
            for r in 0..4 {
                assert_eq!(t[c][r], m[r][c]);
            }
        }
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_axis_angle_rotation_about_z() {
        let m = Mat4::from_axis_angle(Vec3::new(0.0, 0.0, 5.0), 90.0);
        let v = m.transform_vector(Vec3::X);
        assert!((v - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_euler_terms() {
        let m = Mat4::from_euler(Vec3::new(0.0, 90.0, 0.0));
        assert!((m[0][2] + 1.0).abs() < 1e-6);
        assert!((m[2][0] - 1.0).abs() < 1e-6);

        // X, then Y, then Z
        let e = Vec3::new(30.0, -45.0, 60.0);
        let composed = Mat4::from_axis_angle(Vec3::Z, e.z)
            * Mat4::from_axis_angle(Vec3::Y, e.y)
            * Mat4::from_axis_angle(Vec3::X, e.x);
        assert_mat4_near(&Mat4::from_euler(e), &composed, 1e-5);
    }

    #[test]
    fn test_perspective_terms() {
        let p = Mat4::perspective(60.0, 1.0, 0.1, 100.0);
        assert_eq!(p[2][3], -1.0);
        assert!((p[3][2] - (-0.2002002)).abs() < 1e-6);
        assert!((p[1][1] - 1.0 / 30.0f32.to_radians().tan()).abs() < 1e-4);
        assert_eq!(p[3][3], 0.0);

        // near plane maps to -1, far plane to +1
        let near = p * Vec4::new(0.0, 0.0, -0.1, 1.0);
        let far = p * Vec4::new(0.0, 0.0, -100.0, 1.0);
        assert!((near.z / near.w + 1.0).abs() < 1e-4);
        assert!((far.z / far.w - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_orthographic_maps_box_to_ndc() {
        let o = Mat4::orthographic(-2.0, 6.0, -1.0, 3.0, 0.5, 10.0);
        // near and far are distances along -Z
        let min = o * Vec4::new(-2.0, -1.0, -0.5, 1.0);
        let max = o * Vec4::new(6.0, 3.0, -10.0, 1.0);
        assert!((min.xyz() - Vec3::splat(-1.0)).length() < 1e-6);
        assert!((max.xyz() - Vec3::ONE).length() < 1e-6);
    }

    #[test]
    fn test_look_at() {
        let pos = Vec3::new(0.0, 0.0, 5.0);
        let view = Mat4::look_at(pos, Vec3::ZERO, Vec3::Y);

        // Camera sits at the origin of view space, target lies down -Z
        assert!(view.transform_point(pos).length() < 1e-6);
        let target = view.transform_point(Vec3::ZERO);
        assert!((target - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-6);

        let right = view.transform_point(Vec3::new(1.0, 0.0, 5.0));
        assert!((right - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_top_left() {
        let m = sample();
        let tl = m.top_left();
        for c in 0..3 {
            assert_eq!(tl[c], m[c].xyz());
        }
        assert_eq!(Mat4::IDENTITY.top_left(), Mat3::IDENTITY);
    }

    #[test]
    fn test_array_round_trip() {
        let m = sample();
        assert_eq!(Mat4::from_cols_array(&m.to_cols_array()), m);
        assert_eq!(m.to_cols_array_2d()[3][1], m[3][1]);
        assert_eq!(m.row(1)[3], m[3][1]);
    }
}
