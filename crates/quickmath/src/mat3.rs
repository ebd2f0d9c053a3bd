//! 3x3 matrix (2D affine transforms, normal matrices)

use crate::{Vec2, Vec3};

/// 3x3 matrix (column-major)
///
/// `m[c][r]` is column `c`, row `r`.
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    pub cols: [Vec3; 3],
}

impl Mat3 {
    pub const ZERO: Mat3 = Mat3 {
        cols: [Vec3::ZERO; 3],
    };

    pub const IDENTITY: Mat3 = Mat3 {
        cols: [Vec3::X, Vec3::Y, Vec3::Z],
    };

    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Create from a column-major array
    pub fn from_cols_array(arr: &[f32; 9]) -> Self {
        bytemuck::cast(*arr)
    }

    /// Convert to a column-major array
    pub fn to_cols_array(&self) -> [f32; 9] {
        bytemuck::cast(*self)
    }

    pub fn col(&self, idx: usize) -> Vec3 {
        self.cols[idx]
    }

    pub fn row(&self, idx: usize) -> Vec3 {
        Vec3::new(self.cols[0][idx], self.cols[1][idx], self.cols[2][idx])
    }

    /// 2D translation (third column)
    pub fn from_translation(t: Vec2) -> Self {
        let mut result = Self::IDENTITY;
        result.cols[2].x = t.x;
        result.cols[2].y = t.y;
        result
    }

    /// 2D scale along the diagonal
    pub fn from_scale(s: Vec2) -> Self {
        let mut result = Self::IDENTITY;
        result.cols[0].x = s.x;
        result.cols[1].y = s.y;
        result
    }

    /// Counter-clockwise 2D rotation, angle in degrees
    pub fn from_rotation(angle: f32) -> Self {
        let (sin, cos) = angle.to_radians().sin_cos();

        let mut result = Self::IDENTITY;
        result.cols[0].x = cos;
        result.cols[0].y = sin;
        result.cols[1].x = -sin;
        result.cols[1].y = cos;
        result
    }

    /// Transpose the matrix
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }

    /// Matrix of cofactors, already transposed (the classical adjoint)
    pub fn adjugate(&self) -> Self {
        let [a, b, c] = self.cols[0].to_array();
        let [d, e, f] = self.cols[1].to_array();
        let [g, h, i] = self.cols[2].to_array();

        Self::from_cols(
            Vec3::new(e * i - f * h, -(b * i - h * c), b * f - e * c),
            Vec3::new(-(d * i - g * f), a * i - c * g, -(a * f - d * c)),
            Vec3::new(d * h - g * e, -(a * h - g * b), a * e - b * d),
        )
    }

    pub fn determinant(&self) -> f32 {
        Self::determinant_with(&self.cols[0], &self.adjugate())
    }

    /// Inverse via the adjugate
    ///
    /// A singular matrix yields `inf`/`NaN` components.
    pub fn inverse(&self) -> Self {
        let adj = self.adjugate();
        let inv_det = 1.0 / Self::determinant_with(&self.cols[0], &adj);

        Self::from_cols(adj.cols[0] * inv_det, adj.cols[1] * inv_det, adj.cols[2] * inv_det)
    }

    /// Expansion along the first column, reusing the adjugate's cofactors
    #[inline]
    fn determinant_with(first: &Vec3, adj: &Self) -> f32 {
        first.x * adj.cols[0].x + first.y * adj.cols[1].x + first.z * adj.cols[2].x
    }
}

impl core::ops::Index<usize> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn index(&self, i: usize) -> &Vec3 {
        &self.cols[i]
    }
}

impl core::ops::IndexMut<usize> for Mat3 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vec3 {
        &mut self.cols[i]
    }
}

impl core::ops::Add for Mat3 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_cols(
            self.cols[0] + rhs.cols[0],
            self.cols[1] + rhs.cols[1],
            self.cols[2] + rhs.cols[2],
        )
    }
}

impl core::ops::Sub for Mat3 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(
            self.cols[0] - rhs.cols[0],
            self.cols[1] - rhs.cols[1],
            self.cols[2] - rhs.cols[2],
        )
    }
}

impl core::ops::Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        let m = &self.cols;
        Vec3::new(
            m[0].x * v.x + m[1].x * v.y + m[2].x * v.z,
            m[0].y * v.x + m[1].y * v.y + m[2].y * v.z,
            m[0].z * v.x + m[1].z * v.y + m[2].z * v.z,
        )
    }
}

/// `a * b` applies `b` first, then `a`
impl core::ops::Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1], self * rhs.cols[2])
    }
}

impl core::ops::AddAssign for Mat3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::ops::SubAssign for Mat3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl core::ops::MulAssign for Mat3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Mat3 {
        Mat3::from_cols(
            Vec3::new(2.0, 0.0, 1.0),
            Vec3::new(1.0, 3.0, 0.0),
            Vec3::new(0.0, 1.0, 4.0),
        )
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Mat3::default(), Mat3::ZERO);
    }

    #[test]
    fn test_column_major_indexing() {
        let m = sample();
        assert_eq!(m[1][0], 1.0);
        assert_eq!(m[0][2], 1.0);
        assert_eq!(m.row(0), Vec3::new(2.0, 1.0, 0.0));
        assert_eq!(m.to_cols_array()[3], 1.0);
        assert_eq!(Mat3::from_cols_array(&m.to_cols_array()), m);
    }

    #[test]
    fn test_inverse() {
        let m = sample();
        let product = m * m.inverse();
        for c in 0..3 {
            for r in 0..3 {
                let expected = if c == r { 1.0 } else { 0.0 };
                assert!((product[c][r] - expected).abs() < 1e-5);
            }
        }
        assert_eq!(m.determinant(), 25.0);
    }

    #[test]
    fn test_singular_inverse_is_not_finite() {
        let m = Mat3::from_cols(Vec3::X, Vec3::X, Vec3::Z);
        let inv = m.inverse();
        assert!(inv.to_cols_array().iter().any(|v| !v.is_finite()));
    }

    #[test]
    fn test_rotation_is_counter_clockwise() {
        let r = Mat3::from_rotation(90.0);
        let v = r * Vec3::new(1.0, 0.0, 1.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);
        assert_eq!(v.z, 1.0);
    }

    #[test]
    fn test_translate_then_scale() {
        let m = Mat3::from_translation(Vec2::new(3.0, -1.0)) * Mat3::from_scale(Vec2::new(2.0, 4.0));
        let p = m * Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(p, Vec3::new(5.0, 3.0, 1.0));
    }

    #[test]
    fn test_transpose_twice_is_identity() {
        let m = sample();
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose()[0], m.row(0));
    }
}
