//! Portable four-lane fallback

use core::ops::{Add, Div, Mul, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct F32x4([f32; 4]);

impl F32x4 {
    #[inline(always)]
    pub fn load(lanes: &[f32; 4]) -> Self {
        Self(*lanes)
    }

    #[inline(always)]
    pub fn store(self) -> [f32; 4] {
        self.0
    }

    #[inline(always)]
    pub fn splat(v: f32) -> Self {
        Self([v; 4])
    }

    #[inline(always)]
    pub fn splat_x(self) -> Self {
        Self::splat(self.0[0])
    }

    #[inline(always)]
    pub fn splat_y(self) -> Self {
        Self::splat(self.0[1])
    }

    #[inline(always)]
    pub fn splat_z(self) -> Self {
        Self::splat(self.0[2])
    }

    #[inline(always)]
    pub fn splat_w(self) -> Self {
        Self::splat(self.0[3])
    }

    /// Lane-wise `a < b ? a : b` (NaN in either lane yields `b`, like MINPS)
    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| {
            if self.0[i] < rhs.0[i] {
                self.0[i]
            } else {
                rhs.0[i]
            }
        }))
    }

    /// Lane-wise `a > b ? a : b` (NaN in either lane yields `b`, like MAXPS)
    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| {
            if self.0[i] > rhs.0[i] {
                self.0[i]
            } else {
                rhs.0[i]
            }
        }))
    }

    /// Horizontal sum, reduced as `(x + y) + (z + w)`
    #[inline(always)]
    pub fn sum(self) -> f32 {
        let [x, y, z, w] = self.0;
        (x + y) + (z + w)
    }

    #[inline(always)]
    pub fn dot(self, rhs: Self) -> f32 {
        (self * rhs).sum()
    }

    #[inline(always)]
    pub fn transpose4(cols: [Self; 4]) -> [Self; 4] {
        let m = cols.map(|c| c.0);
        core::array::from_fn(|i| Self([m[0][i], m[1][i], m[2][i], m[3][i]]))
    }
}

macro_rules! impl_lane_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for F32x4 {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Self([
                    self.0[0] $op rhs.0[0],
                    self.0[1] $op rhs.0[1],
                    self.0[2] $op rhs.0[2],
                    self.0[3] $op rhs.0[3],
                ])
            }
        }
    };
}

impl_lane_op!(Add, add, +);
impl_lane_op!(Sub, sub, -);
impl_lane_op!(Mul, mul, *);
impl_lane_op!(Div, div, /);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_order() {
        let v = F32x4::load(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.sum(), 10.0);
        assert_eq!(v.dot(v), 30.0);
    }

    #[test]
    fn test_transpose() {
        let cols = [
            F32x4::load(&[1.0, 2.0, 3.0, 4.0]),
            F32x4::load(&[5.0, 6.0, 7.0, 8.0]),
            F32x4::load(&[9.0, 10.0, 11.0, 12.0]),
            F32x4::load(&[13.0, 14.0, 15.0, 16.0]),
        ];
        let t = F32x4::transpose4(cols);
        assert_eq!(t[0].store(), [1.0, 5.0, 9.0, 13.0]);
        assert_eq!(t[3].store(), [4.0, 8.0, 12.0, 16.0]);
    }
}
