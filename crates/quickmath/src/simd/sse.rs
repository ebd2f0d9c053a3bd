//! SSE backend (x86_64 baseline, no runtime detection needed)

// The intrinsics are `unsafe fn` on older toolchains and safe on newer ones
// where SSE is statically enabled.
#![allow(unused_unsafe)]

use core::arch::x86_64::*;
use core::ops::{Add, Div, Mul, Sub};

#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub(crate) struct F32x4(__m128);

impl F32x4 {
    #[inline(always)]
    pub fn load(lanes: &[f32; 4]) -> Self {
        // SAFETY: `lanes` is four readable f32; the load does not require alignment.
        Self(unsafe { _mm_loadu_ps(lanes.as_ptr()) })
    }

    #[inline(always)]
    pub fn store(self) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        // SAFETY: `out` is four writable f32; the store does not require alignment.
        unsafe { _mm_storeu_ps(out.as_mut_ptr(), self.0) };
        out
    }

    #[inline(always)]
    pub fn splat(v: f32) -> Self {
        Self(unsafe { _mm_set1_ps(v) })
    }

    #[inline(always)]
    pub fn splat_x(self) -> Self {
        Self(unsafe { _mm_shuffle_ps::<0x00>(self.0, self.0) })
    }

    #[inline(always)]
    pub fn splat_y(self) -> Self {
        Self(unsafe { _mm_shuffle_ps::<0x55>(self.0, self.0) })
    }

    #[inline(always)]
    pub fn splat_z(self) -> Self {
        Self(unsafe { _mm_shuffle_ps::<0xAA>(self.0, self.0) })
    }

    #[inline(always)]
    pub fn splat_w(self) -> Self {
        Self(unsafe { _mm_shuffle_ps::<0xFF>(self.0, self.0) })
    }

    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        Self(unsafe { _mm_min_ps(self.0, rhs.0) })
    }

    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        Self(unsafe { _mm_max_ps(self.0, rhs.0) })
    }

    /// Horizontal sum, reduced as `(x + y) + (z + w)`
    #[inline(always)]
    pub fn sum(self) -> f32 {
        unsafe {
            // (y, x, w, z)
            let swapped = _mm_shuffle_ps::<0xB1>(self.0, self.0);
            let pairs = _mm_add_ps(self.0, swapped);
            let high = _mm_movehl_ps(swapped, pairs);
            _mm_cvtss_f32(_mm_add_ss(pairs, high))
        }
    }

    #[inline(always)]
    pub fn dot(self, rhs: Self) -> f32 {
        (self * rhs).sum()
    }

    /// 4x4 transpose: interleave lane pairs, then recombine halves
    #[inline(always)]
    pub fn transpose4(cols: [Self; 4]) -> [Self; 4] {
        let [a, b, c, d] = cols.map(|c| c.0);
        unsafe {
            // (a0, b0, a1, b1), (c0, d0, c1, d1), (a2, b2, a3, b3), (c2, d2, c3, d3)
            let ab_lo = _mm_unpacklo_ps(a, b);
            let cd_lo = _mm_unpacklo_ps(c, d);
            let ab_hi = _mm_unpackhi_ps(a, b);
            let cd_hi = _mm_unpackhi_ps(c, d);
            [
                Self(_mm_movelh_ps(ab_lo, cd_lo)),
                Self(_mm_movehl_ps(cd_lo, ab_lo)),
                Self(_mm_movelh_ps(ab_hi, cd_hi)),
                Self(_mm_movehl_ps(cd_hi, ab_hi)),
            ]
        }
    }
}

macro_rules! impl_lane_op {
    ($trait:ident, $method:ident, $intrinsic:ident) => {
        impl $trait for F32x4 {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Self(unsafe { $intrinsic(self.0, rhs.0) })
            }
        }
    };
}

impl_lane_op!(Add, add, _mm_add_ps);
impl_lane_op!(Sub, sub, _mm_sub_ps);
impl_lane_op!(Mul, mul, _mm_mul_ps);
impl_lane_op!(Div, div, _mm_div_ps);
