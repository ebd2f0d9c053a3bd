//! 4D vector
//!
//! Same memory as `[f32; 4]`, so every bulk operation runs as one packed
//! load, one packed op, and one packed store through [`crate::simd`].

use crate::macros::{impl_assign_ops, impl_component_access};
use crate::simd::F32x4;
use crate::{Vec2, Vec3};

/// 4D vector (also a homogeneous point or direction)
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Vec4 = Vec4::splat(0.0);
    pub const ONE: Vec4 = Vec4::splat(1.0);
    pub const X: Vec4 = Vec4::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Vec4 = Vec4::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Vec4 = Vec4::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub const fn r(&self) -> f32 {
        self.x
    }

    pub const fn g(&self) -> f32 {
        self.y
    }

    pub const fn b(&self) -> f32 {
        self.z
    }

    pub const fn a(&self) -> f32 {
        self.w
    }

    #[inline(always)]
    pub(crate) fn packed(self) -> F32x4 {
        F32x4::load(self.as_array())
    }

    #[inline(always)]
    pub(crate) fn from_packed(p: F32x4) -> Self {
        Self::from(p.store())
    }

    #[inline]
    pub fn dot(self, other: Vec4) -> f32 {
        self.packed().dot(other.packed())
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction; the zero vector is returned as is
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len != 0.0 {
            self / len
        } else {
            self
        }
    }

    #[inline]
    pub fn distance(self, other: Vec4) -> f32 {
        (self - other).length()
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Vec4) -> Self {
        Self::from_packed(self.packed().min(other.packed()))
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Vec4) -> Self {
        Self::from_packed(self.packed().max(other.packed()))
    }

    /// Linear interpolation
    #[inline]
    pub fn lerp(self, other: Vec4, t: f32) -> Self {
        self + (other - self) * t
    }
}

macro_rules! impl_packed_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl core::ops::$trait for Vec4 {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self::from_packed(self.packed() $op rhs.packed())
            }
        }

        impl core::ops::$trait<f32> for Vec4 {
            type Output = Self;

            #[inline]
            fn $method(self, s: f32) -> Self {
                Self::from_packed(self.packed() $op F32x4::splat(s))
            }
        }

        impl core::ops::$trait<Vec4> for f32 {
            type Output = Vec4;

            #[inline]
            fn $method(self, v: Vec4) -> Vec4 {
                Vec4::from_packed(F32x4::splat(self) $op v.packed())
            }
        }
    };
}

impl_packed_op!(Add, add, +);
impl_packed_op!(Sub, sub, -);
impl_packed_op!(Mul, mul, *);
impl_packed_op!(Div, div, /);

impl core::ops::Neg for Vec4 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl From<(Vec3, f32)> for Vec4 {
    #[inline]
    fn from((xyz, w): (Vec3, f32)) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }
}

impl From<(f32, Vec3)> for Vec4 {
    #[inline]
    fn from((x, yzw): (f32, Vec3)) -> Self {
        Self::new(x, yzw.x, yzw.y, yzw.z)
    }
}

impl From<(Vec2, Vec2)> for Vec4 {
    #[inline]
    fn from((xy, zw): (Vec2, Vec2)) -> Self {
        Self::new(xy.x, xy.y, zw.x, zw.y)
    }
}

impl_component_access!(Vec4, 4);
impl_assign_ops!(Vec4:
    AddAssign::add_assign => + Vec4,
    SubAssign::sub_assign => - Vec4,
    MulAssign::mul_assign => * Vec4,
    DivAssign::div_assign => / Vec4,
    MulAssign::mul_assign => * f32,
    DivAssign::div_assign => / f32,
);
