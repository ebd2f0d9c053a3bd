//! 3D vector

use crate::macros::{impl_assign_ops, impl_component_access, impl_fieldwise_ops};
use crate::Vec2;

/// 3D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Vec3 = Vec3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };
    pub const X: Vec3 = Vec3 {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    pub const Y: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    pub const Z: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    pub const fn xy(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub const fn width(&self) -> f32 {
        self.x
    }

    pub const fn height(&self) -> f32 {
        self.y
    }

    pub const fn depth(&self) -> f32 {
        self.z
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

    #[inline]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product
    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
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
    pub fn distance(self, other: Vec3) -> f32 {
        (self - other).length()
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Vec3) -> Self {
        Self::new(
            if self.x < other.x { self.x } else { other.x },
            if self.y < other.y { self.y } else { other.y },
            if self.z < other.z { self.z } else { other.z },
        )
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Vec3) -> Self {
        Self::new(
            if self.x > other.x { self.x } else { other.x },
            if self.y > other.y { self.y } else { other.y },
            if self.z > other.z { self.z } else { other.z },
        )
    }

    /// Linear interpolation
    #[inline]
    pub fn lerp(self, other: Vec3, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl From<(Vec2, f32)> for Vec3 {
    #[inline]
    fn from((xy, z): (Vec2, f32)) -> Self {
        Self::new(xy.x, xy.y, z)
    }
}

impl From<(f32, Vec2)> for Vec3 {
    #[inline]
    fn from((x, yz): (f32, Vec2)) -> Self {
        Self::new(x, yz.x, yz.y)
    }
}

impl_fieldwise_ops!(Vec3 { x, y, z });
impl_component_access!(Vec3, 3);
impl_assign_ops!(Vec3:
    AddAssign::add_assign => + Vec3,
    SubAssign::sub_assign => - Vec3,
    MulAssign::mul_assign => * Vec3,
    DivAssign::div_assign => / Vec3,
    MulAssign::mul_assign => * f32,
    DivAssign::div_assign => / f32,
);
