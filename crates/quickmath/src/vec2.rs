//! 2D vector

use crate::macros::{impl_assign_ops, impl_component_access, impl_fieldwise_ops};

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };
    pub const X: Vec2 = Vec2 { x: 1.0, y: 0.0 };
    pub const Y: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    /// `x` read as a width
    #[inline]
    pub const fn width(&self) -> f32 {
        self.x
    }

    /// `y` read as a height
    #[inline]
    pub const fn height(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
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
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Vec2) -> Self {
        Self::new(
            if self.x < other.x { self.x } else { other.x },
            if self.y < other.y { self.y } else { other.y },
        )
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Vec2) -> Self {
        Self::new(
            if self.x > other.x { self.x } else { other.x },
            if self.y > other.y { self.y } else { other.y },
        )
    }

    /// Linear interpolation
    #[inline]
    pub fn lerp(self, other: Vec2, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl_fieldwise_ops!(Vec2 { x, y });
impl_component_access!(Vec2, 2);
impl_assign_ops!(Vec2:
    AddAssign::add_assign => + Vec2,
    SubAssign::sub_assign => - Vec2,
    MulAssign::mul_assign => * Vec2,
    DivAssign::div_assign => / Vec2,
    MulAssign::mul_assign => * f32,
    DivAssign::div_assign => / f32,
);
