//! Quaternion for 3D rotations

use crate::macros::{impl_assign_ops, impl_component_access};
use crate::simd::F32x4;
use crate::{Mat4, Vec2, Vec3, Vec4};

/// Quaternion for representing 3D rotations
///
/// `(x, y, z)` is the vector part and `w` the scalar part. Only
/// [`Quat::normalize`] guarantees unit length; the rotation helpers assume it.
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Quat = Quat {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Create a new quaternion
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Vector part
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline(always)]
    fn packed(self) -> F32x4 {
        F32x4::load(self.as_array())
    }

    #[inline(always)]
    fn from_packed(p: F32x4) -> Self {
        Self::from(p.store())
    }

    /// Create from an axis and an angle in degrees
    ///
    /// The axis is normalized first.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = (angle * 0.5).to_radians();
        let axis = axis.normalize();
        let s = half.sin();

        Self {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: half.cos(),
        }
    }

    /// Create from Euler angles in degrees
    ///
    /// Same rotation as [`Mat4::from_euler`]: X first, then Y, then Z.
    pub fn from_euler(angles: Vec3) -> Self {
        let (sx, cx) = (angles.x * 0.5).to_radians().sin_cos();
        let (sy, cy) = (angles.y * 0.5).to_radians().sin_cos();
        let (sz, cz) = (angles.z * 0.5).to_radians().sin_cos();

        Self {
            x: sx * cy * cz - cx * sy * sz,
            y: cx * sy * cz + sx * cy * sz,
            z: cx * cy * sz - sx * sy * cz,
            w: cx * cy * cz + sx * sy * sz,
        }
    }

    /// Dot product of two quaternions
    #[inline]
    pub fn dot(self, other: Quat) -> f32 {
        self.packed().dot(other.packed())
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Normalize the quaternion; a zero quaternion is returned as is
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len != 0.0 {
            self / len
        } else {
            self
        }
    }

    /// Get the conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Conjugate divided by the squared length
    ///
    /// Exact for non-unit input too. A zero quaternion yields NaN components.
    #[inline]
    pub fn inverse(self) -> Self {
        self.conjugate() / self.dot(self)
    }

    /// Spherical linear interpolation
    ///
    /// Plain `sin`-weighted blend along the arc between the two inputs. When
    /// `dot(self, other) < 0` this takes the long way round, and identical
    /// inputs divide by `sin(0)`; use [`Quat::slerp_shortest`] for the
    /// corrected variant.
    pub fn slerp(self, other: Quat, t: f32) -> Self {
        let angle = self.dot(other).acos();

        let a = self * ((1.0 - t) * angle).sin();
        let b = other * (t * angle).sin();

        (a + b) * (1.0 / angle.sin())
    }

    /// Spherical linear interpolation along the shorter arc
    ///
    /// Negates `other` when the inputs lie in opposite hemispheres and falls
    /// back to a normalized lerp when they are nearly parallel.
    pub fn slerp_shortest(self, other: Quat, t: f32) -> Self {
        let mut cos_half_theta = self.dot(other);

        // If negative dot, negate one quaternion to take shorter path
        let mut other = other;
        if cos_half_theta < 0.0 {
            other = -other;
            cos_half_theta = -cos_half_theta;
        }

        if cos_half_theta > 0.9995 {
            return (self + (other - self) * t).normalize();
        }

        let half_theta = cos_half_theta.acos();
        let sin_half_theta = (1.0 - cos_half_theta * cos_half_theta).sqrt();

        let ratio_a = ((1.0 - t) * half_theta).sin() / sin_half_theta;
        let ratio_b = (t * half_theta).sin() / sin_half_theta;

        self * ratio_a + other * ratio_b
    }

    /// Rotate a vector by this quaternion (`q * v * q̄`)
    pub fn rotate_vec3(self, v: Vec3) -> Vec3 {
        let qv = Quat::from((v, 0.0));
        (self * qv * self.conjugate()).xyz()
    }

    /// Convert to a 4x4 rotation matrix
    ///
    /// The upper 3x3 block holds the rotation; the last row and column are
    /// left as identity.
    pub fn to_mat4(self) -> Mat4 {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;

        let xx = self.x * x2;
        let xy = self.x * y2;
        let xz = self.x * z2;
        let yy = self.y * y2;
        let yz = self.y * z2;
        let zz = self.z * z2;
        let wx = self.w * x2;
        let wy = self.w * y2;
        let wz = self.w * z2;

        Mat4::from_cols(
            Vec4::new(1.0 - (yy + zz), xy + wz, xz - wy, 0.0),
            Vec4::new(xy - wz, 1.0 - (xx + zz), yz + wx, 0.0),
            Vec4::new(xz + wy, yz - wx, 1.0 - (xx + yy), 0.0),
            Vec4::W,
        )
    }
}

impl core::ops::Add for Quat {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_packed(self.packed() + rhs.packed())
    }
}

impl core::ops::Sub for Quat {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_packed(self.packed() - rhs.packed())
    }
}

/// Hamilton product: `a * b` applies `b` first, then `a`
impl core::ops::Mul for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl core::ops::Mul<f32> for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, s: f32) -> Self {
        Self::from_packed(self.packed() * F32x4::splat(s))
    }
}

impl core::ops::Mul<Quat> for f32 {
    type Output = Quat;

    #[inline]
    fn mul(self, q: Quat) -> Quat {
        q * self
    }
}

impl core::ops::Div<f32> for Quat {
    type Output = Self;

    #[inline]
    fn div(self, s: f32) -> Self {
        Self::from_packed(self.packed() / F32x4::splat(s))
    }
}

impl core::ops::Div<Quat> for f32 {
    type Output = Quat;

    #[inline]
    fn div(self, q: Quat) -> Quat {
        Quat::from_packed(F32x4::splat(self) / q.packed())
    }
}

impl core::ops::Neg for Quat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl From<(Vec3, f32)> for Quat {
    #[inline]
    fn from((xyz, w): (Vec3, f32)) -> Self {
        Self::new(xyz.x, xyz.y, xyz.z, w)
    }
}

impl From<(f32, Vec3)> for Quat {
    #[inline]
    fn from((x, yzw): (f32, Vec3)) -> Self {
        Self::new(x, yzw.x, yzw.y, yzw.z)
    }
}

impl From<(Vec2, Vec2)> for Quat {
    #[inline]
    fn from((xy, zw): (Vec2, Vec2)) -> Self {
        Self::new(xy.x, xy.y, zw.x, zw.y)
    }
}

impl_component_access!(Quat, 4);
impl_assign_ops!(Quat:
    AddAssign::add_assign => + Quat,
    SubAssign::sub_assign => - Quat,
    MulAssign::mul_assign => * Quat,
    MulAssign::mul_assign => * f32,
    DivAssign::div_assign => / f32,
);
