//! Flat function namespace
//!
//! One free function per operation, overloaded by argument type the same
//! way the operators are. The module path is the prefix: call sites read
//! `qm::dot(a, b)`, and a crate that prefers another prefix re-exports the
//! module under its own name (`use quickmath::qm as gfx;`).
//!
//! ```rust
//! use quickmath::{qm, Vec3, Vec4};
//!
//! let model = qm::translate(Vec3::new(3.0, 4.0, 5.0)) * qm::rotate_axis(Vec3::Y, 90.0);
//! let p = model * Vec4::new(0.0, 0.0, 0.0, 1.0);
//! assert_eq!(p, Vec4::new(3.0, 4.0, 5.0, 1.0));
//! assert_eq!(qm::cross(Vec3::X, Vec3::Y), Vec3::Z);
//! ```

use crate::traits::{AffineVector, ElementWise, InnerSpace, Invert, SquareMatrix};
use crate::{Mat3, Mat4, Quat, Vec3};

pub use crate::angle::{deg_to_rad, rad_to_deg};

#[inline]
pub fn dot<V: InnerSpace>(a: V, b: V) -> f32 {
    a.dot(b)
}

#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

#[inline]
pub fn length<V: InnerSpace>(v: V) -> f32 {
    v.length()
}

#[inline]
pub fn normalize<V: InnerSpace>(v: V) -> V {
    v.normalize()
}

#[inline]
pub fn distance<V: ElementWise>(a: V, b: V) -> f32 {
    a.distance(b)
}

#[inline]
pub fn min<V: ElementWise>(a: V, b: V) -> V {
    ElementWise::min(a, b)
}

#[inline]
pub fn max<V: ElementWise>(a: V, b: V) -> V {
    ElementWise::max(a, b)
}

#[inline]
pub fn mat3_identity() -> Mat3 {
    Mat3::IDENTITY
}

#[inline]
pub fn mat4_identity() -> Mat4 {
    Mat4::IDENTITY
}

#[inline]
pub fn transpose<M: SquareMatrix>(m: M) -> M {
    m.transpose()
}

/// Inverse of a matrix or quaternion
#[inline]
pub fn inverse<T: Invert>(x: T) -> T {
    x.inverse()
}

/// `Vec2` gives a 2D translation [`Mat3`], `Vec3` a 3D translation [`Mat4`]
#[inline]
pub fn translate<V: AffineVector>(t: V) -> V::Matrix {
    t.translation()
}

/// `Vec2` gives a 2D scale [`Mat3`], `Vec3` a 3D scale [`Mat4`]
#[inline]
pub fn scale<V: AffineVector>(s: V) -> V::Matrix {
    s.scaling()
}

/// 2D rotation, degrees
#[inline]
pub fn rotate(angle: f32) -> Mat3 {
    Mat3::from_rotation(angle)
}

/// 3D rotation about an axis, degrees
#[inline]
pub fn rotate_axis(axis: Vec3, angle: f32) -> Mat4 {
    Mat4::from_axis_angle(axis, angle)
}

/// 3D rotation from Euler angles, degrees
#[inline]
pub fn rotate_euler(euler: Vec3) -> Mat4 {
    Mat4::from_euler(euler)
}

#[inline]
pub fn top_left(m: Mat4) -> Mat3 {
    m.top_left()
}

#[inline]
pub fn perspective(fov: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective(fov, aspect, near, far)
}

#[inline]
pub fn orthographic(left: f32, right: f32, bot: f32, top: f32, near: f32, far: f32) -> Mat4 {
    Mat4::orthographic(left, right, bot, top, near, far)
}

#[inline]
pub fn look(pos: Vec3, dir: Vec3, up: Vec3) -> Mat4 {
    Mat4::look(pos, dir, up)
}

#[inline]
pub fn lookat(pos: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at(pos, target, up)
}

#[inline]
pub fn quaternion_identity() -> Quat {
    Quat::IDENTITY
}

#[inline]
pub fn conjugate(q: Quat) -> Quat {
    q.conjugate()
}

#[inline]
pub fn slerp(q1: Quat, q2: Quat, a: f32) -> Quat {
    q1.slerp(q2, a)
}

#[inline]
pub fn slerp_shortest(q1: Quat, q2: Quat, a: f32) -> Quat {
    q1.slerp_shortest(q2, a)
}

#[inline]
pub fn quaternion_from_axis_angle(axis: Vec3, angle: f32) -> Quat {
    Quat::from_axis_angle(axis, angle)
}

#[inline]
pub fn quaternion_from_euler(angles: Vec3) -> Quat {
    Quat::from_euler(angles)
}

#[inline]
pub fn quaternion_to_mat4(q: Quat) -> Mat4 {
    q.to_mat4()
}
