//! Quickmath
//!
//! Allocation-free vector, matrix, and quaternion math for real-time
//! graphics and games:
//!
//! - **Vectors**: [`Vec2`], [`Vec3`], [`Vec4`] with element-wise operators,
//!   dot/cross products, lengths, and component-wise min/max
//! - **Matrices**: column-major [`Mat3`] and [`Mat4`] with products, inverses,
//!   affine transforms, projections, and view matrices
//! - **Quaternions**: [`Quat`] with the Hamilton product, slerp, and
//!   axis-angle/Euler/matrix conversions
//! - **Flat API**: every operation as a free function in [`qm`]
//!
//! All angles taken by the API are in degrees. Vectors are columns, so
//! `a * b` on matrices applies `b` first.
//!
//! # Example
//!
//! ```rust
//! use quickmath::{Mat4, Quat, Vec3, Vec4};
//!
//! let spin = Quat::from_axis_angle(Vec3::Y, 90.0);
//! let model = Mat4::from_translation(Vec3::new(0.0, 0.0, -5.0)) * spin.to_mat4();
//! let view = Mat4::look_at(Vec3::new(0.0, 2.0, 5.0), Vec3::ZERO, Vec3::Y);
//! let proj = Mat4::perspective(60.0, 16.0 / 9.0, 0.1, 100.0);
//!
//! let clip = proj * view * model * Vec4::new(1.0, 0.0, 0.0, 1.0);
//! assert!(clip.w > 0.0);
//! ```
//!
//! # Cargo features
//!
//! - `simd` (default): [`Vec4`], [`Quat`], and [`Mat4`] bulk arithmetic runs on
//!   SSE registers on `x86_64`; other targets use the scalar backend
//! - `text-io` (default): `Display`/`FromStr` for every type
//! - `serde`: `Serialize`/`Deserialize` for every type
//!
//! Every operation is total: degenerate input (singular matrices, zero
//! quaternions) produces `inf`/`NaN` components rather than errors.

mod macros;

mod angle;
mod mat3;
mod mat4;
mod quat;
mod simd;
mod vec2;
mod vec3;
mod vec4;

pub mod qm;
pub mod traits;

#[cfg(feature = "text-io")]
mod error;
#[cfg(feature = "text-io")]
mod io;

#[cfg(test)]
mod properties;

pub use angle::{deg_to_rad, rad_to_deg};
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use simd::BACKEND;
pub use traits::{AffineVector, ElementWise, InnerSpace, Invert, SquareMatrix};
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;

#[cfg(feature = "text-io")]
pub use error::ParseError;
