//! Packed 4-lane `f32` backend
//!
//! [`F32x4`] is the only type the value types talk to when they want bulk
//! arithmetic. Which implementation sits behind it is decided at compile time:
//!
//! - `simd` feature on `x86_64`: one SSE register (`__m128`)
//! - anything else: four plain `f32` lanes
//!
//! Both backends expose the same inherent API and the same `core::ops`
//! impls, and reduce in the same order, so swapping one for the other never
//! changes a caller's code.

#[cfg_attr(all(feature = "simd", target_arch = "x86_64"), allow(dead_code))]
pub(crate) mod scalar;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub(crate) mod sse;

#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub(crate) use sse::F32x4;

#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
pub(crate) use scalar::F32x4;

/// Name of the packed backend compiled into this build
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
pub const BACKEND: &str = "sse";

/// Name of the packed backend compiled into this build
#[cfg(not(all(feature = "simd", target_arch = "x86_64")))]
pub const BACKEND: &str = "scalar";

/// Linear combination of four packed columns weighted by the lanes of `v`
///
/// This is the column-major `matrix * vector` kernel shared by
/// `Mat4 * Vec4` and every column of `Mat4 * Mat4`.
#[inline(always)]
pub(crate) fn mul_column(cols: &[F32x4; 4], v: F32x4) -> F32x4 {
    let mut result = cols[0] * v.splat_x();
    result = result + cols[1] * v.splat_y();
    result = result + cols[2] * v.splat_z();
    result + cols[3] * v.splat_w()
}
