//! Degree/radian conversion
//!
//! Every angle taken by the public API is in degrees; these are the
//! conversions it uses internally.

#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg.to_radians()
}

#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad.to_degrees()
}
