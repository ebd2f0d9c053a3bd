//! Traits that let one free function in [`crate::qm`] serve several types

use crate::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

/// Types with a dot product: vectors and quaternions
pub trait InnerSpace: Copy {
    fn dot(self, other: Self) -> f32;

    fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit-length copy; zero input comes back unchanged
    fn normalize(self) -> Self;
}

/// Component-wise comparisons and distances between points
pub trait ElementWise: InnerSpace {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn distance(self, other: Self) -> f32;
}

/// Square matrices
pub trait SquareMatrix: Copy {
    const IDENTITY: Self;

    fn transpose(self) -> Self;
}

/// Types with a multiplicative inverse
pub trait Invert: Copy {
    fn inverse(self) -> Self;
}

/// Vectors that build the affine matrix one dimension up
pub trait AffineVector: Copy {
    type Matrix;

    fn translation(self) -> Self::Matrix;
    fn scaling(self) -> Self::Matrix;
}

macro_rules! impl_vector_traits {
    ($($ty:ident),+) => {
        $(
            impl InnerSpace for $ty {
                #[inline]
                fn dot(self, other: Self) -> f32 {
                    $ty::dot(self, other)
                }

                #[inline]
                fn length(self) -> f32 {
                    $ty::length(self)
                }

                #[inline]
                fn normalize(self) -> Self {
                    $ty::normalize(self)
                }
            }
        )+
    };
}

impl_vector_traits!(Vec2, Vec3, Vec4, Quat);

macro_rules! impl_element_wise {
    ($($ty:ident),+) => {
        $(
            impl ElementWise for $ty {
                #[inline]
                fn min(self, other: Self) -> Self {
                    $ty::min(self, other)
                }

                #[inline]
                fn max(self, other: Self) -> Self {
                    $ty::max(self, other)
                }

                #[inline]
                fn distance(self, other: Self) -> f32 {
                    $ty::distance(self, other)
                }
            }
        )+
    };
}

impl_element_wise!(Vec2, Vec3, Vec4);

impl SquareMatrix for Mat3 {
    const IDENTITY: Self = Mat3::IDENTITY;

    #[inline]
    fn transpose(self) -> Self {
        Mat3::transpose(&self)
    }
}

impl SquareMatrix for Mat4 {
    const IDENTITY: Self = Mat4::IDENTITY;

    #[inline]
    fn transpose(self) -> Self {
        Mat4::transpose(&self)
    }
}

impl Invert for Mat3 {
    #[inline]
    fn inverse(self) -> Self {
        Mat3::inverse(&self)
    }
}

impl Invert for Mat4 {
    #[inline]
    fn inverse(self) -> Self {
        Mat4::inverse(&self)
    }
}

impl Invert for Quat {
    #[inline]
    fn inverse(self) -> Self {
        Quat::inverse(self)
    }
}

impl AffineVector for Vec2 {
    type Matrix = Mat3;

    #[inline]
    fn translation(self) -> Mat3 {
        Mat3::from_translation(self)
    }

    #[inline]
    fn scaling(self) -> Mat3 {
        Mat3::from_scale(self)
    }
}

impl AffineVector for Vec3 {
    type Matrix = Mat4;

    #[inline]
    fn translation(self) -> Mat4 {
        Mat4::from_translation(self)
    }

    #[inline]
    fn scaling(self) -> Mat4 {
        Mat4::from_scale(self)
    }
}
