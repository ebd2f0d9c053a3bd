//! Operator boilerplate shared by the value types

/// Field-wise `+ - * /` between two vectors, scalar `* /` on either side,
/// and unary `-`.
macro_rules! impl_fieldwise_ops {
    ($ty:ident { $($f:ident),+ }) => {
        impl core::ops::Add for $ty {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($f: self.$f + rhs.$f),+ }
            }
        }

        impl core::ops::Sub for $ty {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($f: self.$f - rhs.$f),+ }
            }
        }

        impl core::ops::Mul for $ty {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self { $($f: self.$f * rhs.$f),+ }
            }
        }

        impl core::ops::Div for $ty {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self { $($f: self.$f / rhs.$f),+ }
            }
        }

        impl core::ops::Mul<f32> for $ty {
            type Output = Self;

            #[inline]
            fn mul(self, s: f32) -> Self {
                Self { $($f: self.$f * s),+ }
            }
        }

        impl core::ops::Div<f32> for $ty {
            type Output = Self;

            #[inline]
            fn div(self, s: f32) -> Self {
                Self { $($f: self.$f / s),+ }
            }
        }

        impl core::ops::Mul<$ty> for f32 {
            type Output = $ty;

            #[inline]
            fn mul(self, v: $ty) -> $ty {
                v * self
            }
        }

        impl core::ops::Div<$ty> for f32 {
            type Output = $ty;

            #[inline]
            fn div(self, v: $ty) -> $ty {
                $ty { $($f: self / v.$f),+ }
            }
        }

        impl core::ops::Neg for $ty {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { $($f: -self.$f),+ }
            }
        }
    };
}

/// Compound assignment in terms of the matching binary operator
macro_rules! impl_assign_ops {
    ($ty:ty: $($trait:ident::$method:ident => $op:tt $rhs:ty),+ $(,)?) => {
        $(
            impl core::ops::$trait<$rhs> for $ty {
                #[inline]
                fn $method(&mut self, rhs: $rhs) {
                    *self = *self $op rhs;
                }
            }
        )+
    };
}

/// `[i]` component access and array conversions over the `as_array` view
macro_rules! impl_component_access {
    ($ty:ident, $n:literal) => {
        impl core::ops::Index<usize> for $ty {
            type Output = f32;

            #[inline]
            fn index(&self, i: usize) -> &f32 {
                &self.as_array()[i]
            }
        }

        impl core::ops::IndexMut<usize> for $ty {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut f32 {
                &mut self.as_array_mut()[i]
            }
        }

        impl From<[f32; $n]> for $ty {
            #[inline]
            fn from(a: [f32; $n]) -> Self {
                bytemuck::cast(a)
            }
        }

        impl From<$ty> for [f32; $n] {
            #[inline]
            fn from(v: $ty) -> Self {
                bytemuck::cast(v)
            }
        }

        impl $ty {
            /// View the components as an array (same bytes, no copy)
            #[inline]
            pub fn as_array(&self) -> &[f32; $n] {
                bytemuck::cast_ref(self)
            }

            /// Mutable array view over the same bytes
            #[inline]
            pub fn as_array_mut(&mut self) -> &mut [f32; $n] {
                bytemuck::cast_mut(self)
            }

            /// Copy the components out in declaration order
            #[inline]
            pub fn to_array(self) -> [f32; $n] {
                self.into()
            }
        }
    };
}

pub(crate) use impl_assign_ops;
pub(crate) use impl_component_access;
pub(crate) use impl_fieldwise_ops;
