//! Text adapters
//!
//! Output writes the components comma-and-space separated in declaration
//! order (`"x, y, z"`); matrices write one such line per column. Input reads
//! the same number of float tokens back, accepting any mix of whitespace and
//! commas between them. Float formatting uses the shortest representation
//! that parses back to the same bits, so write-then-read is lossless.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;
use crate::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};

fn write_components(f: &mut fmt::Formatter<'_>, components: &[f32]) -> fmt::Result {
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        // Forward so width/precision flags apply per component
        fmt::Display::fmt(c, f)?;
    }
    Ok(())
}

fn write_columns<const N: usize>(f: &mut fmt::Formatter<'_>, cols: &[[f32; N]]) -> fmt::Result {
    for (i, col) in cols.iter().enumerate() {
        if i > 0 {
            f.write_str("\n")?;
        }
        write_components(f, col)?;
    }
    Ok(())
}

/// Read exactly `N` whitespace- or comma-delimited floats
fn parse_components<const N: usize>(s: &str) -> Result<[f32; N], ParseError> {
    let mut out = [0.0f32; N];
    let mut found = 0;

    let tokens = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    for token in tokens {
        if found < N {
            out[found] = token.parse().map_err(|source| {
                tracing::debug!(token, "rejecting non-numeric component");
                ParseError::InvalidComponent {
                    token: token.to_owned(),
                    source,
                }
            })?;
        }
        found += 1;
    }

    if found != N {
        tracing::debug!(expected = N, found, "rejecting input with wrong component count");
        return Err(ParseError::ComponentCount { expected: N, found });
    }

    tracing::trace!(components = N, "parsed value");
    Ok(out)
}

macro_rules! impl_text_io {
    ($($ty:ident => $n:literal),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write_components(f, self.as_array())
                }
            }

            impl FromStr for $ty {
                type Err = ParseError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    parse_components::<$n>(s).map(Self::from)
                }
            }
        )+
    };
}

impl_text_io!(Vec2 => 2, Vec3 => 3, Vec4 => 4, Quat => 4);

impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_columns(f, &self.cols.map(Vec3::to_array))
    }
}

impl FromStr for Mat3 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components::<9>(s).map(|arr| Mat3::from_cols_array(&arr))
    }
}

impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_columns(f, &self.to_cols_array_2d())
    }
}

impl FromStr for Mat4 {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_components::<16>(s).map(|arr| Mat4::from_cols_array(&arr))
    }
}
