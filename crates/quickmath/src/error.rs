//! Text adapter error types

use std::num::ParseFloatError;
use thiserror::Error;

/// Errors that can occur when reading a value type from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input did not hold exactly one token per component
    #[error("expected {expected} components, found {found}")]
    ComponentCount { expected: usize, found: usize },

    /// A token that is not a float
    #[error("invalid component `{token}`: {source}")]
    InvalidComponent {
        token: String,
        #[source]
        source: ParseFloatError,
    },
}
