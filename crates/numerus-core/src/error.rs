//! Error surface of the numeric core.

use thiserror::Error;

/// Errors reported by fallible numeric operations.
///
/// Both variants carry a short description. Call sites that know more
/// than the default message attach their own.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum NumericError {
    /// A division or modulus had a zero divisor, a rational was given a
    /// zero denominator, or the inverse of zero was requested.
    #[error("{0}")]
    DivisionByZero(&'static str),

    /// A string radix outside the supported range `[2, 64]` was used.
    #[error("{0}")]
    InvalidBase(&'static str),
}

impl NumericError {
    /// A [`NumericError::DivisionByZero`] with the default message.
    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::DivisionByZero("attempted to divide by zero")
    }

    /// A [`NumericError::InvalidBase`] with the default message.
    #[must_use]
    pub fn invalid_base() -> Self {
        Self::InvalidBase("the radix must lie between 2 and 64")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_render_through_display() {
        assert_eq!(
            NumericError::division_by_zero().to_string(),
            "attempted to divide by zero"
        );
        assert_eq!(
            NumericError::DivisionByZero("denominator cannot be zero").to_string(),
            "denominator cannot be zero"
        );
        assert_eq!(
            NumericError::invalid_base().to_string(),
            "the radix must lie between 2 and 64"
        );
    }
}
