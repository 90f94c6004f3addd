//! The sign tag shared by integers and rationals.

/// Sign of a value; canonical zero always carries [`Sign::Positive`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Zero or greater.
    #[default]
    Positive,
    /// Strictly below zero.
    Negative,
}

impl Sign {
    /// The opposite sign.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }

    /// Sign of a product: negative exactly when the operands disagree.
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        if self == other {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// Boolean AND of the sign bits, treating negative as the set bit.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        if self == Self::Negative && other == Self::Negative {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// Boolean OR of the sign bits, treating negative as the set bit.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        if self == Self::Negative || other == Self::Negative {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// True for [`Sign::Negative`].
    #[must_use]
    pub fn is_negative(self) -> bool {
        self == Self::Negative
    }
}

/// Splits an optional leading `'-'` off a numeric token.
///
/// A lone `"-"` leaves nothing to negate and reads as positive.
pub(crate) fn split_sign(text: &str) -> (Sign, &str) {
    match text.strip_prefix('-') {
        Some(rest) if !rest.is_empty() => (Sign::Negative, rest),
        Some(rest) => (Sign::Positive, rest),
        None => (Sign::Positive, text),
    }
}
