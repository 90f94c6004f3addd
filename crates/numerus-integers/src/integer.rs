//! Signed arbitrary-precision integers.
//!
//! An [`Integer`] couples an unsigned magnitude with a [`Sign`]. Every
//! arithmetic result re-derives its sign from a case split on the operand
//! signs, and a zero magnitude is always stored with a positive sign.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, BitAnd, BitOr, BitXor, Mul, Neg, Not, Shl, Shr, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};
use numerus_core::{calc, Natural, NumericError};

use crate::sign::{split_sign, Sign};

/// An arbitrary-precision signed integer.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Integer {
    pub(crate) magnitude: Natural,
    pub(crate) sign: Sign,
}

impl Integer {
    /// Couples a magnitude with a sign, normalizing zero to positive.
    #[must_use]
    pub fn from_parts(magnitude: Natural, sign: Sign) -> Self {
        let sign = if magnitude.is_zero() {
            Sign::Positive
        } else {
            sign
        };
        Self { magnitude, sign }
    }

    /// Creates an integer from an `i64`.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from(value)
    }

    /// The magnitude, with the sign discarded.
    #[must_use]
    pub fn magnitude(&self) -> &Natural {
        &self.magnitude
    }

    /// The sign tag; positive for zero.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            magnitude: self.magnitude.clone(),
            sign: Sign::Positive,
        }
    }

    /// Returns -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.magnitude.is_zero() {
            0
        } else if self.sign.is_negative() {
            -1
        } else {
            1
        }
    }

    /// Returns true if this integer is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Returns true if the magnitude is odd.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        self.magnitude.is_odd()
    }

    /// Returns true if the magnitude is even.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.magnitude.is_even()
    }

    /// Parses an optional leading `'-'` followed by digits in `radix`.
    ///
    /// `"-0"` parses to canonical positive zero.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::InvalidBase`] when `radix` lies outside
    /// `[2, 64]`.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, NumericError> {
        let (sign, digits) = split_sign(text);
        let magnitude = Natural::from_str_radix(digits, radix)?;
        Ok(Self::from_parts(magnitude, sign))
    }

    /// Formats the value in `radix`, with a leading `'-'` when negative.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::InvalidBase`] when `radix` lies outside
    /// `[2, 64]`.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, NumericError> {
        let digits = self.magnitude.to_str_radix(radix)?;
        Ok(if self.sign.is_negative() {
            format!("-{digits}")
        } else {
            digits
        })
    }

    /// Converts to an `i64` if the value fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.magnitude.to_u64()?;
        if self.sign.is_negative() {
            if magnitude > 1u64 << 63 {
                return None;
            }
            Some(magnitude.wrapping_neg() as i64)
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    /// Quotient and remainder of truncated division.
    ///
    /// The quotient is negative when exactly one operand is; a nonzero
    /// remainder takes the dividend's sign.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivisionByZero`] when `rhs` is zero.
    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), NumericError> {
        let (quotient, remainder) = self.magnitude.div_rem(&rhs.magnitude)?;
        Ok((
            Self::from_parts(quotient, self.sign.xor(rhs.sign)),
            Self::from_parts(remainder, self.sign),
        ))
    }

    /// Raises to `exponent` on the magnitude; the result is negative only
    /// for a negative base and an odd exponent.
    #[must_use]
    pub fn pow(&self, exponent: &Natural) -> Self {
        let sign = if self.sign.is_negative() && exponent.is_odd() {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::from_parts(calc::pow(self.magnitude.clone(), exponent.clone()), sign)
    }

    /// Adds one in place, flipping the sign when the magnitude crosses
    /// zero from below.
    pub fn increment(&mut self) {
        if self.sign.is_negative() {
            if self.magnitude.is_one() {
                self.sign = Sign::Positive;
            }
            self.magnitude.decrement();
        } else {
            self.magnitude.increment();
        }
    }

    /// Subtracts one in place, dropping into the negatives through zero.
    pub fn decrement(&mut self) {
        if self.sign.is_negative() {
            self.magnitude.increment();
        } else if self.magnitude.is_zero() {
            self.sign = Sign::Negative;
            self.magnitude.increment();
        } else {
            self.magnitude.decrement();
        }
    }
}

/// Same-sign operands add magnitudes and keep the sign; opposite signs
/// subtract the smaller magnitude from the larger and take the sign of
/// the larger-magnitude operand.
fn signed_sum(lhs: &Integer, rhs: &Integer) -> Integer {
    if lhs.sign == rhs.sign {
        return Integer::from_parts(&lhs.magnitude + &rhs.magnitude, lhs.sign);
    }

    match lhs.magnitude.cmp(&rhs.magnitude) {
        Ordering::Equal => Integer::zero(),
        Ordering::Greater => Integer::from_parts(&lhs.magnitude - &rhs.magnitude, lhs.sign),
        Ordering::Less => Integer::from_parts(&rhs.magnitude - &lhs.magnitude, rhs.sign),
    }
}

fn signed_difference(lhs: &Integer, rhs: &Integer) -> Integer {
    if lhs.sign != rhs.sign {
        return Integer::from_parts(&lhs.magnitude + &rhs.magnitude, lhs.sign);
    }

    match lhs.magnitude.cmp(&rhs.magnitude) {
        Ordering::Equal => Integer::zero(),
        Ordering::Greater => Integer::from_parts(&lhs.magnitude - &rhs.magnitude, lhs.sign),
        Ordering::Less => {
            Integer::from_parts(&rhs.magnitude - &lhs.magnitude, rhs.sign.flipped())
        }
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self {
            magnitude: Natural::one(),
            sign: Sign::Positive,
        }
    }

    fn is_one(&self) -> bool {
        !self.sign.is_negative() && self.magnitude.is_one()
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.magnitude.cmp(&other.magnitude),
            (Sign::Negative, Sign::Negative) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({self})")
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.magnitude)
    }
}

impl fmt::UpperHex for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{:X}", self.magnitude)
    }
}

impl FromStr for Integer {
    type Err = NumericError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (sign, digits) = split_sign(text);
        Ok(Self::from_parts(digits.parse::<Natural>()?, sign))
    }
}

// Arithmetic operations

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: &Integer) -> Integer {
        signed_sum(self, rhs)
    }
}

impl Add<&Integer> for Integer {
    type Output = Integer;

    fn add(self, rhs: &Integer) -> Integer {
        signed_sum(&self, rhs)
    }
}

impl Add for Integer {
    type Output = Integer;

    fn add(self, rhs: Integer) -> Integer {
        signed_sum(&self, &rhs)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: &Integer) -> Integer {
        signed_difference(self, rhs)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Integer;

    fn sub(self, rhs: &Integer) -> Integer {
        signed_difference(&self, rhs)
    }
}

impl Sub for Integer {
    type Output = Integer;

    fn sub(self, rhs: Integer) -> Integer {
        signed_difference(&self, &rhs)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: &Integer) -> Integer {
        Integer::from_parts(&self.magnitude * &rhs.magnitude, self.sign.xor(rhs.sign))
    }
}

impl Mul<&Integer> for Integer {
    type Output = Integer;

    fn mul(self, rhs: &Integer) -> Integer {
        &self * rhs
    }
}

impl Mul for Integer {
    type Output = Integer;

    fn mul(self, rhs: Integer) -> Integer {
        &self * &rhs
    }
}

impl Neg for Integer {
    type Output = Integer;

    fn neg(mut self) -> Integer {
        if !self.magnitude.is_zero() {
            self.sign = self.sign.flipped();
        }
        self
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Integer {
        -self.clone()
    }
}

// Bitwise operations. The signs combine through the Boolean operator
// matching the bitwise one, with negative as the set bit.

impl BitAnd for &Integer {
    type Output = Integer;

    fn bitand(self, rhs: &Integer) -> Integer {
        Integer::from_parts(&self.magnitude & &rhs.magnitude, self.sign.and(rhs.sign))
    }
}

impl BitAnd for Integer {
    type Output = Integer;

    fn bitand(self, rhs: Integer) -> Integer {
        &self & &rhs
    }
}

impl BitOr for &Integer {
    type Output = Integer;

    fn bitor(self, rhs: &Integer) -> Integer {
        Integer::from_parts(&self.magnitude | &rhs.magnitude, self.sign.or(rhs.sign))
    }
}

impl BitOr for Integer {
    type Output = Integer;

    fn bitor(self, rhs: Integer) -> Integer {
        &self | &rhs
    }
}

impl BitXor for &Integer {
    type Output = Integer;

    fn bitxor(self, rhs: &Integer) -> Integer {
        Integer::from_parts(&self.magnitude ^ &rhs.magnitude, self.sign.xor(rhs.sign))
    }
}

impl BitXor for Integer {
    type Output = Integer;

    fn bitxor(self, rhs: Integer) -> Integer {
        &self ^ &rhs
    }
}

impl Not for &Integer {
    type Output = Integer;

    /// Complements the magnitude words and flips the sign; an all-ones
    /// magnitude complements to canonical zero.
    fn not(self) -> Integer {
        let complemented = !&self.magnitude;
        if complemented.is_zero() {
            Integer::zero()
        } else {
            Integer {
                magnitude: complemented,
                sign: self.sign.flipped(),
            }
        }
    }
}

impl Not for Integer {
    type Output = Integer;

    fn not(self) -> Integer {
        !&self
    }
}

impl Shl<u64> for &Integer {
    type Output = Integer;

    fn shl(self, pos: u64) -> Integer {
        Integer::from_parts(&self.magnitude << pos, self.sign)
    }
}

impl Shl<u64> for Integer {
    type Output = Integer;

    fn shl(self, pos: u64) -> Integer {
        Integer::from_parts(self.magnitude << pos, self.sign)
    }
}

impl Shr<u64> for &Integer {
    type Output = Integer;

    /// Shifts the magnitude down; a result of zero resets the sign.
    fn shr(self, pos: u64) -> Integer {
        Integer::from_parts(&self.magnitude >> pos, self.sign)
    }
}

impl Shr<u64> for Integer {
    type Output = Integer;

    fn shr(self, pos: u64) -> Integer {
        Integer::from_parts(self.magnitude >> pos, self.sign)
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::from_parts(Natural::from(value.unsigned_abs()), sign)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self {
            magnitude: Natural::from(value),
            sign: Sign::Positive,
        }
    }
}

impl From<Natural> for Integer {
    fn from(magnitude: Natural) -> Self {
        Self {
            magnitude,
            sign: Sign::Positive,
        }
    }
}
