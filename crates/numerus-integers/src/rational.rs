//! Arbitrary-precision rational numbers.
//!
//! A [`Rational`] keeps an unsigned numerator and denominator plus a
//! single [`Sign`]. Every constructor and mutation reduces the pair by
//! its gcd, keeps the denominator nonzero, and stores zero as `0/1` with
//! a positive sign, so equality and hashing stay structural.

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Add, BitOr, Mul, Neg, Shl, Shr, Sub};
use std::str::FromStr;

use num_traits::{Float, One, Zero};
use numerus_core::words::{BASE, WORD_BITS, WORD_BYTES};
use numerus_core::{calc, Natural, NumericError};

use crate::integer::Integer;
use crate::sign::{split_sign, Sign};

/// An arbitrary-precision rational number, always in lowest terms.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: Natural,
    denominator: Natural,
    sign: Sign,
}

impl Rational {
    /// Builds `numerator / denominator` with an explicit sign, reduced to
    /// lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivisionByZero`] when `denominator` is
    /// zero.
    pub fn from_parts(
        numerator: Natural,
        denominator: Natural,
        sign: Sign,
    ) -> Result<Self, NumericError> {
        if denominator.is_zero() {
            return Err(NumericError::DivisionByZero("denominator cannot be zero"));
        }
        Ok(Self::build(numerator, denominator, sign))
    }

    /// Builds a rational from two signed integers.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivisionByZero`] when `denominator` is
    /// zero.
    pub fn new(numerator: &Integer, denominator: &Integer) -> Result<Self, NumericError> {
        Self::from_parts(
            numerator.magnitude().clone(),
            denominator.magnitude().clone(),
            numerator.sign().xor(denominator.sign()),
        )
    }

    /// Builds a rational from `i64` numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivisionByZero`] when `denominator` is
    /// zero.
    pub fn from_i64(numerator: i64, denominator: i64) -> Result<Self, NumericError> {
        Self::new(&Integer::from(numerator), &Integer::from(denominator))
    }

    /// Internal constructor for denominators already known to be
    /// nonzero.
    fn build(numerator: Natural, denominator: Natural, sign: Sign) -> Self {
        debug_assert!(!denominator.is_zero());
        let mut value = Self {
            numerator,
            denominator,
            sign,
        };
        value.canonicalize();
        value
    }

    /// Divides numerator and denominator by their gcd and forces the
    /// sign of zero positive. Reducing a zero numerator leaves `0/1`,
    /// since gcd(0, d) = d.
    fn canonicalize(&mut self) {
        let divisor = calc::gcd(self.numerator.clone(), self.denominator.clone());
        if !divisor.is_one() {
            let (numerator, _) = self
                .numerator
                .div_rem(&divisor)
                .expect("gcd of a nonzero denominator is nonzero");
            let (denominator, _) = self
                .denominator
                .div_rem(&divisor)
                .expect("gcd of a nonzero denominator is nonzero");
            self.numerator = numerator;
            self.denominator = denominator;
        }
        if self.numerator.is_zero() {
            self.sign = Sign::Positive;
        }
    }

    /// The numerator of the reduced fraction.
    #[must_use]
    pub fn numerator(&self) -> &Natural {
        &self.numerator
    }

    /// The denominator of the reduced fraction; never zero.
    #[must_use]
    pub fn denominator(&self) -> &Natural {
        &self.denominator
    }

    /// The sign tag; positive for zero.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns true if this rational is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Returns -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.numerator.is_zero() {
            0
        } else if self.sign.is_negative() {
            -1
        } else {
            1
        }
    }

    /// The absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            numerator: self.numerator.clone(),
            denominator: self.denominator.clone(),
            sign: Sign::Positive,
        }
    }

    /// Returns true if the denominator is one.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    /// Converts to an [`Integer`] if the denominator is one.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(Integer::from_parts(self.numerator.clone(), self.sign))
        } else {
            None
        }
    }

    /// The reciprocal. Swapping a coprime pair keeps it coprime, so no
    /// reduction is needed.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivisionByZero`] for zero.
    pub fn inverse(&self) -> Result<Self, NumericError> {
        if self.numerator.is_zero() {
            return Err(NumericError::DivisionByZero("cannot invert zero"));
        }
        Ok(Self {
            numerator: self.denominator.clone(),
            denominator: self.numerator.clone(),
            sign: self.sign,
        })
    }

    /// Division.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivisionByZero`] when `rhs` is zero.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, NumericError> {
        if rhs.numerator.is_zero() {
            return Err(NumericError::division_by_zero());
        }
        Ok(Self::build(
            &self.numerator * &rhs.denominator,
            &self.denominator * &rhs.numerator,
            self.sign.xor(rhs.sign),
        ))
    }

    /// Component-wise bitwise AND: numerators and denominators are
    /// masked independently, and the signs combine like Boolean AND.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivisionByZero`] when the denominators
    /// mask to zero.
    pub fn try_bitand(&self, rhs: &Self) -> Result<Self, NumericError> {
        let denominator = &self.denominator & &rhs.denominator;
        if denominator.is_zero() {
            return Err(NumericError::division_by_zero());
        }
        Ok(Self::build(
            &self.numerator & &rhs.numerator,
            denominator,
            self.sign.and(rhs.sign),
        ))
    }

    /// Component-wise bitwise XOR; see [`Rational::try_bitand`].
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivisionByZero`] when the denominators
    /// cancel to zero.
    pub fn try_bitxor(&self, rhs: &Self) -> Result<Self, NumericError> {
        let denominator = &self.denominator ^ &rhs.denominator;
        if denominator.is_zero() {
            return Err(NumericError::division_by_zero());
        }
        Ok(Self::build(
            &self.numerator ^ &rhs.numerator,
            denominator,
            self.sign.xor(rhs.sign),
        ))
    }

    /// Adds one in place. The numerator moves by one denominator, which
    /// cannot disturb coprimality, so no reduction is needed.
    pub fn increment(&mut self) {
        if self.sign.is_negative() {
            match self.numerator.cmp(&self.denominator) {
                Ordering::Equal => {
                    // a reduced n/n is 1/1, so this yields canonical zero
                    self.numerator = Natural::zero();
                    self.sign = Sign::Positive;
                }
                Ordering::Greater => self.numerator -= &self.denominator,
                Ordering::Less => {
                    self.numerator = &self.denominator - &self.numerator;
                    self.sign = Sign::Positive;
                }
            }
        } else {
            self.numerator += &self.denominator;
        }
    }

    /// Subtracts one in place; the mirror of [`Rational::increment`].
    pub fn decrement(&mut self) {
        if self.sign.is_negative() {
            self.numerator += &self.denominator;
        } else {
            match self.numerator.cmp(&self.denominator) {
                Ordering::Equal => {
                    self.numerator = Natural::zero();
                }
                Ordering::Greater => self.numerator -= &self.denominator,
                Ordering::Less => {
                    self.numerator = &self.denominator - &self.numerator;
                    self.sign = Sign::Negative;
                }
            }
        }
    }

    /// Parses `[-]numerator[/denominator]` with digits in `radix`. A
    /// missing `/denominator` reads as a denominator of one.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::InvalidBase`] for a radix outside
    /// `[2, 64]` and [`NumericError::DivisionByZero`] when the
    /// denominator digits parse to zero.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, NumericError> {
        let (sign, unsigned) = split_sign(text);
        match unsigned.split_once('/') {
            Some((numerator, denominator)) => Self::from_parts(
                Natural::from_str_radix(numerator, radix)?,
                Natural::from_str_radix(denominator, radix)?,
                sign,
            ),
            None => Self::from_parts(
                Natural::from_str_radix(unsigned, radix)?,
                Natural::one(),
                sign,
            ),
        }
    }

    /// Formats the value in `radix`; the `/denominator` part is omitted
    /// for integral values.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::InvalidBase`] when `radix` lies outside
    /// `[2, 64]`.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, NumericError> {
        let mut rendered = String::new();
        if self.sign.is_negative() {
            rendered.push('-');
        }
        rendered.push_str(&self.numerator.to_str_radix(radix)?);
        if !self.denominator.is_one() {
            rendered.push('/');
            rendered.push_str(&self.denominator.to_str_radix(radix)?);
        }
        Ok(rendered)
    }

    /// Exact rational value of a finite `f64`.
    ///
    /// The float splits into an integer significand and a power-of-two
    /// scale, so no rounding happens. Returns `None` for NaN and the
    /// infinities.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let (mantissa, exponent, sign) = Float::integer_decode(value);
        let sign = if sign < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let scale = u64::from(exponent.unsigned_abs());

        let (numerator, denominator) = if exponent >= 0 {
            (Natural::from(mantissa) << scale, Natural::one())
        } else {
            (Natural::from(mantissa), Natural::one() << scale)
        };

        Some(Self::build(numerator, denominator, sign))
    }

    /// Exact rational value of a finite `f32`.
    #[must_use]
    pub fn from_f32(value: f32) -> Option<Self> {
        Self::from_f64(f64::from(value))
    }

    /// Nearest `f64`.
    ///
    /// The top words of numerator and denominator build approximate
    /// floating operands; their quotient is then corrected by patching
    /// the IEEE exponent field with the word-length difference the
    /// approximation dropped. A scale beyond the largest finite exponent
    /// maps to the signed infinity; a scale below the normal range
    /// (including would-be subnormals) has no representable value and
    /// yields `None`.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        const MANTISSA_BITS: u64 = 52;
        const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;
        const MAX_BIASED_EXPONENT: u64 = 0x7FE;

        if self.numerator.is_zero() {
            return Some(0.0);
        }
        if self.is_one() {
            return Some(1.0);
        }
        if self.sign.is_negative() && self.numerator.is_one() && self.denominator.is_one() {
            return Some(-1.0);
        }

        let word_window = (mem::size_of::<f64>() / WORD_BYTES).max(1);
        let quotient =
            approximate_f64(&self.numerator, word_window) / approximate_f64(&self.denominator, word_window);

        let bits = quotient.to_bits();
        let mantissa = bits & MANTISSA_MASK;
        let mut exponent = (bits >> MANTISSA_BITS) & 0x7FF;

        let numerator_words = self.numerator.bit_len().div_ceil(WORD_BITS);
        let denominator_words = self.denominator.bit_len().div_ceil(WORD_BITS);

        if numerator_words < denominator_words {
            let correction = (denominator_words - numerator_words) * WORD_BITS;
            if exponent < 1 + correction {
                return None;
            }
            exponent -= correction;
        } else {
            let correction = (numerator_words - denominator_words) * WORD_BITS;
            if correction > MAX_BIASED_EXPONENT - exponent {
                return Some(if self.sign.is_negative() {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                });
            }
            exponent += correction;
        }

        let sign_bit = u64::from(self.sign.is_negative()) << 63;
        Some(f64::from_bits(
            sign_bit | (exponent << MANTISSA_BITS) | mantissa,
        ))
    }

    /// Nearest `f32`; see [`Rational::to_f64`].
    #[must_use]
    pub fn to_f32(&self) -> Option<f32> {
        const MANTISSA_BITS: u32 = 23;
        const MANTISSA_MASK: u32 = (1 << MANTISSA_BITS) - 1;
        const MAX_BIASED_EXPONENT: u64 = 0xFE;

        if self.numerator.is_zero() {
            return Some(0.0);
        }
        if self.is_one() {
            return Some(1.0);
        }
        if self.sign.is_negative() && self.numerator.is_one() && self.denominator.is_one() {
            return Some(-1.0);
        }

        let word_window = (mem::size_of::<f32>() / WORD_BYTES).max(1);
        let quotient =
            approximate_f32(&self.numerator, word_window) / approximate_f32(&self.denominator, word_window);

        let bits = quotient.to_bits();
        let mantissa = bits & MANTISSA_MASK;
        let mut exponent = u64::from((bits >> MANTISSA_BITS) & 0xFF);

        let numerator_words = self.numerator.bit_len().div_ceil(WORD_BITS);
        let denominator_words = self.denominator.bit_len().div_ceil(WORD_BITS);

        if numerator_words < denominator_words {
            let correction = (denominator_words - numerator_words) * WORD_BITS;
            if exponent < 1 + correction {
                return None;
            }
            exponent -= correction;
        } else {
            let correction = (numerator_words - denominator_words) * WORD_BITS;
            if correction > MAX_BIASED_EXPONENT - exponent {
                return Some(if self.sign.is_negative() {
                    f32::NEG_INFINITY
                } else {
                    f32::INFINITY
                });
            }
            exponent += correction;
        }

        let sign_bit = u32::from(self.sign.is_negative()) << 31;
        Some(f32::from_bits(
            sign_bit | ((exponent as u32) << MANTISSA_BITS) | mantissa,
        ))
    }
}

/// Value of the top `word_window` words, scaled as if the magnitude were
/// exactly that many words wide.
fn approximate_f64(value: &Natural, word_window: usize) -> f64 {
    let mut approx = 0.0;
    let mut taken = 0;
    for &word in value.words().iter().rev().take(word_window) {
        approx = approx * (BASE as f64) + word as f64;
        taken += 1;
    }
    for _ in taken..word_window {
        approx *= BASE as f64;
    }
    approx
}

fn approximate_f32(value: &Natural, word_window: usize) -> f32 {
    let mut approx = 0.0f32;
    let mut taken = 0;
    for &word in value.words().iter().rev().take(word_window) {
        approx = approx * (BASE as f32) + word as f32;
        taken += 1;
    }
    for _ in taken..word_window {
        approx *= BASE as f32;
    }
    approx
}

/// Cross-multiplied addition with the rhs sign supplied by the caller,
/// which makes subtraction the same walk with a flipped sign.
fn signed_sum(lhs: &Rational, rhs: &Rational, rhs_sign: Sign) -> Rational {
    let first = &lhs.numerator * &rhs.denominator;
    let second = &lhs.denominator * &rhs.numerator;
    let denominator = &lhs.denominator * &rhs.denominator;

    if lhs.sign == rhs_sign {
        return Rational::build(first + second, denominator, lhs.sign);
    }

    match first.cmp(&second) {
        Ordering::Equal => Rational::zero(),
        Ordering::Greater => Rational::build(first - &second, denominator, lhs.sign),
        Ordering::Less => Rational::build(second - &first, denominator, rhs_sign),
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self {
            numerator: Natural::zero(),
            denominator: Natural::one(),
            sign: Sign::Positive,
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self {
            numerator: Natural::one(),
            denominator: Natural::one(),
            sign: Sign::Positive,
        }
    }

    fn is_one(&self) -> bool {
        !self.sign.is_negative() && self.numerator.is_one() && self.denominator.is_one()
    }
}

impl Ord for Rational {
    /// Cross-multiplies instead of dividing, so ordering never rounds.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => {
                (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
            }
            (Sign::Negative, Sign::Negative) => {
                (&other.numerator * &self.denominator).cmp(&(&self.numerator * &other.denominator))
            }
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.numerator)?;
        if !self.denominator.is_one() {
            write!(f, "/{}", self.denominator)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{:X}", self.numerator)?;
        if !self.denominator.is_one() {
            write!(f, "/{:X}", self.denominator)?;
        }
        Ok(())
    }
}

impl FromStr for Rational {
    type Err = NumericError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(text, 10)
    }
}

// Arithmetic operations

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        signed_sum(self, rhs, rhs.sign)
    }
}

impl Add<&Rational> for Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        &self + rhs
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        &self + &rhs
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        signed_sum(self, rhs, rhs.sign.flipped())
    }
}

impl Sub<&Rational> for Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        &self - rhs
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        &self - &rhs
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::build(
            &self.numerator * &rhs.numerator,
            &self.denominator * &rhs.denominator,
            self.sign.xor(rhs.sign),
        )
    }
}

impl Mul<&Rational> for Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        &self * rhs
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        &self * &rhs
    }
}

impl BitOr for &Rational {
    type Output = Rational;

    /// Component-wise bitwise OR. Merging two nonzero denominators can
    /// never produce zero, so unlike AND and XOR this operation is
    /// total.
    fn bitor(self, rhs: &Rational) -> Rational {
        Rational::build(
            &self.numerator | &rhs.numerator,
            &self.denominator | &rhs.denominator,
            self.sign.or(rhs.sign),
        )
    }
}

impl BitOr for Rational {
    type Output = Rational;

    fn bitor(self, rhs: Rational) -> Rational {
        &self | &rhs
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(mut self) -> Rational {
        if !self.numerator.is_zero() {
            self.sign = self.sign.flipped();
        }
        self
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -self.clone()
    }
}

impl Shl<u64> for &Rational {
    type Output = Rational;

    /// Shifts the numerator up and re-reduces against the denominator.
    fn shl(self, pos: u64) -> Rational {
        Rational::build(
            &self.numerator << pos,
            self.denominator.clone(),
            self.sign,
        )
    }
}

impl Shl<u64> for Rational {
    type Output = Rational;

    fn shl(self, pos: u64) -> Rational {
        &self << pos
    }
}

impl Shr<u64> for &Rational {
    type Output = Rational;

    /// Halving grows the denominator instead of touching the numerator.
    fn shr(self, pos: u64) -> Rational {
        if self.numerator.is_zero() {
            return Rational::zero();
        }
        Rational::build(
            self.numerator.clone(),
            &self.denominator << pos,
            self.sign,
        )
    }
}

impl Shr<u64> for Rational {
    type Output = Rational;

    fn shr(self, pos: u64) -> Rational {
        &self >> pos
    }
}

impl From<Integer> for Rational {
    fn from(value: Integer) -> Self {
        let sign = value.sign();
        Self {
            numerator: value.magnitude,
            denominator: Natural::one(),
            sign,
        }
    }
}

impl From<&Integer> for Rational {
    fn from(value: &Integer) -> Self {
        Self::from(value.clone())
    }
}

impl From<Natural> for Rational {
    fn from(value: Natural) -> Self {
        Self {
            numerator: value,
            denominator: Natural::one(),
            sign: Sign::Positive,
        }
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from(Integer::from(value))
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Self::from(Integer::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(numerator: i64, denominator: i64) -> Rational {
        Rational::from_i64(numerator, denominator).unwrap()
    }

    #[test]
    fn construction_reduces_to_lowest_terms() {
        let reduced = rat(4, 6);
        assert_eq!(reduced.numerator(), &Natural::from(2u64));
        assert_eq!(reduced.denominator(), &Natural::from(3u64));
        assert_eq!(rat(4, 6), rat(2, 3));
    }

    #[test]
    fn zero_denominator_is_reported() {
        assert_eq!(
            Rational::from_i64(1, 0),
            Err(NumericError::DivisionByZero("denominator cannot be zero"))
        );
        assert_eq!(
            Rational::from_str_radix("1/0", 10),
            Err(NumericError::DivisionByZero("denominator cannot be zero"))
        );
    }

    #[test]
    fn zero_is_always_the_canonical_fraction() {
        let zero = rat(0, -7);
        assert!(zero.is_zero());
        assert_eq!(zero.sign(), Sign::Positive);
        assert!(zero.denominator().is_one());
        assert_eq!(zero, Rational::zero());
    }

    #[test]
    fn canonicalization_is_idempotent() {
        let value = rat(2, 3);
        let again = Rational::from_parts(
            value.numerator().clone(),
            value.denominator().clone(),
            value.sign(),
        )
        .unwrap();
        assert_eq!(again, value);
    }

    #[test]
    fn addition_cross_multiplies() {
        assert_eq!(rat(1, 2) + rat(1, 3), rat(5, 6));
        assert_eq!(rat(1, 2) + rat(-1, 3), rat(1, 6));
        assert_eq!(rat(-1, 2) + rat(1, 3), rat(-1, 6));
        assert_eq!(rat(-1, 2) + rat(-1, 3), rat(-5, 6));
        let cancelled = rat(1, 2) + rat(-1, 2);
        assert!(cancelled.is_zero());
        assert_eq!(cancelled.sign(), Sign::Positive);
    }

    #[test]
    fn subtraction_mirrors_addition() {
        assert_eq!(rat(1, 2) - rat(1, 3), rat(1, 6));
        assert_eq!(rat(1, 3) - rat(1, 2), rat(-1, 6));
        assert_eq!(rat(-1, 2) - rat(1, 2), rat(-1, 1));
        assert_eq!(rat(1, 2) - rat(-1, 2), rat(1, 1));
    }

    #[test]
    fn multiplication_and_division_are_inverses() {
        assert_eq!(rat(2, 3) * rat(3, 4), rat(1, 2));
        assert_eq!(rat(-2, 3) * rat(3, 4), rat(-1, 2));
        let quotient = rat(1, 2).try_div(&rat(3, 4)).unwrap();
        assert_eq!(quotient, rat(2, 3));
        assert_eq!(quotient * rat(3, 4), rat(1, 2));
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(
            rat(1, 2).try_div(&Rational::zero()),
            Err(NumericError::division_by_zero())
        );
        assert_eq!(
            Rational::zero().inverse(),
            Err(NumericError::DivisionByZero("cannot invert zero"))
        );
    }

    #[test]
    fn inverse_swaps_the_reduced_pair() {
        assert_eq!(rat(2, 3).inverse().unwrap(), rat(3, 2));
        assert_eq!(rat(-2, 3).inverse().unwrap(), rat(-3, 2));
    }

    #[test]
    fn comparison_cross_multiplies() {
        assert!(rat(1, 3) < rat(1, 2));
        assert!(rat(-1, 2) < rat(-1, 3));
        assert!(rat(-1, 2) < rat(1, 3));
        assert!(rat(7, 3) > rat(2, 1));
        assert_eq!(rat(2, 4).cmp(&rat(1, 2)), Ordering::Equal);
    }

    #[test]
    fn bitwise_ops_work_component_wise() {
        // 3/2 & 7/6: numerators 3 & 7 = 3, denominators 2 & 6 = 2
        assert_eq!(rat(3, 2).try_bitand(&rat(7, 6)).unwrap(), rat(3, 2));
        // denominators 2 & 5 share no bits, so the fraction collapses
        assert_eq!(
            rat(1, 2).try_bitand(&rat(1, 5)),
            Err(NumericError::division_by_zero())
        );
        // 3/2 | 5/4: numerators 3 | 5 = 7, denominators 2 | 4 = 6
        assert_eq!(rat(3, 2) | rat(5, 4), rat(7, 6));
        assert_eq!(rat(-3, 2) | rat(5, 4), rat(-7, 6));
        // 1/2 ^ 1/3: denominators 2 ^ 3 = 1, numerators cancel to zero
        assert!(rat(1, 2).try_bitxor(&rat(1, 3)).unwrap().is_zero());
        assert_eq!(
            rat(1, 2).try_bitxor(&rat(1, 2)),
            Err(NumericError::division_by_zero())
        );
    }

    #[test]
    fn bitwise_signs_combine_like_booleans() {
        let and = rat(-3, 2).try_bitand(&rat(-7, 2)).unwrap();
        assert!(and.is_negative());
        let mixed = rat(-3, 2).try_bitand(&rat(7, 2)).unwrap();
        assert!(!mixed.is_negative());
        let xored = rat(-3, 2).try_bitxor(&rat(-2, 3)).unwrap();
        assert!(!xored.is_negative());
    }

    #[test]
    fn shifts_scale_by_powers_of_two() {
        assert_eq!(rat(3, 4) << 1, rat(3, 2));
        assert_eq!(rat(3, 4) << 2, rat(3, 1));
        assert_eq!(rat(3, 4) >> 1, rat(3, 8));
        assert_eq!(rat(-3, 4) << 1, rat(-3, 2));
        assert!((Rational::zero() >> 5).is_zero());
    }

    #[test]
    fn increments_step_by_one() {
        let mut value = rat(-1, 2);
        value.increment();
        assert_eq!(value, rat(1, 2));
        value.increment();
        assert_eq!(value, rat(3, 2));
        value.decrement();
        value.decrement();
        assert_eq!(value, rat(-1, 2));

        let mut whole = rat(-1, 1);
        whole.increment();
        assert!(whole.is_zero());
        assert_eq!(whole.sign(), Sign::Positive);
    }

    #[test]
    fn parsing_splits_on_the_fraction_bar() {
        assert_eq!("1/2".parse::<Rational>().unwrap(), rat(1, 2));
        assert_eq!("-5/10".parse::<Rational>().unwrap(), rat(-1, 2));
        assert_eq!("7".parse::<Rational>().unwrap(), rat(7, 1));
        assert_eq!(Rational::from_str_radix("-FF/2", 16).unwrap(), rat(-255, 2));
    }

    #[test]
    fn display_round_trips() {
        for value in [rat(1, 2), rat(-5, 7), rat(3, 1), Rational::zero()] {
            let rendered = value.to_string();
            assert_eq!(rendered.parse::<Rational>().unwrap(), value);
        }
        assert_eq!(rat(-2, 3).to_string(), "-2/3");
        assert_eq!(rat(3, 1).to_string(), "3");
        assert_eq!(rat(255, 2).to_str_radix(16).unwrap(), "FF/2");
    }

    #[test]
    fn exact_float_construction() {
        assert_eq!(Rational::from_f64(0.5).unwrap(), rat(1, 2));
        assert_eq!(Rational::from_f64(-0.75).unwrap(), rat(-3, 4));
        assert_eq!(Rational::from_f64(3.0).unwrap(), rat(3, 1));
        assert_eq!(Rational::from_f64(0.0).unwrap(), Rational::zero());
        assert_eq!(Rational::from_f64(-0.0).unwrap(), Rational::zero());
        assert_eq!(Rational::from_f32(1.25).unwrap(), rat(5, 4));
        assert!(Rational::from_f64(f64::NAN).is_none());
        assert!(Rational::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn tenth_decomposes_exactly() {
        // 0.1 is not a dyadic rational, so the decomposition keeps the
        // full 2^-55 scale rather than rounding
        let tenth = Rational::from_f64(0.1).unwrap();
        assert_eq!(tenth.numerator(), &Natural::from(3_602_879_701_896_397u64));
        assert_eq!(tenth.denominator(), &(Natural::one() << 55));
        assert_eq!(tenth.to_f64(), Some(0.1));
    }

    #[test]
    fn float_round_trips_through_the_exact_form() {
        for value in [0.5f64, -0.375, 1.0, -1.0, 2.75, 1234.5, 5.0e-300] {
            let exact = Rational::from_f64(value).unwrap();
            assert_eq!(exact.to_f64(), Some(value), "{value}");
        }
    }

    #[test]
    fn float_conversion_saturates_and_underflows() {
        let huge = Rational::from(Integer::from_parts(
            Natural::one() << 2000,
            Sign::Positive,
        ));
        assert_eq!(huge.to_f64(), Some(f64::INFINITY));
        let negative_huge = -huge;
        assert_eq!(negative_huge.to_f64(), Some(f64::NEG_INFINITY));

        let tiny = Rational::from_parts(Natural::one(), Natural::one() << 2000, Sign::Positive)
            .unwrap();
        assert_eq!(tiny.to_f64(), None);
    }

    #[test]
    fn large_powers_of_two_convert_exactly() {
        let value = Rational::from(Natural::one() << 300);
        assert_eq!(value.to_f64(), Some(2.0f64.powi(300)));
        assert_eq!((value >> 600).to_f64(), Some(2.0f64.powi(-300)));
    }

    #[test]
    fn f32_conversion_mirrors_f64() {
        assert_eq!(rat(1, 2).to_f32(), Some(0.5));
        assert_eq!(rat(-5, 4).to_f32(), Some(-1.25));
        let huge = Rational::from(Natural::one() << 300);
        assert_eq!(huge.to_f32(), Some(f32::INFINITY));
    }

    #[test]
    fn integral_values_convert_to_integers() {
        assert_eq!(rat(6, 3).to_integer(), Some(Integer::new(2)));
        assert_eq!(rat(1, 2).to_integer(), None);
        assert!(rat(6, 3).is_integer());
        assert_eq!(rat(-4, 2).to_integer(), Some(Integer::new(-2)));
    }

    #[test]
    fn widening_conversions_take_the_sign_along() {
        assert_eq!(Rational::from(Integer::new(-3)), rat(-3, 1));
        assert_eq!(Rational::from(Natural::from(3u64)), rat(3, 1));
        assert_eq!(Rational::from(-5i64), rat(-5, 1));
    }
}
