//! Word-level arithmetic on [`Natural`].
//!
//! Addition and subtraction walk the digit sequences once, propagating a
//! carry or borrow into the more significant words. Multiplication
//! accumulates schoolbook partial products through the double-width type.
//! Division is bit-serial long division from the most significant bit of
//! the dividend down. Every routine leaves its result in canonical form.

use std::cmp::Ordering;
use std::ops::{
    Add, AddAssign, BitAnd, BitOr, BitXor, Mul, MulAssign, Not, Shl, ShlAssign, Shr, ShrAssign,
    Sub, SubAssign,
};

use num_traits::{One, Zero};

use crate::error::NumericError;
use crate::natural::Natural;
use crate::words::{DoubleWord, Word, BASE, MAX_WORD, WORD_BITS};

impl Natural {
    /// In-place `self += rhs` with word-by-word carry propagation.
    ///
    /// The carry-out predicate is evaluated in the double-width type so
    /// that detecting the overflow never overflows itself.
    pub(crate) fn add_assign_impl(&mut self, rhs: &Natural) {
        if rhs.is_zero() {
            return;
        }
        if self.is_zero() {
            self.digits = rhs.digits.clone();
            return;
        }

        if self.digits.len() < rhs.digits.len() {
            self.digits.resize(rhs.digits.len(), 0);
        }

        let mut carry = false;
        let mut i = 0;

        while i < rhs.digits.len() {
            let threshold = if carry {
                DoubleWord::from(MAX_WORD)
            } else {
                BASE
            };
            let next_carry =
                !(DoubleWord::from(self.digits[i]) < threshold - DoubleWord::from(rhs.digits[i]));
            self.digits[i] = self.digits[i]
                .wrapping_add(rhs.digits[i])
                .wrapping_add(Word::from(carry));
            carry = next_carry;
            i += 1;
        }

        while carry && i < self.digits.len() {
            let next_carry = self.digits[i] == MAX_WORD;
            self.digits[i] = self.digits[i].wrapping_add(1);
            carry = next_carry;
            i += 1;
        }

        if carry {
            self.digits.push(1);
        }
    }

    /// In-place `self -= rhs`, assuming `self >= rhs`.
    ///
    /// A borrow out of a word is resolved by decrementing the next
    /// nonzero word before the difference is taken.
    pub(crate) fn sub_assign_impl(&mut self, rhs: &Natural) {
        debug_assert!(*self >= *rhs);

        if rhs.is_zero() {
            return;
        }

        for i in 0..rhs.digits.len() {
            if self.digits[i] < rhs.digits[i] {
                for j in (i + 1)..self.digits.len() {
                    let borrowed = self.digits[j];
                    self.digits[j] = borrowed.wrapping_sub(1);
                    if borrowed > 0 {
                        break;
                    }
                }
            }
            self.digits[i] = self.digits[i].wrapping_sub(rhs.digits[i]);
        }

        self.normalize();
    }

    /// Absolute difference `|self - rhs|`.
    ///
    /// The smaller operand is subtracted from the larger, so the result
    /// is defined for every pair of magnitudes.
    #[must_use]
    pub fn abs_diff(&self, rhs: &Natural) -> Natural {
        match self.cmp(rhs) {
            Ordering::Equal => Natural::zero(),
            Ordering::Greater => {
                let mut difference = self.clone();
                difference.sub_assign_impl(rhs);
                difference
            }
            Ordering::Less => {
                let mut difference = rhs.clone();
                difference.sub_assign_impl(self);
                difference
            }
        }
    }

    /// Quotient and remainder, assuming `rhs` is nonzero.
    pub(crate) fn div_rem_impl(&self, rhs: &Natural) -> (Natural, Natural) {
        debug_assert!(!rhs.is_zero());

        if self.is_zero() {
            return (Natural::zero(), Natural::zero());
        }
        if self == rhs {
            return (Natural::one(), Natural::zero());
        }

        let mut quotient = Natural::zero();
        let mut remainder = Natural::zero();

        for pos in (0..self.bit_len()).rev() {
            remainder <<= 1;
            remainder.set_bit(0, self.bit(pos));
            if remainder >= *rhs {
                remainder.sub_assign_impl(rhs);
                quotient.set_bit(pos, true);
            }
        }

        (quotient, remainder)
    }

    /// Quotient and remainder of `self / rhs`.
    ///
    /// Dividing a value by itself short-circuits to `(1, 0)`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DivisionByZero`] when `rhs` is zero.
    pub fn div_rem(&self, rhs: &Natural) -> Result<(Natural, Natural), NumericError> {
        if rhs.is_zero() {
            return Err(NumericError::division_by_zero());
        }
        Ok(self.div_rem_impl(rhs))
    }

    /// Adds one in place, rippling the carry upward.
    pub fn increment(&mut self) {
        for digit in &mut self.digits {
            let old = *digit;
            *digit = old.wrapping_add(1);
            if old < MAX_WORD {
                return;
            }
        }
        self.digits.push(1);
    }

    /// Subtracts one in place, rippling the borrow upward. Zero stays
    /// zero.
    pub fn decrement(&mut self) {
        for digit in &mut self.digits {
            let old = *digit;
            *digit = old.wrapping_sub(1);
            if old > 0 {
                break;
            }
        }
        self.normalize();
    }
}

fn mul_impl(lhs: &Natural, rhs: &Natural) -> Natural {
    if lhs.is_one() {
        return rhs.clone();
    }
    if rhs.is_one() {
        return lhs.clone();
    }
    if lhs.is_zero() || rhs.is_zero() {
        return Natural::zero();
    }

    let mut product = Natural::zero();
    product.digits.reserve(lhs.digits.len() + rhs.digits.len());

    for (i, &multiplier) in lhs.digits.iter().enumerate() {
        let mut partial = Natural::zero();
        partial.digits.reserve(i + rhs.digits.len() + 1);
        partial.digits.resize(i, 0);

        let mut carry: Word = 0;
        for &multiplicand in &rhs.digits {
            let wide = DoubleWord::from(multiplier) * DoubleWord::from(multiplicand);
            let low = wide as Word;
            partial.digits.push(carry.wrapping_add(low));
            // both terms below stay short of the base, so the sum fits
            let carry_up = ((DoubleWord::from(carry) + DoubleWord::from(low)) >> WORD_BITS) as Word;
            carry = ((wide >> WORD_BITS) as Word) + carry_up;
        }

        if carry != 0 {
            partial.digits.push(carry);
        }
        product.add_assign_impl(&partial);
    }

    product
}

fn and_impl(lhs: &Natural, rhs: &Natural) -> Natural {
    if lhs.is_zero() || rhs.is_zero() {
        return Natural::zero();
    }

    let short = lhs.digits.len().min(rhs.digits.len());
    let digits = lhs.digits[..short]
        .iter()
        .zip(&rhs.digits[..short])
        .map(|(a, b)| a & b)
        .collect();

    // masking can zero out the top words, so re-strip
    Natural::from_digits(digits)
}

fn or_impl(lhs: &Natural, rhs: &Natural) -> Natural {
    if lhs.is_zero() {
        return rhs.clone();
    }
    if rhs.is_zero() {
        return lhs.clone();
    }

    let (longest, shortest) = if lhs.digits.len() < rhs.digits.len() {
        (rhs, lhs)
    } else {
        (lhs, rhs)
    };

    let mut digits = Vec::with_capacity(longest.digits.len());
    for i in 0..shortest.digits.len() {
        digits.push(lhs.digits[i] | rhs.digits[i]);
    }
    digits.extend_from_slice(&longest.digits[shortest.digits.len()..]);

    // the copied tail ends in the longer operand's nonzero top word, so
    // the result is already canonical
    Natural { digits }
}

fn xor_impl(lhs: &Natural, rhs: &Natural) -> Natural {
    if lhs.is_zero() {
        return rhs.clone();
    }
    if rhs.is_zero() {
        return lhs.clone();
    }

    let (longest, shortest) = if lhs.digits.len() < rhs.digits.len() {
        (rhs, lhs)
    } else {
        (lhs, rhs)
    };

    let mut digits = Vec::with_capacity(longest.digits.len());
    for i in 0..shortest.digits.len() {
        digits.push(lhs.digits[i] ^ rhs.digits[i]);
    }
    digits.extend_from_slice(&longest.digits[shortest.digits.len()..]);

    // equal-length operands can cancel their top words
    Natural::from_digits(digits)
}

impl AddAssign<&Natural> for Natural {
    fn add_assign(&mut self, rhs: &Natural) {
        self.add_assign_impl(rhs);
    }
}

impl AddAssign for Natural {
    fn add_assign(&mut self, rhs: Natural) {
        self.add_assign_impl(&rhs);
    }
}

impl Add<&Natural> for Natural {
    type Output = Natural;

    fn add(mut self, rhs: &Natural) -> Natural {
        self.add_assign_impl(rhs);
        self
    }
}

impl Add for Natural {
    type Output = Natural;

    fn add(self, rhs: Natural) -> Natural {
        self + &rhs
    }
}

impl Add for &Natural {
    type Output = Natural;

    fn add(self, rhs: &Natural) -> Natural {
        if self.is_zero() {
            return rhs.clone();
        }
        self.clone() + rhs
    }
}

impl SubAssign<&Natural> for Natural {
    /// # Panics
    ///
    /// Panics when `rhs > self`, like overflow on the primitive unsigned
    /// types.
    fn sub_assign(&mut self, rhs: &Natural) {
        assert!(*self >= *rhs, "attempt to subtract with overflow");
        self.sub_assign_impl(rhs);
    }
}

impl SubAssign for Natural {
    fn sub_assign(&mut self, rhs: Natural) {
        *self -= &rhs;
    }
}

impl Sub<&Natural> for Natural {
    type Output = Natural;

    fn sub(mut self, rhs: &Natural) -> Natural {
        self -= rhs;
        self
    }
}

impl Sub for Natural {
    type Output = Natural;

    fn sub(self, rhs: Natural) -> Natural {
        self - &rhs
    }
}

impl Sub for &Natural {
    type Output = Natural;

    fn sub(self, rhs: &Natural) -> Natural {
        self.clone() - rhs
    }
}

impl MulAssign<&Natural> for Natural {
    fn mul_assign(&mut self, rhs: &Natural) {
        *self = mul_impl(self, rhs);
    }
}

impl MulAssign for Natural {
    fn mul_assign(&mut self, rhs: Natural) {
        *self = mul_impl(self, &rhs);
    }
}

impl Mul for &Natural {
    type Output = Natural;

    fn mul(self, rhs: &Natural) -> Natural {
        mul_impl(self, rhs)
    }
}

impl Mul<&Natural> for Natural {
    type Output = Natural;

    fn mul(self, rhs: &Natural) -> Natural {
        mul_impl(&self, rhs)
    }
}

impl Mul for Natural {
    type Output = Natural;

    fn mul(self, rhs: Natural) -> Natural {
        mul_impl(&self, &rhs)
    }
}

impl BitAnd for &Natural {
    type Output = Natural;

    fn bitand(self, rhs: &Natural) -> Natural {
        and_impl(self, rhs)
    }
}

impl BitAnd<&Natural> for Natural {
    type Output = Natural;

    fn bitand(self, rhs: &Natural) -> Natural {
        and_impl(&self, rhs)
    }
}

impl BitAnd for Natural {
    type Output = Natural;

    fn bitand(self, rhs: Natural) -> Natural {
        and_impl(&self, &rhs)
    }
}

impl BitOr for &Natural {
    type Output = Natural;

    fn bitor(self, rhs: &Natural) -> Natural {
        or_impl(self, rhs)
    }
}

impl BitOr<&Natural> for Natural {
    type Output = Natural;

    fn bitor(self, rhs: &Natural) -> Natural {
        or_impl(&self, rhs)
    }
}

impl BitOr for Natural {
    type Output = Natural;

    fn bitor(self, rhs: Natural) -> Natural {
        or_impl(&self, &rhs)
    }
}

impl BitXor for &Natural {
    type Output = Natural;

    fn bitxor(self, rhs: &Natural) -> Natural {
        xor_impl(self, rhs)
    }
}

impl BitXor<&Natural> for Natural {
    type Output = Natural;

    fn bitxor(self, rhs: &Natural) -> Natural {
        xor_impl(&self, rhs)
    }
}

impl BitXor for Natural {
    type Output = Natural;

    fn bitxor(self, rhs: Natural) -> Natural {
        xor_impl(&self, &rhs)
    }
}

impl Not for &Natural {
    type Output = Natural;

    /// Complements every word; a value of all-one words complements to
    /// zero.
    fn not(self) -> Natural {
        Natural::from_digits(self.digits.iter().map(|digit| !digit).collect())
    }
}

impl Not for Natural {
    type Output = Natural;

    fn not(self) -> Natural {
        !&self
    }
}

impl ShlAssign<u64> for Natural {
    fn shl_assign(&mut self, pos: u64) {
        if self.is_zero() || pos == 0 {
            return;
        }

        let whole = (pos / WORD_BITS) as usize;
        let offset = (pos % WORD_BITS) as u32;

        if offset != 0 {
            let down = WORD_BITS as u32 - offset;
            let mut previous = self.digits[0];
            self.digits[0] <<= offset;
            for i in 1..self.digits.len() {
                let current = self.digits[i];
                self.digits[i] = (previous >> down) | (current << offset);
                previous = current;
            }
            self.digits.push(previous >> down);
            self.normalize();
        }

        if whole > 0 {
            let mut shifted = vec![0; whole];
            shifted.append(&mut self.digits);
            self.digits = shifted;
        }
    }
}

impl Shl<u64> for Natural {
    type Output = Natural;

    fn shl(mut self, pos: u64) -> Natural {
        self <<= pos;
        self
    }
}

impl Shl<u64> for &Natural {
    type Output = Natural;

    fn shl(self, pos: u64) -> Natural {
        self.clone() << pos
    }
}

impl ShrAssign<u64> for Natural {
    fn shr_assign(&mut self, pos: u64) {
        if self.is_zero() || pos == 0 {
            return;
        }

        let whole = (pos / WORD_BITS) as usize;
        if whole >= self.digits.len() {
            self.digits.clear();
            return;
        }
        self.digits.drain(..whole);

        let offset = (pos % WORD_BITS) as u32;
        if offset != 0 {
            let up = WORD_BITS as u32 - offset;
            for i in 0..self.digits.len() - 1 {
                self.digits[i] = (self.digits[i] >> offset) | (self.digits[i + 1] << up);
            }
            let last = self.digits.len() - 1;
            self.digits[last] >>= offset;
            self.normalize();
        }
    }
}

impl Shr<u64> for Natural {
    type Output = Natural;

    fn shr(mut self, pos: u64) -> Natural {
        self >>= pos;
        self
    }
}

impl Shr<u64> for &Natural {
    type Output = Natural;

    fn shr(self, pos: u64) -> Natural {
        self.clone() >> pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nat(value: u128) -> Natural {
        Natural::from(value)
    }

    #[test]
    fn addition_matches_small_sums() {
        assert_eq!(nat(200) + nat(55), nat(255));
        assert_eq!(nat(0) + nat(9), nat(9));
        assert_eq!(nat(9) + nat(0), nat(9));
    }

    #[test]
    fn addition_carries_across_word_boundaries() {
        let max = Natural::from(u64::MAX);
        assert_eq!(max.clone() + Natural::one(), nat(u128::from(u64::MAX) + 1));
        assert_eq!(
            max.clone() + max.clone(),
            nat(u128::from(u64::MAX) * 2)
        );
    }

    #[test]
    fn addition_appends_a_final_carry_word() {
        let top = Natural::one() << (WORD_BITS * 4 - 1);
        let sum = top.clone() + top;
        assert_eq!(sum, Natural::one() << (WORD_BITS * 4));
    }

    #[test]
    fn subtraction_borrows_through_zero_words() {
        let value = Natural::one() << (WORD_BITS * 3);
        let difference = value - &Natural::one();
        assert_eq!(difference.bit_len(), WORD_BITS * 3);
        assert_eq!(difference + Natural::one(), Natural::one() << (WORD_BITS * 3));
    }

    #[test]
    #[should_panic(expected = "attempt to subtract with overflow")]
    fn subtraction_underflow_panics() {
        let _ = nat(3) - nat(5);
    }

    #[test]
    fn abs_diff_routes_around_the_ordering() {
        assert_eq!(nat(3).abs_diff(&nat(5)), nat(2));
        assert_eq!(nat(5).abs_diff(&nat(3)), nat(2));
        assert_eq!(nat(5).abs_diff(&nat(5)), Natural::zero());
    }

    #[test]
    fn multiplication_matches_wide_products() {
        assert_eq!(nat(1_000_003) * nat(999_999), nat(1_000_003 * 999_999));
        let max = u128::from(u64::MAX);
        assert_eq!(
            Natural::from(u64::MAX) * Natural::from(u64::MAX),
            nat(max * max)
        );
    }

    #[test]
    fn multiplicative_identities_short_circuit() {
        let value = nat(123_456_789);
        assert_eq!(value.clone() * Natural::one(), value);
        assert_eq!(Natural::one() * value.clone(), value);
        assert!((value * Natural::zero()).is_zero());
    }

    #[test]
    fn division_produces_quotient_and_remainder() {
        let (quotient, remainder) = nat(10).div_rem(&nat(3)).unwrap();
        assert_eq!(quotient, nat(3));
        assert_eq!(remainder, nat(1));
    }

    #[test]
    fn division_by_self_short_circuits() {
        let value = nat(123_456_789_123_456_789);
        let (quotient, remainder) = value.div_rem(&value).unwrap();
        assert!(quotient.is_one());
        assert!(remainder.is_zero());
    }

    #[test]
    fn division_by_zero_is_reported() {
        assert_eq!(
            nat(10).div_rem(&Natural::zero()),
            Err(NumericError::division_by_zero())
        );
        assert_eq!(
            Natural::zero().div_rem(&Natural::zero()),
            Err(NumericError::division_by_zero())
        );
    }

    #[test]
    fn division_identity_holds_for_wide_values() {
        let dividend = (Natural::one() << 200) + nat(987_654_321);
        let divisor = nat(1_000_000_007);
        let (quotient, remainder) = dividend.div_rem(&divisor).unwrap();
        assert!(remainder < divisor);
        assert_eq!(quotient * divisor + remainder, dividend);
    }

    #[test]
    fn increment_and_decrement_ripple() {
        let mut value = Natural::from(u64::MAX);
        value.increment();
        assert_eq!(value, nat(u128::from(u64::MAX) + 1));
        value.decrement();
        assert_eq!(value, Natural::from(u64::MAX));

        let mut zero = Natural::zero();
        zero.decrement();
        assert!(zero.is_zero());
    }

    #[test]
    fn and_truncates_to_the_shorter_operand() {
        let long = (Natural::one() << (WORD_BITS * 4)) + nat(0b1100);
        let short = nat(0b1010);
        assert_eq!(&long & &short, nat(0b1000));
        assert!((&long & &Natural::zero()).is_zero());
    }

    #[test]
    fn and_restrips_cancelled_top_words() {
        let a = (Natural::one() << (WORD_BITS * 2)) + nat(0b01);
        let b = (Natural::from(2u64) << (WORD_BITS * 2)) + nat(0b11);
        let masked = &a & &b;
        assert_eq!(masked, nat(0b01));
        assert_eq!(masked.words().len(), 1);
    }

    #[test]
    fn or_copies_the_longer_tail() {
        let long = Natural::one() << (WORD_BITS * 3);
        let short = nat(0b101);
        let merged = &long | &short;
        assert_eq!(merged, (Natural::one() << (WORD_BITS * 3)) + nat(0b101));
    }

    #[test]
    fn xor_restrips_cancelled_top_words() {
        let a = (Natural::one() << (WORD_BITS * 2)) + nat(0b01);
        let b = (Natural::one() << (WORD_BITS * 2)) + nat(0b10);
        let mixed = &a ^ &b;
        assert_eq!(mixed, nat(0b11));
        assert_eq!(mixed.words().len(), 1);
    }

    #[test]
    fn complement_flips_every_word() {
        assert!((!Natural::from(u64::from(MAX_WORD))).is_zero());
        let complemented = !Natural::one();
        assert_eq!(complemented, Natural::from(u64::from(MAX_WORD) - 1));
    }

    #[test]
    fn shifts_move_across_word_boundaries() {
        let value = nat(0b1011);
        let shifted = &value << (WORD_BITS + 3);
        assert_eq!(&shifted >> (WORD_BITS + 3), value);
        assert_eq!(shifted.trailing_zeros(), WORD_BITS + 3);
    }

    #[test]
    fn right_shift_past_the_width_is_zero() {
        let value = nat(0b1011);
        assert!((value >> 400).is_zero());
    }

    #[test]
    fn whole_word_shifts_keep_the_digit_pattern() {
        let value = nat(0xDEAD_BEEF);
        let shifted = &value << (WORD_BITS * 2);
        assert_eq!(shifted.words()[2..], value.words()[..]);
        assert_eq!(shifted >> (WORD_BITS * 2), value);
    }
}
