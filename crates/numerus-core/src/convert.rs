//! Radix conversion and conversions to and from built-in integers.
//!
//! String conversion covers every radix from 2 to 64 over the alphabet
//! `0-9A-Za-z+/`. Formatting divides repeatedly by the radix; parsing is
//! a Horner accumulation. `Display` and `FromStr` fix the radix at 10 and
//! form the whitespace-token text contract of the crate.

use std::fmt;
use std::str::FromStr;

use num_traits::Zero;

use crate::error::NumericError;
use crate::natural::Natural;
use crate::words::{Word, WORD_BITS, WORD_BYTES};

/// Symbols for radixes up to 64: 0-9 map to `'0'-'9'`, 10-35 to
/// `'A'-'Z'`, 36-61 to `'a'-'z'`, 62 to `'+'`, and 63 to `'/'`.
const ALPHABET: &[u8; 64] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz+/";

/// The radix `Display` and `FromStr` work in.
const DEFAULT_RADIX: u32 = 10;

const MIN_RADIX: u32 = 2;
const MAX_RADIX: u32 = 64;

fn check_radix(radix: u32) -> Result<(), NumericError> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(())
    } else {
        Err(NumericError::invalid_base())
    }
}

/// Numeric value of one digit character.
///
/// For radixes small enough not to use the lower-case half of the
/// alphabet, lower-case letters double as 10-35. Characters outside the
/// alphabet resolve to 63, the same slot as `'/'`; garbage input is
/// accepted, not rejected, and so are digits at or above the radix.
fn digit_value(c: u8, radix: u32) -> Word {
    let value = match c {
        b'0'..=b'9' => c - b'0',
        b'A'..=b'Z' => c - b'A' + 10,
        b'a'..=b'z' if radix <= 36 => c - b'a' + 10,
        b'a'..=b'z' => c - b'a' + 36,
        b'+' => 62,
        _ => 63,
    };
    Word::from(value)
}

impl Natural {
    /// Parses `text` as digits in `radix` by Horner accumulation. The
    /// empty string parses to zero.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::InvalidBase`] when `radix` lies outside
    /// `[2, 64]`.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, NumericError> {
        check_radix(radix)?;

        let scale = Natural::from(radix);
        let mut value = Natural::zero();
        for &c in text.as_bytes() {
            value *= &scale;
            value += &Natural::from_word(digit_value(c, radix));
        }
        Ok(value)
    }

    /// Formats the value in `radix`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::InvalidBase`] when `radix` lies outside
    /// `[2, 64]`.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, NumericError> {
        check_radix(radix)?;
        Ok(self.format_radix(radix))
    }

    /// Repeated division by an already-validated radix; digits come out
    /// least significant first and are reversed at the end.
    fn format_radix(&self, radix: u32) -> String {
        if self.is_zero() {
            return String::from("0");
        }

        let scale = Natural::from(radix);
        let mut symbols = Vec::new();
        let mut value = self.clone();

        while !value.is_zero() {
            let (quotient, remainder) = value.div_rem_impl(&scale);
            symbols.push(ALPHABET[remainder.least_word() as usize]);
            value = quotient;
        }

        symbols.reverse();
        symbols.into_iter().map(char::from).collect()
    }

    /// Converts to a `u64` if the value fits.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.digits.len() * WORD_BYTES > std::mem::size_of::<u64>() {
            return None;
        }

        let mut value: u64 = 0;
        for (i, &digit) in self.digits.iter().enumerate() {
            value |= u64::from(digit) << (i as u64 * WORD_BITS);
        }
        Some(value)
    }
}

impl From<u128> for Natural {
    fn from(mut value: u128) -> Self {
        let mut digits = Vec::new();
        while value != 0 {
            digits.push(value as Word);
            value >>= WORD_BITS;
        }
        Self { digits }
    }
}

impl From<u64> for Natural {
    fn from(value: u64) -> Self {
        Self::from(u128::from(value))
    }
}

impl From<u32> for Natural {
    fn from(value: u32) -> Self {
        Self::from(u128::from(value))
    }
}

impl From<u16> for Natural {
    fn from(value: u16) -> Self {
        Self::from(u128::from(value))
    }
}

impl From<u8> for Natural {
    fn from(value: u8) -> Self {
        Self::from(u128::from(value))
    }
}

impl From<usize> for Natural {
    fn from(value: usize) -> Self {
        Self::from(value as u128)
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_radix(DEFAULT_RADIX))
    }
}

impl fmt::UpperHex for Natural {
    /// Word-wise hexadecimal: the top word prints unpadded, every lower
    /// word zero-padded to its full width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.digits.last() {
            None => f.write_str("0"),
            Some(top) => {
                write!(f, "{top:X}")?;
                let width = WORD_BYTES * 2;
                for digit in self.digits.iter().rev().skip(1) {
                    write!(f, "{digit:0width$X}")?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for Natural {
    type Err = NumericError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(text, DEFAULT_RADIX)
    }
}
