//! Build-time word configuration.
//!
//! A [`Word`] is one digit of the internal base-2^[`WORD_BITS`]
//! representation; [`DoubleWord`] is the paired double-width type that
//! keeps word-by-word multiplication overflow-safe. The width is selected
//! once at compile time and never changes at runtime.

#[cfg(any(
    all(feature = "word-8", feature = "word-16"),
    all(feature = "word-8", feature = "word-64"),
    all(feature = "word-16", feature = "word-64"),
))]
compile_error!("at most one of the word-8, word-16, and word-64 features may be enabled");

/// One digit of the internal representation.
#[cfg(feature = "word-8")]
pub type Word = u8;
/// Double-width companion of [`Word`].
#[cfg(feature = "word-8")]
pub type DoubleWord = u16;

/// One digit of the internal representation.
#[cfg(feature = "word-16")]
pub type Word = u16;
/// Double-width companion of [`Word`].
#[cfg(feature = "word-16")]
pub type DoubleWord = u32;

/// One digit of the internal representation.
#[cfg(not(any(feature = "word-8", feature = "word-16", feature = "word-64")))]
pub type Word = u32;
/// Double-width companion of [`Word`].
#[cfg(not(any(feature = "word-8", feature = "word-16", feature = "word-64")))]
pub type DoubleWord = u64;

/// One digit of the internal representation.
#[cfg(feature = "word-64")]
pub type Word = u64;
/// Double-width companion of [`Word`].
#[cfg(feature = "word-64")]
pub type DoubleWord = u128;

/// Number of bits in one word.
pub const WORD_BITS: u64 = Word::BITS as u64;

/// Number of bytes in one word.
pub const WORD_BYTES: usize = core::mem::size_of::<Word>();

/// The internal numeral base, `2^WORD_BITS`.
pub const BASE: DoubleWord = (Word::MAX as DoubleWord) + 1;

/// The largest value a single word can hold.
pub const MAX_WORD: Word = Word::MAX;
