//! Uniform random magnitudes.

use rand::Rng;

use crate::natural::Natural;
use crate::words::{Word, MAX_WORD, WORD_BITS};

impl Natural {
    /// Draws a uniform value in `[0, 2^bit_len)`.
    ///
    /// Whole words are sampled directly; a partial top word is masked
    /// down to the remaining bits, and the result is re-stripped like any
    /// other digit sequence.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bit_len: u64) -> Self {
        let whole = (bit_len / WORD_BITS) as usize;
        let partial = (bit_len % WORD_BITS) as u32;

        let mut digits: Vec<Word> = Vec::with_capacity(whole + 1);
        for _ in 0..whole {
            digits.push(rng.gen());
        }
        if partial > 0 {
            let mask = MAX_WORD >> (WORD_BITS as u32 - partial);
            digits.push(rng.gen::<Word>() & mask);
        }

        Self::from_digits(digits)
    }
}
