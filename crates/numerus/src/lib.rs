//! # Numerus
//!
//! Arbitrary-precision naturals, integers, and rationals built on a
//! canonical word-sequence digit kernel.
//!
//! ## Features
//!
//! - **Canonical magnitudes**: digit sequences with no trailing zero
//!   words, so equality, ordering, and hashing are structural
//! - **Explicit carry propagation**: schoolbook arithmetic written at
//!   the word level, with a double-width type guarding every product
//! - **Always-reduced rationals**: gcd reduction after every operation
//! - **Radix 2–64 text**: one alphabet for parsing and formatting
//! - **Exact float decomposition**: rationals from floats without
//!   rounding
//!
//! ## Quick Start
//!
//! ```rust
//! use numerus::prelude::*;
//!
//! let n: Natural = "123456789123456789".parse().unwrap();
//! let (quotient, remainder) = n.div_rem(&Natural::from(1_000u64)).unwrap();
//! assert_eq!(remainder, Natural::from(789u64));
//! assert_eq!(quotient.to_string(), "123456789123456");
//!
//! let sum = Rational::from_i64(1, 2).unwrap() + Rational::from_i64(1, 3).unwrap();
//! assert_eq!(sum.to_string(), "5/6");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use numerus_core as core;
pub use numerus_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use numerus_core::calc;
    pub use numerus_core::{Natural, NumericError};
    pub use numerus_integers::{Integer, Rational, Sign};
}
