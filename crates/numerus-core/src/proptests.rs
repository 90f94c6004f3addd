//! Property-based tests for the digit kernel.
