//! Property-based tests for signed integers and rationals.
