//! Assertion helpers that check two independent math-library representations
//! of the same value agree within floating-point error.
//!
//! The reference and candidate type families live in the `common` crate. Each
//! `assert_*_eq` function compares every scalar component, reports each one
//! that is off by more than [`approx_eq::ZERO_TOLERANCE`], and fails the
//! calling test once all components have been looked at.

pub use common;

pub mod approx_eq;
pub mod asserts;
