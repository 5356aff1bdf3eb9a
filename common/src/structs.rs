//! Basic structures such as vectors and 4x4 matrices

pub mod candidate;
pub mod reference;
