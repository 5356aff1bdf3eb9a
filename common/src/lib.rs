//! The two math-library type families that `mathcheck` compares.
//!
//! Both describe the same quantities but are laid out independently:
//! [`structs::reference`] exposes letter-named fields and a call-style matrix
//! accessor, [`structs::candidate`] adds index operators on top of its own
//! field names.

pub mod structs;
