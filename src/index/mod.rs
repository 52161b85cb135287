//! Index structures.
//!
//! - [`two_three`] - In-memory 2-3 tree

pub mod two_three;
