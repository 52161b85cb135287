//! Error types for the 2-3 tree.
//!
//! Tree mutations are total and never fail. Errors only come out of the
//! invariant checker and the text renderers.

use std::fmt;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in this crate.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Two leaves sit at different depths.
    #[error("leaf at depth {found}, expected every leaf at depth {expected}")]
    UnevenLeafDepth { expected: usize, found: usize },

    /// A key is out of order inside a node, or crosses a separator of an ancestor.
    #[error("key ordering violated at depth {depth}")]
    KeyOrder { depth: usize },

    /// The cached key count does not match the keys actually stored.
    #[error("tree records {recorded} keys but holds {counted}")]
    LengthMismatch { recorded: usize, counted: usize },

    /// Writing rendered output to a `fmt::Write` sink failed.
    #[error("formatting error: {0}")]
    Format(#[from] fmt::Error),
}
