//! Text renderings of a tree for inspection.
//!
//! - [`digraph`] - Graphviz dot source of the node structure
//! - [`listing`] - Traversal keys as wrapped text

mod digraph;
mod listing;

pub use digraph::{digraph, write_digraph};
pub use listing::listing;
