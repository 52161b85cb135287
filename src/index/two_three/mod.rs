//! 2-3 tree: a perfectly balanced search tree of one- and two-key nodes.
//!
//! # Structure
//! ```text
//!                  [20|40]                 Interior3
//!                /    |    \
//!            [10]   [30]   [50|60]         leaves, all at one depth
//! ```
//!
//! # Operations
//! - Insert descends to a leaf. A full leaf splits and promotes its middle
//!   key, and splits cascade upward until a node has room. A split of the
//!   root adds a new root.
//! - Remove swaps an interior key with its in-order successor so the key
//!   always leaves a leaf. An emptied node borrows from a two-key sibling
//!   or merges with a one-key sibling and a separator. A merge that empties
//!   the root removes one level.
//! - Traversals are lazy iterators in pre-, in- or post-order.

mod insert;
mod node;
mod remove;
mod stats;
mod traversal;
mod tree;
mod validate;

pub use node::{Node, Shape};
pub use stats::TreeStats;
pub use traversal::{Keys, Order, Traversal, Visit};
pub use tree::TwoThreeTree;
