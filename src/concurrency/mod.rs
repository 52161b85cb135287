//! Serialized access to a tree shared between threads.
//!
//! [`TwoThreeTree`](crate::TwoThreeTree) itself is single-threaded. Callers
//! that share one go through [`SharedTree`], which holds a single lock per
//! tree for the duration of every operation.

mod shared_tree;

pub use shared_tree::SharedTree;
