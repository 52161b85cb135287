//! Structural event counters.

use std::fmt;

/// Counts of the restructuring steps a tree has performed.
///
/// Insertions that fit into a leaf and deletions from a two-key leaf leave
/// every counter untouched; only shape changes that move keys between nodes
/// are recorded.
///
/// # Example
/// ```
/// use twothree::TwoThreeTree;
///
/// let tree: TwoThreeTree<i32> = [10, 20, 30].into_iter().collect();
/// let stats = tree.stats();
/// assert_eq!(stats.splits, 1);
/// assert_eq!(stats.root_splits, 1);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    /// Overfull nodes divided in two, including root splits.
    pub splits: u64,

    /// Splits that reached the root and grew the tree by one level.
    pub root_splits: u64,

    /// Underflows repaired by borrowing a key through the parent separator.
    pub rotations: u64,

    /// Underflows repaired by fusing with a sibling and the separator.
    pub merges: u64,

    /// Merges that emptied the root and shrank the tree by one level.
    pub root_collapses: u64,
}

impl TreeStats {
    /// Create a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of restructuring steps of any kind.
    pub fn restructures(&self) -> u64 {
        self.splits + self.rotations + self.merges
    }

    /// Reset all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ splits: {} (root: {}), rotations: {}, merges: {} (root: {}) }}",
            self.splits, self.root_splits, self.rotations, self.merges, self.root_collapses
        )
    }
}
