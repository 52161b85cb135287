//! The 2-3 tree handle.

use std::fmt;

use log::{debug, trace};

use crate::common::Result;

use super::insert::{self, Insertion};
use super::node::Node;
use super::remove::{self, Removal, Shrunk};
use super::stats::TreeStats;
use super::traversal::{Keys, Order, Traversal, Visit};
use super::validate;

/// A self-balancing search tree whose nodes hold one or two keys.
///
/// All leaves always sit at the same depth. Height only changes at the
/// root: a split that reaches the root adds a level, and a merge that empties
/// the root removes one.
///
/// # Example
/// ```
/// use twothree::{Order, TwoThreeTree};
///
/// let mut tree = TwoThreeTree::new();
/// for key in [1, 2, 3, 4, 5] {
///     assert!(tree.insert(key));
/// }
/// assert!(!tree.insert(3)); // already present
///
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// assert_eq!(tree.height(), 2);
///
/// assert!(tree.remove(&4));
/// assert!(!tree.remove(&4));
/// tree.validate().unwrap();
/// ```
pub struct TwoThreeTree<K> {
    /// `None` for the empty tree.
    root: Option<Box<Node<K>>>,

    /// Number of keys stored.
    len: usize,

    /// Structural event counters.
    stats: TreeStats,
}

impl<K> TwoThreeTree<K> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            stats: TreeStats::new(),
        }
    }

    /// Number of keys stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels: 0 for the empty tree, 1 for a lone leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            height += 1;
            node = current.children().first().map(|child| &**child);
        }
        height
    }

    /// The root node, for read-only inspection of the structure.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Smallest key, if any.
    pub fn min(&self) -> Option<&K> {
        self.root().map(Node::min_key)
    }

    /// Largest key, if any.
    pub fn max(&self) -> Option<&K> {
        self.root().map(Node::max_key)
    }

    /// Counters of splits, rotations and merges since creation or the last reset.
    pub fn stats(&self) -> TreeStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Destroy every node and return to the empty tree.
    ///
    /// Clearing an empty tree does nothing.
    pub fn clear(&mut self) {
        if self.root.is_some() {
            debug!("clearing tree of {} keys, height {}", self.len, self.height());
        }
        self.root = None;
        self.len = 0;
        self.stats.reset();
    }

    // ========================================================================
    // Traversal
    // ========================================================================

    /// Start a lazy traversal in the given order.
    pub fn visits(&self, order: Order) -> Traversal<'_, K> {
        Traversal::new(self.root(), order)
    }

    /// Drive `visitor` over every visit of a traversal in the given order.
    ///
    /// Pre- and post-order pass [`Visit::Node`]; in-order passes one
    /// [`Visit::Key`] per stored key, in increasing order.
    pub fn traverse<F>(&self, order: Order, mut visitor: F)
    where
        F: FnMut(Visit<'_, K>),
    {
        for visit in self.visits(order) {
            visitor(visit);
        }
    }

    /// Call `f` on each node, parent before children.
    pub fn preorder<F: FnMut(&Node<K>)>(&self, mut f: F) {
        self.traverse(Order::Pre, |visit| f(visit.node()));
    }

    /// Call `f` on each key in increasing order.
    pub fn inorder<F: FnMut(&K)>(&self, mut f: F) {
        self.iter().for_each(|key| f(key));
    }

    /// Call `f` on each node, children before parent.
    pub fn postorder<F: FnMut(&Node<K>)>(&self, mut f: F) {
        self.traverse(Order::Post, |visit| f(visit.node()));
    }

    /// Iterate over the keys in increasing order.
    pub fn iter(&self) -> Keys<'_, K> {
        Keys::new(self.root())
    }
}

impl<K: Ord> TwoThreeTree<K> {
    /// Insert `key`, returning `false` if it was already stored.
    pub fn insert(&mut self, key: K) -> bool {
        let root = match self.root.take() {
            Some(root) => *root,
            None => {
                self.root = Some(Box::new(Node::leaf(key)));
                self.len = 1;
                return true;
            }
        };

        let (root, inserted) = match insert::insert(root, key, &mut self.stats) {
            Insertion::Present(root) => (root, false),
            Insertion::Absorbed(root) => (root, true),
            Insertion::Split {
                left,
                promoted,
                right,
            } => {
                self.stats.root_splits += 1;
                let root = Node::binary(promoted, left, right);
                trace!("root split, height now {}", height_of(&root));
                (root, true)
            }
        };

        self.root = Some(Box::new(root));
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Remove `key`, returning `false` if it was not stored.
    pub fn remove(&mut self, key: &K) -> bool {
        let Some(root) = self.root.take() else {
            return false;
        };

        match remove::remove(*root, key, &mut self.stats) {
            Removal::Absent(root) => {
                self.root = Some(Box::new(root));
                false
            }
            Removal::Removed(Shrunk::Balanced(root)) => {
                self.root = Some(Box::new(root));
                self.len -= 1;
                true
            }
            Removal::Removed(Shrunk::Underflow(orphan)) => {
                // The root lost its only key: its single remaining child, if
                // any, becomes the new root one level lower.
                if orphan.is_some() {
                    self.stats.root_collapses += 1;
                }
                self.root = orphan;
                self.len -= 1;
                trace!("root collapsed, height now {}", self.height());
                true
            }
        }
    }

    /// True if `key` is stored.
    pub fn contains(&self, key: &K) -> bool {
        let mut node = self.root();
        while let Some(current) = node {
            let keys = current.keys();
            let slot = match keys.iter().position(|k| key <= k) {
                Some(i) if keys[i] == *key => return true,
                Some(i) => i,
                None => keys.len(),
            };
            node = current.children().get(slot).map(|child| &**child);
        }
        false
    }

    /// Check every structural invariant of the tree.
    ///
    /// # Errors
    /// - `Error::UnevenLeafDepth` if two leaves sit at different depths
    /// - `Error::KeyOrder` if keys are unsorted or cross a separator
    /// - `Error::LengthMismatch` if `len()` disagrees with the stored keys
    pub fn validate(&self) -> Result<()> {
        validate::validate(self.root(), self.len)
    }
}

fn height_of<K>(node: &Node<K>) -> usize {
    1 + node.children().first().map_or(0, |child| height_of(child))
}

impl<K> Default for TwoThreeTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug> fmt::Debug for TwoThreeTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Clone> Clone for TwoThreeTree<K> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
            stats: self.stats,
        }
    }
}

impl<K: Ord> FromIterator<K> for TwoThreeTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for TwoThreeTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a TwoThreeTree<K> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K>;

    fn into_iter(self) -> Keys<'a, K> {
        self.iter()
    }
}
