//! Lock-guarded handle to a shared 2-3 tree.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::index::two_three::{Order, TwoThreeTree};

/// A cloneable handle to one tree behind a reader-writer lock.
///
/// # Thread Safety
/// - Mutations (`insert`, `remove`, `clear`, `write`) take the write lock
/// - Queries (`contains`, `len`, `read`, `snapshot`) share the read lock
/// - Every call holds its lock until the operation has completed, so no
///   caller ever observes a tree mid-split or mid-merge
///
/// # Example
/// ```
/// use twothree::{Order, SharedTree};
///
/// let tree = SharedTree::new();
/// let writer = tree.clone();
/// std::thread::spawn(move || {
///     writer.insert(3);
///     writer.insert(1);
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(tree.snapshot(Order::In), vec![1, 3]);
/// ```
pub struct SharedTree<K> {
    inner: Arc<RwLock<TwoThreeTree<K>>>,
}

impl<K> SharedTree<K> {
    /// Create a handle to a new empty tree.
    pub fn new() -> Self {
        Self::from_tree(TwoThreeTree::new())
    }

    /// Take ownership of an existing tree.
    pub fn from_tree(tree: TwoThreeTree<K>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(tree)),
        }
    }

    /// Remove every key.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Run `f` with shared access to the tree.
    pub fn read<R>(&self, f: impl FnOnce(&TwoThreeTree<K>) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Run `f` with exclusive access to the tree.
    pub fn write<R>(&self, f: impl FnOnce(&mut TwoThreeTree<K>) -> R) -> R {
        f(&mut *self.inner.write())
    }
}

impl<K: Ord> SharedTree<K> {
    /// Insert `key`, returning `false` if it was already stored.
    pub fn insert(&self, key: K) -> bool {
        self.inner.write().insert(key)
    }

    /// Remove `key`, returning `false` if it was not stored.
    pub fn remove(&self, key: &K) -> bool {
        self.inner.write().remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.read().contains(key)
    }
}

impl<K: Clone> SharedTree<K> {
    /// Copy out the keys of one traversal.
    ///
    /// The copy is taken while the read lock is held, so later mutations
    /// never show up in it. Pre- and post-order list each node's keys together.
    pub fn snapshot(&self, order: Order) -> Vec<K> {
        let tree = self.inner.read();
        let mut keys = Vec::with_capacity(tree.len());
        for visit in tree.visits(order) {
            match visit.key() {
                Some(key) => keys.push(key.clone()),
                None => keys.extend(visit.node().keys().iter().cloned()),
            }
        }
        keys
    }
}

impl<K> Clone for SharedTree<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K> Default for SharedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> From<TwoThreeTree<K>> for SharedTree<K> {
    fn from(tree: TwoThreeTree<K>) -> Self {
        Self::from_tree(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_shared_basic() {
        let tree = SharedTree::new();
        assert!(tree.insert(2));
        assert!(!tree.insert(2));
        assert!(tree.contains(&2));
        assert_eq!(tree.len(), 1);

        assert!(tree.remove(&2));
        assert!(tree.is_empty());
    }

    #[test]
    fn test_concurrent_inserts() {
        let tree = SharedTree::new();
        let mut handles = vec![];

        for t in 0..4 {
            let tree = tree.clone();
            handles.push(thread::spawn(move || {
                for i in 0..250 {
                    tree.insert(t * 250 + i);
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(tree.len(), 1000);
        tree.read(|t| t.validate()).unwrap();
        assert_eq!(tree.snapshot(Order::In), (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let tree: SharedTree<i32> = (1..=5).collect::<TwoThreeTree<_>>().into();

        let before = tree.snapshot(Order::In);
        tree.remove(&3);
        tree.insert(6);

        assert_eq!(before, vec![1, 2, 3, 4, 5]);
        assert_eq!(tree.snapshot(Order::In), vec![1, 2, 4, 5, 6]);
    }

    #[test]
    fn test_snapshot_preorder_lists_node_keys() {
        let tree: SharedTree<i32> = [10, 20, 30].into_iter().collect::<TwoThreeTree<_>>().into();
        assert_eq!(tree.snapshot(Order::Pre), vec![20, 10, 30]);
        assert_eq!(tree.snapshot(Order::Post), vec![10, 30, 20]);
    }

    #[test]
    fn test_write_closure() {
        let tree = SharedTree::new();
        let inserted = tree.write(|t| (0..10).filter(|&k| t.insert(k)).count());
        assert_eq!(inserted, 10);

        tree.clear();
        assert!(tree.is_empty());
    }
}
