//! Lazy traversals over a 2-3 tree.
//!
//! [`Traversal`] walks the tree with an explicit stack of frames, so a
//! traversal never recurses and can be dropped half way. Every call to
//! [`TwoThreeTree::visits`](super::TwoThreeTree::visits) starts a fresh walk.

use std::iter::FusedIterator;

use super::node::Node;

/// Order in which a traversal visits a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node first, then each child left to right.
    Pre,
    /// Keys in increasing order, interleaved with child descents.
    In,
    /// Each child left to right, then the node.
    Post,
}

/// One step of a traversal.
///
/// Pre- and post-order yield whole nodes. In-order yields one key slot at a
/// time, so a two-key node is visited twice.
#[derive(Debug)]
pub enum Visit<'a, K> {
    Node(&'a Node<K>),
    Key { node: &'a Node<K>, index: usize },
}

// Derive would demand `K: Clone`.
impl<K> Clone for Visit<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Visit<'_, K> {}

impl<'a, K> Visit<'a, K> {
    /// The node being visited.
    #[inline]
    pub fn node(&self) -> &'a Node<K> {
        match *self {
            Visit::Node(node) | Visit::Key { node, .. } => node,
        }
    }

    /// The key of an in-order visit, `None` for whole-node visits.
    #[inline]
    pub fn key(&self) -> Option<&'a K> {
        match *self {
            Visit::Node(_) => None,
            Visit::Key { node, index } => node.keys().get(index),
        }
    }
}

struct Frame<'a, K> {
    node: &'a Node<K>,
    step: usize,
}

/// Iterator over the visits of one traversal.
pub struct Traversal<'a, K> {
    order: Order,
    stack: Vec<Frame<'a, K>>,
}

impl<'a, K> Traversal<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, order: Order) -> Self {
        let stack = root.map(|node| Frame { node, step: 0 }).into_iter().collect();
        Self { order, stack }
    }

    /// The order this traversal walks in.
    pub fn order(&self) -> Order {
        self.order
    }

    fn push(&mut self, node: &'a Node<K>) {
        self.stack.push(Frame { node, step: 0 });
    }
}

impl<'a, K> Iterator for Traversal<'a, K> {
    type Item = Visit<'a, K>;

    fn next(&mut self) -> Option<Visit<'a, K>> {
        loop {
            let (node, step) = {
                let frame = self.stack.last_mut()?;
                let step = frame.step;
                frame.step += 1;
                (frame.node, step)
            };
            let children = node.children();

            match self.order {
                Order::Pre => {
                    if step == 0 {
                        return Some(Visit::Node(node));
                    }
                    match children.get(step - 1) {
                        Some(child) => self.push(child),
                        None => {
                            self.stack.pop();
                        }
                    }
                }
                Order::Post => match children.get(step) {
                    Some(child) => self.push(child),
                    None => {
                        self.stack.pop();
                        return Some(Visit::Node(node));
                    }
                },
                Order::In => {
                    // Even steps descend into child step/2, odd steps yield key step/2.
                    let slot = step / 2;
                    if step > 2 * node.keys().len() {
                        self.stack.pop();
                    } else if step % 2 == 1 {
                        return Some(Visit::Key { node, index: slot });
                    } else if let Some(child) = children.get(slot) {
                        self.push(child);
                    }
                }
            }
        }
    }
}

impl<K> FusedIterator for Traversal<'_, K> {}

/// In-order iterator over the keys of a tree, smallest first.
pub struct Keys<'a, K> {
    inner: Traversal<'a, K>,
}

impl<'a, K> Keys<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            inner: Traversal::new(root, Order::In),
        }
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.find_map(|visit| visit.key())
    }
}

impl<K> FusedIterator for Keys<'_, K> {}
