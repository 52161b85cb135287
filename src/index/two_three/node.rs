//! Node shapes of a 2-3 tree.
//!
//! Every node is one of four shapes. The shape is the enum variant itself,
//! so a node can never claim more keys or children than it actually holds.
//!
//! ```text
//!   Leaf1        Leaf2          Interior2          Interior3
//!   [a]          [a|b]            [a]               [a|b]
//!                                /   \             /  |  \
//!                               L     R           L   M   R
//! ```

use std::fmt;
use std::slice;

/// Fieldless tag naming a node's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// One key, no children.
    Leaf1,
    /// Two keys, no children.
    Leaf2,
    /// One key, two children.
    Interior2,
    /// Two keys, three children.
    Interior3,
}

impl Shape {
    /// Number of keys a node of this shape holds.
    #[inline]
    pub fn key_count(self) -> usize {
        match self {
            Shape::Leaf1 | Shape::Interior2 => 1,
            Shape::Leaf2 | Shape::Interior3 => 2,
        }
    }

    /// Number of children a node of this shape holds.
    #[inline]
    pub fn child_count(self) -> usize {
        match self {
            Shape::Leaf1 | Shape::Leaf2 => 0,
            Shape::Interior2 => 2,
            Shape::Interior3 => 3,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::Leaf1 => "Leaf1",
            Shape::Leaf2 => "Leaf2",
            Shape::Interior2 => "Interior2",
            Shape::Interior3 => "Interior3",
        };
        f.write_str(name)
    }
}

/// A node of a 2-3 tree.
///
/// Children are exclusively owned. Keys are strictly increasing inside a
/// node, and each child's subtree lies strictly between the keys around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<K> {
    Leaf1 {
        key: K,
    },
    Leaf2 {
        keys: [K; 2],
    },
    Interior2 {
        key: K,
        children: [Box<Node<K>>; 2],
    },
    Interior3 {
        keys: [K; 2],
        children: [Box<Node<K>>; 3],
    },
}

impl<K> Node<K> {
    /// The shape tag of this node.
    #[inline]
    pub fn shape(&self) -> Shape {
        match self {
            Node::Leaf1 { .. } => Shape::Leaf1,
            Node::Leaf2 { .. } => Shape::Leaf2,
            Node::Interior2 { .. } => Shape::Interior2,
            Node::Interior3 { .. } => Shape::Interior3,
        }
    }

    /// The node's keys in increasing order (one or two).
    pub fn keys(&self) -> &[K] {
        match self {
            Node::Leaf1 { key } | Node::Interior2 { key, .. } => slice::from_ref(key),
            Node::Leaf2 { keys } | Node::Interior3 { keys, .. } => keys,
        }
    }

    /// The node's children left to right (none, two, or three).
    pub fn children(&self) -> &[Box<Node<K>>] {
        match self {
            Node::Leaf1 { .. } | Node::Leaf2 { .. } => &[],
            Node::Interior2 { children, .. } => children,
            Node::Interior3 { children, .. } => children,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf1 { .. } | Node::Leaf2 { .. })
    }

    /// True for the two-key shapes, which can give a key away to a sibling.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.shape().key_count() == 2
    }

    /// Smallest key stored in this subtree.
    pub fn min_key(&self) -> &K {
        let mut node = self;
        while let Some(first) = node.children().first() {
            node = first;
        }
        &node.keys()[0]
    }

    /// Largest key stored in this subtree.
    pub fn max_key(&self) -> &K {
        let mut node = self;
        while let Some(last) = node.children().last() {
            node = last;
        }
        let keys = node.keys();
        &keys[keys.len() - 1]
    }

    pub(crate) fn leaf(key: K) -> Self {
        Node::Leaf1 { key }
    }

    pub(crate) fn binary(key: K, left: Node<K>, right: Node<K>) -> Self {
        Node::Interior2 {
            key,
            children: [Box::new(left), Box::new(right)],
        }
    }
}
