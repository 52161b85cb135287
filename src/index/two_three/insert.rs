//! Insertion: descend to a leaf, absorb or split, promote upward.
//!
//! Each level consumes its node and hands back an [`Insertion`] telling the
//! parent what happened below it. A split is the only outcome the parent has
//! to act on: it absorbs the promoted key (turning `Interior2` into
//! `Interior3`) or, if already full, splits in turn.

use std::cmp::Ordering;

use super::node::Node;
use super::stats::TreeStats;

/// Outcome of inserting into one subtree.
pub(crate) enum Insertion<K> {
    /// The key was already stored; the subtree is returned untouched.
    Present(Node<K>),

    /// The key was stored without the subtree changing height.
    Absorbed(Node<K>),

    /// The subtree overflowed into two halves of equal height.
    ///
    /// Every key in `left` is below `promoted`, every key in `right` above.
    Split {
        left: Node<K>,
        promoted: K,
        right: Node<K>,
    },
}

/// Insert `key` into the subtree rooted at `node`.
pub(crate) fn insert<K: Ord>(node: Node<K>, key: K, stats: &mut TreeStats) -> Insertion<K> {
    match node {
        Node::Leaf1 { key: a } => match key.cmp(&a) {
            Ordering::Equal => Insertion::Present(Node::Leaf1 { key: a }),
            Ordering::Less => Insertion::Absorbed(Node::Leaf2 { keys: [key, a] }),
            Ordering::Greater => Insertion::Absorbed(Node::Leaf2 { keys: [a, key] }),
        },

        Node::Leaf2 { keys: [a, b] } => {
            if key == a || key == b {
                return Insertion::Present(Node::Leaf2 { keys: [a, b] });
            }
            stats.splits += 1;
            let (low, mid, high) = if key < a {
                (key, a, b)
            } else if key < b {
                (a, key, b)
            } else {
                (a, b, key)
            };
            Insertion::Split {
                left: Node::leaf(low),
                promoted: mid,
                right: Node::leaf(high),
            }
        }

        Node::Interior2 {
            key: sep,
            children: [left, right],
        } => match key.cmp(&sep) {
            Ordering::Equal => Insertion::Present(Node::Interior2 {
                key: sep,
                children: [left, right],
            }),
            Ordering::Less => match insert(*left, key, stats) {
                Insertion::Present(left) => Insertion::Present(Node::binary(sep, left, *right)),
                Insertion::Absorbed(left) => Insertion::Absorbed(Node::binary(sep, left, *right)),
                Insertion::Split {
                    left: a,
                    promoted,
                    right: b,
                } => Insertion::Absorbed(Node::Interior3 {
                    keys: [promoted, sep],
                    children: [Box::new(a), Box::new(b), right],
                }),
            },
            Ordering::Greater => match insert(*right, key, stats) {
                Insertion::Present(right) => Insertion::Present(Node::binary(sep, *left, right)),
                Insertion::Absorbed(right) => Insertion::Absorbed(Node::binary(sep, *left, right)),
                Insertion::Split {
                    left: a,
                    promoted,
                    right: b,
                } => Insertion::Absorbed(Node::Interior3 {
                    keys: [sep, promoted],
                    children: [left, Box::new(a), Box::new(b)],
                }),
            },
        },

        Node::Interior3 {
            keys: [k1, k2],
            children: [c0, c1, c2],
        } => {
            if key == k1 || key == k2 {
                return Insertion::Present(Node::Interior3 {
                    keys: [k1, k2],
                    children: [c0, c1, c2],
                });
            }

            if key < k1 {
                match insert(*c0, key, stats) {
                    Insertion::Present(c0) => Insertion::Present(ternary(k1, k2, c0, *c1, *c2)),
                    Insertion::Absorbed(c0) => Insertion::Absorbed(ternary(k1, k2, c0, *c1, *c2)),
                    Insertion::Split {
                        left: a,
                        promoted,
                        right: b,
                    } => {
                        stats.splits += 1;
                        Insertion::Split {
                            left: Node::binary(promoted, a, b),
                            promoted: k1,
                            right: Node::binary(k2, *c1, *c2),
                        }
                    }
                }
            } else if key < k2 {
                match insert(*c1, key, stats) {
                    Insertion::Present(c1) => Insertion::Present(ternary(k1, k2, *c0, c1, *c2)),
                    Insertion::Absorbed(c1) => Insertion::Absorbed(ternary(k1, k2, *c0, c1, *c2)),
                    Insertion::Split {
                        left: a,
                        promoted,
                        right: b,
                    } => {
                        stats.splits += 1;
                        Insertion::Split {
                            left: Node::binary(k1, *c0, a),
                            promoted,
                            right: Node::binary(k2, b, *c2),
                        }
                    }
                }
            } else {
                match insert(*c2, key, stats) {
                    Insertion::Present(c2) => Insertion::Present(ternary(k1, k2, *c0, *c1, c2)),
                    Insertion::Absorbed(c2) => Insertion::Absorbed(ternary(k1, k2, *c0, *c1, c2)),
                    Insertion::Split {
                        left: a,
                        promoted,
                        right: b,
                    } => {
                        stats.splits += 1;
                        Insertion::Split {
                            left: Node::binary(k1, *c0, *c1),
                            promoted: k2,
                            right: Node::binary(promoted, a, b),
                        }
                    }
                }
            }
        }
    }
}

fn ternary<K>(k1: K, k2: K, c0: Node<K>, c1: Node<K>, c2: Node<K>) -> Node<K> {
    Node::Interior3 {
        keys: [k1, k2],
        children: [Box::new(c0), Box::new(c1), Box::new(c2)],
    }
}
