//! Deletion: reduce to a leaf removal, then repair underflow bottom-up.
//!
//! A key found in an interior node is replaced by its in-order successor,
//! which is then removed from the leftmost leaf of the right subtree. An
//! emptied node comes back to its parent as [`Shrunk::Underflow`], carrying
//! the one subtree it still owns. The parent first tries to rotate a key in
//! from an adjacent two-key sibling and only merges when no sibling can
//! spare one. A merge takes a key away from the parent, so only a parent
//! with a single key can underflow in turn.

use std::cmp::Ordering;

use super::node::Node;
use super::stats::TreeStats;

/// Outcome of removing a key from one subtree.
pub(crate) enum Removal<K> {
    /// The key is not in this subtree; it is returned untouched.
    Absent(Node<K>),

    /// The key was removed.
    Removed(Shrunk<K>),
}

/// State of a subtree after a key left it.
pub(crate) enum Shrunk<K> {
    /// Still a well-formed subtree of the original height.
    Balanced(Node<K>),

    /// The subtree root lost its only key.
    ///
    /// Holds the single child that node still owned, one level shorter
    /// than its siblings, or `None` when an emptied leaf vanished.
    Underflow(Option<Box<Node<K>>>),
}

/// Result of filling a hole from one sibling through their separator.
enum Repair<K> {
    /// The sibling spared a key; both slots are filled again.
    Rotated {
        left: Node<K>,
        separator: K,
        right: Node<K>,
    },

    /// The hole, the separator and the sibling fused into one node.
    Merged(Node<K>),
}

/// Remove `key` from the subtree rooted at `node`.
pub(crate) fn remove<K: Ord>(node: Node<K>, key: &K, stats: &mut TreeStats) -> Removal<K> {
    match node {
        Node::Leaf1 { key: a } => {
            if *key == a {
                Removal::Removed(Shrunk::Underflow(None))
            } else {
                Removal::Absent(Node::Leaf1 { key: a })
            }
        }

        Node::Leaf2 { keys: [a, b] } => {
            if *key == a {
                Removal::Removed(Shrunk::Balanced(Node::leaf(b)))
            } else if *key == b {
                Removal::Removed(Shrunk::Balanced(Node::leaf(a)))
            } else {
                Removal::Absent(Node::Leaf2 { keys: [a, b] })
            }
        }

        Node::Interior2 {
            key: sep,
            children: [left, right],
        } => match key.cmp(&sep) {
            Ordering::Less => match remove(*left, key, stats) {
                Removal::Absent(left) => Removal::Absent(Node::binary(sep, left, *right)),
                Removal::Removed(left) => {
                    Removal::Removed(settle_binary_left(sep, left, *right, stats))
                }
            },
            Ordering::Greater => match remove(*right, key, stats) {
                Removal::Absent(right) => Removal::Absent(Node::binary(sep, *left, right)),
                Removal::Removed(right) => {
                    Removal::Removed(settle_binary_right(sep, *left, right, stats))
                }
            },
            Ordering::Equal => {
                let (successor, right) = remove_min(*right, stats);
                Removal::Removed(settle_binary_right(successor, *left, right, stats))
            }
        },

        Node::Interior3 {
            keys: [k1, k2],
            children: [c0, c1, c2],
        } => {
            if *key == k1 {
                let (successor, c1) = remove_min(*c1, stats);
                Removal::Removed(settle_middle([successor, k2], *c0, c1, *c2, stats))
            } else if *key == k2 {
                let (successor, c2) = remove_min(*c2, stats);
                Removal::Removed(settle_last([k1, successor], *c0, *c1, c2, stats))
            } else if *key < k1 {
                match remove(*c0, key, stats) {
                    Removal::Absent(c0) => Removal::Absent(ternary([k1, k2], c0, *c1, *c2)),
                    Removal::Removed(c0) => {
                        Removal::Removed(settle_first([k1, k2], c0, *c1, *c2, stats))
                    }
                }
            } else if *key < k2 {
                match remove(*c1, key, stats) {
                    Removal::Absent(c1) => Removal::Absent(ternary([k1, k2], *c0, c1, *c2)),
                    Removal::Removed(c1) => {
                        Removal::Removed(settle_middle([k1, k2], *c0, c1, *c2, stats))
                    }
                }
            } else {
                match remove(*c2, key, stats) {
                    Removal::Absent(c2) => Removal::Absent(ternary([k1, k2], *c0, *c1, c2)),
                    Removal::Removed(c2) => {
                        Removal::Removed(settle_last([k1, k2], *c0, *c1, c2, stats))
                    }
                }
            }
        }
    }
}

/// Remove and return the smallest key of the subtree rooted at `node`.
pub(crate) fn remove_min<K: Ord>(node: Node<K>, stats: &mut TreeStats) -> (K, Shrunk<K>) {
    match node {
        Node::Leaf1 { key } => (key, Shrunk::Underflow(None)),
        Node::Leaf2 { keys: [a, b] } => (a, Shrunk::Balanced(Node::leaf(b))),
        Node::Interior2 {
            key,
            children: [left, right],
        } => {
            let (min, left) = remove_min(*left, stats);
            (min, settle_binary_left(key, left, *right, stats))
        }
        Node::Interior3 {
            keys,
            children: [c0, c1, c2],
        } => {
            let (min, c0) = remove_min(*c0, stats);
            (min, settle_first(keys, c0, *c1, *c2, stats))
        }
    }
}

// ============================================================================
// Parent-side repair
// ============================================================================

fn settle_binary_left<K>(
    sep: K,
    left: Shrunk<K>,
    right: Node<K>,
    stats: &mut TreeStats,
) -> Shrunk<K> {
    match left {
        Shrunk::Balanced(left) => Shrunk::Balanced(Node::binary(sep, left, right)),
        Shrunk::Underflow(hole) => match fill_from_right(hole, sep, right, stats) {
            Repair::Rotated {
                left,
                separator,
                right,
            } => Shrunk::Balanced(Node::binary(separator, left, right)),
            Repair::Merged(merged) => Shrunk::Underflow(Some(Box::new(merged))),
        },
    }
}

fn settle_binary_right<K>(
    sep: K,
    left: Node<K>,
    right: Shrunk<K>,
    stats: &mut TreeStats,
) -> Shrunk<K> {
    match right {
        Shrunk::Balanced(right) => Shrunk::Balanced(Node::binary(sep, left, right)),
        Shrunk::Underflow(hole) => match fill_from_left(left, sep, hole, stats) {
            Repair::Rotated {
                left,
                separator,
                right,
            } => Shrunk::Balanced(Node::binary(separator, left, right)),
            Repair::Merged(merged) => Shrunk::Underflow(Some(Box::new(merged))),
        },
    }
}

fn settle_first<K>(
    [k1, k2]: [K; 2],
    c0: Shrunk<K>,
    c1: Node<K>,
    c2: Node<K>,
    stats: &mut TreeStats,
) -> Shrunk<K> {
    let node = match c0 {
        Shrunk::Balanced(c0) => ternary([k1, k2], c0, c1, c2),
        Shrunk::Underflow(hole) => match fill_from_right(hole, k1, c1, stats) {
            Repair::Rotated {
                left,
                separator,
                right,
            } => ternary([separator, k2], left, right, c2),
            Repair::Merged(merged) => Node::binary(k2, merged, c2),
        },
    };
    Shrunk::Balanced(node)
}

/// The middle child borrows from its left sibling when it can, then from
/// its right sibling, and otherwise merges to the left.
fn settle_middle<K>(
    [k1, k2]: [K; 2],
    c0: Node<K>,
    c1: Shrunk<K>,
    c2: Node<K>,
    stats: &mut TreeStats,
) -> Shrunk<K> {
    let node = match c1 {
        Shrunk::Balanced(c1) => ternary([k1, k2], c0, c1, c2),
        Shrunk::Underflow(hole) if c0.is_full() || !c2.is_full() => {
            match fill_from_left(c0, k1, hole, stats) {
                Repair::Rotated {
                    left,
                    separator,
                    right,
                } => ternary([separator, k2], left, right, c2),
                Repair::Merged(merged) => Node::binary(k2, merged, c2),
            }
        }
        Shrunk::Underflow(hole) => match fill_from_right(hole, k2, c2, stats) {
            Repair::Rotated {
                left,
                separator,
                right,
            } => ternary([k1, separator], c0, left, right),
            Repair::Merged(merged) => Node::binary(k1, c0, merged),
        },
    };
    Shrunk::Balanced(node)
}

fn settle_last<K>(
    [k1, k2]: [K; 2],
    c0: Node<K>,
    c1: Node<K>,
    c2: Shrunk<K>,
    stats: &mut TreeStats,
) -> Shrunk<K> {
    let node = match c2 {
        Shrunk::Balanced(c2) => ternary([k1, k2], c0, c1, c2),
        Shrunk::Underflow(hole) => match fill_from_left(c1, k2, hole, stats) {
            Repair::Rotated {
                left,
                separator,
                right,
            } => ternary([k1, separator], c0, left, right),
            Repair::Merged(merged) => Node::binary(k1, c0, merged),
        },
    };
    Shrunk::Balanced(node)
}

// ============================================================================
// Sibling repair
// ============================================================================

/// Fill a hole whose right sibling is `sibling`, separated by `sep`.
///
/// Panics if the hole and the sibling disagree on height, which would mean
/// the leaf-depth invariant was already broken.
fn fill_from_right<K>(
    hole: Option<Box<Node<K>>>,
    sep: K,
    sibling: Node<K>,
    stats: &mut TreeStats,
) -> Repair<K> {
    let repair = match (hole, sibling) {
        (None, Node::Leaf1 { key }) => Repair::Merged(Node::Leaf2 { keys: [sep, key] }),
        (None, Node::Leaf2 { keys: [a, b] }) => Repair::Rotated {
            left: Node::leaf(sep),
            separator: a,
            right: Node::leaf(b),
        },
        (
            Some(orphan),
            Node::Interior2 {
                key,
                children: [c0, c1],
            },
        ) => Repair::Merged(Node::Interior3 {
            keys: [sep, key],
            children: [orphan, c0, c1],
        }),
        (
            Some(orphan),
            Node::Interior3 {
                keys: [a, b],
                children: [c0, c1, c2],
            },
        ) => Repair::Rotated {
            left: Node::Interior2 {
                key: sep,
                children: [orphan, c0],
            },
            separator: a,
            right: Node::Interior2 {
                key: b,
                children: [c1, c2],
            },
        },
        _ => unreachable!("underflowed subtree and its right sibling differ in height"),
    };
    record(&repair, stats);
    repair
}

/// Fill a hole whose left sibling is `sibling`, separated by `sep`.
fn fill_from_left<K>(
    sibling: Node<K>,
    sep: K,
    hole: Option<Box<Node<K>>>,
    stats: &mut TreeStats,
) -> Repair<K> {
    let repair = match (sibling, hole) {
        (Node::Leaf1 { key }, None) => Repair::Merged(Node::Leaf2 { keys: [key, sep] }),
        (Node::Leaf2 { keys: [a, b] }, None) => Repair::Rotated {
            left: Node::leaf(a),
            separator: b,
            right: Node::leaf(sep),
        },
        (
            Node::Interior2 {
                key,
                children: [c0, c1],
            },
            Some(orphan),
        ) => Repair::Merged(Node::Interior3 {
            keys: [key, sep],
            children: [c0, c1, orphan],
        }),
        (
            Node::Interior3 {
                keys: [a, b],
                children: [c0, c1, c2],
            },
            Some(orphan),
        ) => Repair::Rotated {
            left: Node::Interior2 {
                key: a,
                children: [c0, c1],
            },
            separator: b,
            right: Node::Interior2 {
                key: sep,
                children: [c2, orphan],
            },
        },
        _ => unreachable!("underflowed subtree and its left sibling differ in height"),
    };
    record(&repair, stats);
    repair
}

fn record<K>(repair: &Repair<K>, stats: &mut TreeStats) {
    match repair {
        Repair::Rotated { .. } => stats.rotations += 1,
        Repair::Merged(_) => stats.merges += 1,
    }
}

fn ternary<K>([k1, k2]: [K; 2], c0: Node<K>, c1: Node<K>, c2: Node<K>) -> Node<K> {
    Node::Interior3 {
        keys: [k1, k2],
        children: [Box::new(c0), Box::new(c1), Box::new(c2)],
    }
}
