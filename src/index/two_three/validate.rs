//! Structural invariant checks.

use crate::common::{Error, Result};

use super::node::Node;

/// Summary of a checked subtree.
struct Checked {
    leaf_depth: usize,
    keys: usize,
}

/// Check a whole tree: equal leaf depth, sorted keys, separators respected,
/// and a recorded length that matches the keys actually stored.
pub(crate) fn validate<K: Ord>(root: Option<&Node<K>>, recorded: usize) -> Result<()> {
    let counted = match root {
        Some(root) => check(root, 0, None, None)?.keys,
        None => 0,
    };

    if counted != recorded {
        return Err(Error::LengthMismatch { recorded, counted });
    }
    Ok(())
}

/// Every key of `node` must lie strictly between `lower` and `upper`.
fn check<K: Ord>(
    node: &Node<K>,
    depth: usize,
    lower: Option<&K>,
    upper: Option<&K>,
) -> Result<Checked> {
    let keys = node.keys();

    let sorted = keys.windows(2).all(|pair| pair[0] < pair[1]);
    let above = lower.map_or(true, |bound| keys[0] > *bound);
    let below = upper.map_or(true, |bound| keys[keys.len() - 1] < *bound);
    if !(sorted && above && below) {
        return Err(Error::KeyOrder { depth });
    }

    let children = node.children();
    if children.is_empty() {
        return Ok(Checked {
            leaf_depth: depth,
            keys: keys.len(),
        });
    }

    let mut leaf_depth = None;
    let mut total = keys.len();
    for (i, child) in children.iter().enumerate() {
        let lo = if i == 0 { lower } else { keys.get(i - 1) };
        let hi = keys.get(i).or(upper);
        let sub = check(child, depth + 1, lo, hi)?;

        match leaf_depth {
            None => leaf_depth = Some(sub.leaf_depth),
            Some(expected) if expected != sub.leaf_depth => {
                return Err(Error::UnevenLeafDepth {
                    expected,
                    found: sub.leaf_depth,
                });
            }
            Some(_) => {}
        }
        total += sub.keys;
    }

    Ok(Checked {
        leaf_depth: leaf_depth.unwrap_or(depth),
        keys: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_tree() {
        let root = Node::binary(20, Node::Leaf2 { keys: [5, 10] }, Node::leaf(30));
        assert_eq!(validate(Some(&root), 4), Ok(()));
        assert_eq!(validate::<i32>(None, 0), Ok(()));
    }

    #[test]
    fn test_uneven_leaves_detected() {
        let root = Node::binary(
            20,
            Node::leaf(10),
            Node::binary(30, Node::leaf(25), Node::leaf(35)),
        );
        assert_eq!(
            validate(Some(&root), 5),
            Err(Error::UnevenLeafDepth {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_separator_violation_detected() {
        // 25 sits left of separator 20.
        let root = Node::binary(20, Node::leaf(25), Node::leaf(30));
        assert_eq!(validate(Some(&root), 3), Err(Error::KeyOrder { depth: 1 }));
    }

    #[test]
    fn test_unsorted_node_detected() {
        let root = Node::Leaf2 { keys: [9, 3] };
        assert_eq!(validate(Some(&root), 2), Err(Error::KeyOrder { depth: 0 }));
    }

    #[test]
    fn test_length_mismatch_detected() {
        let root = Node::leaf(1);
        assert_eq!(
            validate(Some(&root), 2),
            Err(Error::LengthMismatch {
                recorded: 2,
                counted: 1
            })
        );
    }
}
