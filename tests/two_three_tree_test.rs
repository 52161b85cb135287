//! 2-3 Tree Tests
//!
//! Fixed scenarios first, then exhaustive sweeps over small key sets that
//! drive deletion through every combination of node shapes.

use twothree::{Node, Order, Shape, TwoThreeTree, Visit};

fn keys(tree: &TwoThreeTree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}

/// Depth of every leaf, found by a pre-order walk over the node structure.
fn leaf_depths(tree: &TwoThreeTree<i32>) -> Vec<usize> {
    fn walk(node: &Node<i32>, depth: usize, out: &mut Vec<usize>) {
        if node.is_leaf() {
            out.push(depth);
        }
        for child in node.children() {
            walk(child, depth + 1, out);
        }
    }

    let mut out = Vec::new();
    if let Some(root) = tree.root() {
        walk(root, 1, &mut out);
    }
    out
}

fn assert_balanced(tree: &TwoThreeTree<i32>) {
    tree.validate().unwrap();
    let depths = leaf_depths(tree);
    assert!(depths.windows(2).all(|w| w[0] == w[1]), "leaf depths {:?}", depths);
    if let Some(&depth) = depths.first() {
        assert_eq!(depth, tree.height());
    }
}

/// All orderings of `items` (Heap's algorithm).
fn permutations(items: &[i32]) -> Vec<Vec<i32>> {
    fn generate(k: usize, items: &mut Vec<i32>, out: &mut Vec<Vec<i32>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        for i in 0..k {
            generate(k - 1, items, out);
            let swap = if k % 2 == 0 { i } else { 0 };
            items.swap(swap, k - 1);
        }
    }

    let mut items = items.to_vec();
    let mut out = Vec::new();
    generate(items.len(), &mut items, &mut out);
    out
}

// ============================================================================
// Scenarios
// ============================================================================

/// Ascending inserts give the minimum height for five keys.
#[test]
fn test_scenario_ascending_five() {
    let mut tree = TwoThreeTree::new();
    for key in 1..=5 {
        assert!(tree.insert(key));
        assert_balanced(&tree);
    }

    assert_eq!(keys(&tree), vec![1, 2, 3, 4, 5]);
    assert_eq!(tree.height(), 2);
}

/// Three inserts split the first leaf under a brand-new root.
#[test]
fn test_scenario_single_interior_root() {
    let tree: TwoThreeTree<i32> = [10, 20, 30].into_iter().collect();

    assert_eq!(keys(&tree), vec![10, 20, 30]);

    let mut interior = 0;
    let mut leaves = 0;
    tree.preorder(|node| {
        if node.is_leaf() {
            leaves += 1;
        } else {
            interior += 1;
        }
    });
    assert_eq!(interior, 1);
    assert_eq!(leaves, 2);

    let root = tree.root().unwrap();
    assert_eq!(root.keys(), &[20]);
    assert_eq!(root.children().len(), 2);
}

/// Deleting an interior separator keeps order and balance.
#[test]
fn test_scenario_delete_separator() {
    let mut tree: TwoThreeTree<i32> = (1..=7).collect();

    let mut separators = Vec::new();
    tree.preorder(|node| {
        if !node.is_leaf() {
            separators.extend_from_slice(node.keys());
        }
    });
    assert!(separators.contains(&4));

    assert!(tree.remove(&4));

    assert_eq!(keys(&tree), vec![1, 2, 3, 5, 6, 7]);
    assert_balanced(&tree);
}

/// Clearing empties every traversal; the tree is usable afterwards.
#[test]
fn test_scenario_clear_then_reuse() {
    let mut tree: TwoThreeTree<i32> = (1..=30).collect();
    tree.clear();

    let mut visits = 0;
    tree.traverse(Order::Pre, |_| visits += 1);
    assert_eq!(visits, 0);

    assert!(tree.insert(42));
    assert_eq!(keys(&tree), vec![42]);
    assert_eq!(tree.root().map(Node::shape), Some(Shape::Leaf1));
}

#[test]
fn test_inorder_visits_each_key_slot() {
    let tree: TwoThreeTree<i32> = [1, 2, 3, 4].into_iter().collect();

    let mut slots = Vec::new();
    tree.traverse(Order::In, |visit| match visit {
        Visit::Key { node, index } => slots.push((node.shape(), index)),
        Visit::Node(_) => panic!("in-order yields key visits only"),
    });

    // [2] over [1] and [3|4]
    assert_eq!(
        slots,
        vec![
            (Shape::Leaf1, 0),
            (Shape::Interior2, 0),
            (Shape::Leaf2, 0),
            (Shape::Leaf2, 1),
        ]
    );
}

#[test]
fn test_traversals_are_restartable() {
    let mut tree: TwoThreeTree<i32> = (1..=12).collect();

    let first: Vec<_> = tree.visits(Order::Post).map(|v| v.node().keys().to_vec()).collect();
    let second: Vec<_> = tree.visits(Order::Post).map(|v| v.node().keys().to_vec()).collect();
    assert_eq!(first, second);

    // Stopping part way leaves nothing behind.
    assert_eq!(tree.iter().take(3).count(), 3);

    tree.remove(&6);
    assert_eq!(keys(&tree).len(), 11);
}

#[test]
fn test_descending_inserts() {
    let mut tree = TwoThreeTree::new();
    for key in (0..200).rev() {
        tree.insert(key);
    }
    assert_balanced(&tree);
    assert_eq!(keys(&tree), (0..200).collect::<Vec<_>>());
    assert_eq!(tree.len(), 200);
}

#[test]
fn test_height_is_logarithmic() {
    let tree: TwoThreeTree<i32> = (0..1000).collect();
    // A 2-3 tree of height h holds between 2^h - 1 and 3^h - 1 keys.
    let h = tree.height() as u32;
    assert!(2i64.pow(h) - 1 <= 1000);
    assert!(3i64.pow(h) - 1 >= 1000);
}

#[test]
fn test_drain_by_removal_collapses_to_empty() {
    let mut tree: TwoThreeTree<i32> = (0..100).collect();
    for key in 0..100 {
        assert!(tree.remove(&key));
        assert_balanced(&tree);
    }
    assert!(tree.is_empty());
    assert!(tree.stats().root_collapses > 0);
}

// ============================================================================
// Exhaustive sweeps
// ============================================================================

/// Every insertion order of six keys, deleted forwards and backwards.
#[test]
fn test_all_permutations_of_six() {
    let base: Vec<i32> = (1..=6).collect();

    for order in permutations(&base) {
        for reverse in [false, true] {
            let mut tree = TwoThreeTree::new();
            for &key in &order {
                assert!(tree.insert(key));
                assert_balanced(&tree);
            }
            assert_eq!(keys(&tree), base);

            let mut remaining = base.clone();
            let deletions: Vec<i32> = if reverse {
                order.iter().rev().copied().collect()
            } else {
                order.clone()
            };
            for key in deletions {
                assert!(tree.remove(&key));
                remaining.retain(|&k| k != key);
                assert_balanced(&tree);
                assert_eq!(keys(&tree), remaining);
            }
            assert!(tree.is_empty());
        }
    }
}

/// Delete every single key from every tree built from 1..=n.
#[test]
fn test_single_deletions_across_sizes() {
    for n in 1..=60 {
        let source: TwoThreeTree<i32> = (1..=n).collect();

        for key in 1..=n {
            let mut tree = source.clone();
            assert!(tree.remove(&key));
            assert_balanced(&tree);

            let expected: Vec<i32> = (1..=n).filter(|&k| k != key).collect();
            assert_eq!(keys(&tree), expected);
            assert!(!tree.contains(&key));
        }
    }
}

/// Interleaved inserts and removals with a deterministic pseudo-random walk.
#[test]
fn test_interleaved_churn() {
    let mut tree = TwoThreeTree::new();
    let mut reference = std::collections::BTreeSet::new();
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;

    for _ in 0..5000 {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let key = (state % 128) as i32;

        if state & 0x100 == 0 {
            assert_eq!(tree.insert(key), reference.insert(key));
        } else {
            assert_eq!(tree.remove(&key), reference.remove(&key));
        }
        assert_eq!(tree.len(), reference.len());
    }

    assert_balanced(&tree);
    assert!(tree.iter().eq(reference.iter()));
}
