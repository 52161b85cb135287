//! Plain-text traversal listing.

use std::fmt::Display;

use crate::common::config::LISTING_WIDTH;
use crate::index::two_three::{Order, TwoThreeTree};

/// List the keys of a traversal, separated by spaces, wrapping every
/// [`LISTING_WIDTH`] values.
///
/// In-order lists keys in increasing order. Pre- and post-order list each
/// node's keys together at the node's position in the walk.
///
/// # Example
/// ```
/// use twothree::{display, Order, TwoThreeTree};
///
/// let tree: TwoThreeTree<i32> = [10, 20, 30].into_iter().collect();
/// assert_eq!(display::listing(&tree, Order::In), "10 20 30");
/// assert_eq!(display::listing(&tree, Order::Pre), "20 10 30");
/// ```
pub fn listing<K: Display>(tree: &TwoThreeTree<K>, order: Order) -> String {
    let mut out = String::new();
    let mut count = 0;

    let mut push = |key: &K| {
        if count > 0 {
            out.push(if count % LISTING_WIDTH == 0 { '\n' } else { ' ' });
        }
        out.push_str(&key.to_string());
        count += 1;
    };

    for visit in tree.visits(order) {
        match visit.key() {
            Some(key) => push(key),
            None => visit.node().keys().iter().for_each(&mut push),
        }
    }
    out
}
