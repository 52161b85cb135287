//! Configuration constants for the 2-3 tree.

/// Maximum number of keys a node may hold once an operation completes.
///
/// A node briefly holds three keys while it splits, but that overfull state
/// never outlives the call that created it.
pub const MAX_KEYS: usize = 2;

/// Minimum number of keys every node holds between operations.
///
/// A node that drops below this is an underflow and must be repaired by
/// its parent (rotation or merge).
pub const MIN_KEYS: usize = 1;

/// Maximum number of children of an interior node.
pub const MAX_CHILDREN: usize = MAX_KEYS + 1;

/// Number of values printed per line by a text traversal listing.
pub const LISTING_WIDTH: usize = 16;
