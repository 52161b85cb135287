//! twothree - A self-balancing 2-3 tree with explicit restructuring.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            twothree                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐    │
//! │  │  Shared Access           │  │  Rendering (display/)    │    │
//! │  │  (concurrency/)          │  │  dot digraph + listing   │    │
//! │  │  SharedTree = RwLock     │  │                          │    │
//! │  └──────────────────────────┘  └──────────────────────────┘    │
//! │                 ↓                            ↓                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Index Layer (index/two_three/)               │   │
//! │  │   TwoThreeTree: insert / remove / clear / traverse      │   │
//! │  │   Node = Leaf1 | Leaf2 | Interior2 | Interior3          │   │
//! │  │   split + promote  │  rotate  │  merge + collapse       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Common (common/) - config, Error, Result        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (Error, config)
//! - [`index`] - The 2-3 tree, its node shapes and traversals
//! - [`concurrency`] - Lock-guarded shared handle
//! - [`display`] - Graphviz and text renderings
//!
//! # Quick Start
//! ```
//! use twothree::{Order, TwoThreeTree};
//!
//! let mut tree = TwoThreeTree::new();
//! tree.insert(10);
//! tree.insert(20);
//! tree.insert(30);
//!
//! let mut keys = Vec::new();
//! tree.traverse(Order::In, |visit| {
//!     if let Some(key) = visit.key() {
//!         keys.push(*key);
//!     }
//! });
//! assert_eq!(keys, vec![10, 20, 30]);
//! ```

pub mod common;
pub mod concurrency;
pub mod display;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, Result};

pub use concurrency::SharedTree;
pub use index::two_three::{Keys, Node, Order, Shape, Traversal, TreeStats, TwoThreeTree, Visit};
