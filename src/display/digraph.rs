//! Graphviz dot rendering.
//!
//! Nodes are numbered in pre-order (`n1` is the root) so the output is
//! stable across runs. Edges leave the parent's south-west, south or
//! south-east port depending on the child's position.

use std::fmt::{self, Display, Write};

use crate::common::Result;
use crate::index::two_three::{Node, TwoThreeTree};

const HEADER: &str = "digraph {\n  bgcolor=transparent; sametail=true;\n  \
node[shape=none, fontcolor=red]; edge[color=gray];\n  \
ROOT [shape=underline, label=\"ROOT\", color=darkkhaki, style=filled, \
fillcolor=khaki, fontcolor=saddlebrown, height=.4, penwidth=12];\n";

const NODE_STYLE: &str = "shape=record, style=filled, fillcolor=beige, fontcolor=black, color=tan";

/// Render the tree as Graphviz dot source.
///
/// # Example
/// ```
/// use twothree::{display, TwoThreeTree};
///
/// let tree: TwoThreeTree<i32> = [10, 20, 30].into_iter().collect();
/// let dot = display::digraph(&tree).unwrap();
/// assert!(dot.contains("n1 [label=\"{20}\""));
/// assert!(dot.contains("n1:sw -> n2:n"));
/// ```
pub fn digraph<K: Display>(tree: &TwoThreeTree<K>) -> Result<String> {
    let mut out = String::new();
    write_digraph(tree, &mut out)?;
    Ok(out)
}

/// Write the Graphviz dot source of the tree into `out`.
///
/// # Errors
/// - `Error::Format` if `out` rejects a write
pub fn write_digraph<K: Display, W: Write>(tree: &TwoThreeTree<K>, out: &mut W) -> Result<()> {
    out.write_str(HEADER)?;

    match tree.root() {
        Some(root) => {
            out.write_str("  ROOT -> n1;\n")?;
            let mut next_id = 0;
            write_node(root, &mut next_id, out)?;
        }
        None => {
            out.write_str("  ROOT -> ROOTnull [arrowhead=odot];\n")?;
            out.write_str("  ROOTnull [label=\" \", shape=none];\n")?;
        }
    }

    out.write_str("}\n")?;
    Ok(())
}

/// Emit `node` and its subtree, returning the id given to `node`.
fn write_node<K: Display, W: Write>(node: &Node<K>, next_id: &mut usize, out: &mut W) -> Result<usize> {
    *next_id += 1;
    let id = *next_id;

    out.write_str("  ")?;
    write!(out, "n{} [label=\"{{", id)?;
    for (i, key) in node.keys().iter().enumerate() {
        if i > 0 {
            out.write_char('|')?;
        }
        write_escaped(key, out)?;
    }
    writeln!(out, "}}\", {}];", NODE_STYLE)?;

    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        let port = if i == 0 {
            "sw"
        } else if i + 1 == children.len() {
            "se"
        } else {
            "s"
        };
        let child_id = write_node(child, next_id, out)?;
        writeln!(out, "  n{}:{} -> n{}:n;", id, port, child_id)?;
    }

    Ok(id)
}

/// Write a key with the characters that are special in record labels escaped.
fn write_escaped<K: Display, W: Write>(key: &K, out: &mut W) -> fmt::Result {
    for ch in key.to_string().chars() {
        if matches!(ch, '{' | '}' | '|' | '<' | '>' | '"' | '\\') {
            out.write_char('\\')?;
        }
        out.write_char(ch)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree_digraph() {
        let tree: TwoThreeTree<i32> = TwoThreeTree::new();
        let dot = digraph(&tree).unwrap();

        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("ROOT -> ROOTnull [arrowhead=odot];"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn test_nodes_numbered_in_preorder() {
        // [20|40] with leaves [10] [30] [50|60]
        let tree: TwoThreeTree<i32> = [10, 20, 30, 40, 50, 60].into_iter().collect();
        let dot = digraph(&tree).unwrap();

        assert!(dot.contains("n1 [label=\"{20|40}\""));
        assert!(dot.contains("n2 [label=\"{10}\""));
        assert!(dot.contains("n3 [label=\"{30}\""));
        assert!(dot.contains("n4 [label=\"{50|60}\""));
        assert!(dot.contains("n1:sw -> n2:n;"));
        assert!(dot.contains("n1:s -> n3:n;"));
        assert!(dot.contains("n1:se -> n4:n;"));
    }

    #[test]
    fn test_record_characters_escaped() {
        let mut tree = TwoThreeTree::new();
        tree.insert("a|b".to_string());
        let dot = digraph(&tree).unwrap();
        assert!(dot.contains("{a\\|b}"));
    }

    #[test]
    fn test_write_error_propagates() {
        struct Refuse;
        impl Write for Refuse {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let tree: TwoThreeTree<i32> = [1].into_iter().collect();
        assert!(write_digraph(&tree, &mut Refuse).is_err());
    }
}
