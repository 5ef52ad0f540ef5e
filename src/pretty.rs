//! Diagnostic rendering of a tree as box-drawing text. This is a consumer of
//! the tree's public read accessors, not part of the core algorithms: it only
//! touches [`Node::value`], [`Node::left`], and [`Node::right`].
//!
//! The right subtree is printed above its parent and the left subtree below,
//! so the output reads as the tree rotated 90 degrees counterclockwise:
//!
//! ```text
//! │   ┌── 3
//! └── 2
//!     └── 1
//! ```

use std::fmt::Display;

use crate::tree::{Node, Tree};

/// Renders the tree as box-drawing text, one node per line. The empty tree
/// renders as the empty string.
///
/// # Examples
///
/// ```
/// use balanced_bst::pretty;
/// use balanced_bst::tree::Tree;
///
/// let tree = Tree::from_values(vec![2, 1, 3]);
///
/// assert_eq!(pretty::render(&tree), "│   ┌── 3\n└── 2\n    └── 1\n");
/// ```
pub fn render<T: Display>(tree: &Tree<T>) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        render_node(root, "", true, &mut out);
    }
    out
}

fn render_node<T: Display>(node: &Node<T>, prefix: &str, is_left: bool, out: &mut String) {
    if let Some(right) = node.right() {
        let child_prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        render_node(right, &child_prefix, false, out);
    }
    let connector = if is_left { "└── " } else { "┌── " };
    out.push_str(&format!("{}{}{}\n", prefix, connector, node.value()));
    if let Some(left) = node.left() {
        let child_prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        render_node(left, &child_prefix, true, out);
    }
}
