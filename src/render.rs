use termtree::Tree;

use crate::tree::TreeNode;

/// Converts an expression tree into a [`termtree::Tree`] for terminal
/// display.
///
/// Only the read-only accessors of [`TreeNode`] are used, so any consumer
/// holding a tree root can render it without knowing how the tree was
/// built. Children appear left before right.
///
/// ## Example
/// ```
/// use polix::{
///     interpreter::{builder::build_tree, lexer::tokenize},
///     render::to_display_tree,
///     tree::Notation,
/// };
///
/// let root = build_tree(&tokenize("23*"), Notation::Postfix).unwrap();
/// let rendered = to_display_tree(&root).to_string();
///
/// assert!(rendered.starts_with('*'));
/// ```
#[must_use]
pub fn to_display_tree(node: &TreeNode) -> Tree<char> {
    let leaves: Vec<_> = [node.left(), node.right()].into_iter()
                                                    .flatten()
                                                    .map(to_display_tree)
                                                    .collect();

    Tree::new(node.value()).with_leaves(leaves)
}
