//! # polix
//!
//! polix builds binary expression trees from arithmetic expressions written
//! in postfix (Reverse Polish) or prefix (Polish) notation, and evaluates
//! them to integers.
//!
//! An expression is a sequence of single-character tokens: alphanumeric
//! characters are operand symbols, and every other character is an operator
//! symbol. The supported operators are `+`, `-`, `*` and `/`, where `/` is
//! floor division (the quotient is rounded toward negative infinity). One
//! character per token is a hard input-domain limit of the notation model:
//! multi-character operands, infix notation, floating-point arithmetic and
//! unary operators are not supported.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    interpreter::{builder::build_tree, evaluator::evaluate, lexer::tokenize},
    tree::Notation,
};

/// Provides the error types for tree construction and evaluation.
///
/// This module defines all errors that can be raised while turning a token
/// sequence into an expression tree or while evaluating one. Each phase has
/// its own enum so callers can tell construction failures from evaluation
/// failures without inspecting message text.
///
/// # Responsibilities
/// - Defines the builder's error kind (malformed operand/operator counts).
/// - Defines the evaluator's error kinds (non-numeric leaves, division by
///   zero, unsupported operators, overflow).
/// - Implements the standard error traits so errors can be boxed and
///   surfaced generically at the crate's entry points.
pub mod error;
/// Orchestrates the conversion of expression text into an integer result.
///
/// This module ties together the three stages of the pipeline: the lexer
/// classifies input characters into tokens, the builder folds the token
/// sequence into a binary expression tree, and the evaluator walks the tree
/// to compute its value. The tree is the sole handoff artifact between the
/// stages; there is no shared mutable state.
///
/// # Responsibilities
/// - Tokenizes raw expression text into operand and operator symbols.
/// - Constructs expression trees from postfix or prefix token sequences.
/// - Evaluates expression trees, reporting arithmetic and structural errors.
pub mod interpreter;
/// Renders an expression tree for terminal display.
///
/// Consumers that want to show a tree only need the read-only traversal
/// accessors of [`tree::TreeNode`]; this module is such a consumer and
/// converts a tree into a [`termtree::Tree`] that prints with box-drawing
/// glyphs.
pub mod render;
/// Defines the expression tree data model.
///
/// This module declares the [`tree::TreeNode`] type that represents one
/// token of the source expression, and the [`tree::Notation`] mode that
/// selects how a token sequence is read. Trees are immutable after
/// construction and every node is exclusively owned by its parent.
///
/// # Responsibilities
/// - Defines the node type with its value and optional children.
/// - Exposes read-only accessors for traversal by external consumers.
/// - Makes one-child nodes unrepresentable through its constructors.
pub mod tree;

/// Builds and evaluates an expression in one call.
///
/// This is the convenience entry point over the full pipeline: the input is
/// tokenized, the token sequence is folded into an expression tree, and the
/// tree is evaluated to an integer.
///
/// # Errors
/// Returns a boxed [`error::BuildError`] if the token sequence does not
/// reduce to a single tree, or a boxed [`error::EvalError`] if evaluation
/// fails. Callers that need a specific kind can downcast; any other kind is
/// presentable as a generic failure.
///
/// # Examples
/// ```
/// use polix::{eval_expression, tree::Notation};
///
/// let result = eval_expression("23*5+", Notation::Postfix);
/// assert_eq!(result.unwrap(), 11);
///
/// let result = eval_expression("+*235", Notation::Prefix);
/// assert_eq!(result.unwrap(), 11);
///
/// assert!(eval_expression("2+", Notation::Postfix).is_err());
/// ```
pub fn eval_expression(input: &str,
                       notation: Notation)
                       -> Result<i64, Box<dyn std::error::Error>> {
    let tokens = tokenize(input);

    let root = match build_tree(&tokens, notation) {
        Ok(root) => root,
        Err(e) => return Err(Box::new(e)),
    };

    match evaluate(Some(&root)) {
        Ok(value) => Ok(value),
        Err(e) => Err(Box::new(e)),
    }
}
