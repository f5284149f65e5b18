use crate::{error::EvalError, tree::TreeNode};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an expression tree to an integer.
///
/// The walk is post-order: the left subtree is evaluated before the right
/// one, and the node's operator is applied last. An absent root evaluates
/// to `0`; the builder never returns an absent tree, but the evaluator
/// stands on its own as an entry point. Division is floor division: the
/// quotient is rounded toward negative infinity, so `(0 - 5) / 3` is `-2`,
/// not `-1`.
///
/// All failures propagate immediately; there are no partial results and no
/// recovery inside the evaluator.
///
/// # Parameters
/// - `root`: The tree to evaluate, or `None` for the empty tree.
///
/// # Returns
/// The integer value of the tree.
///
/// # Errors
/// - `NonNumericLeaf` if a leaf symbol is not a decimal digit.
/// - `DivisionByZero` if the right operand of `/` evaluates to zero.
/// - `UnsupportedOperator` if an internal node holds anything but `+ - * /`.
/// - `Overflow` if an intermediate result leaves the 64-bit integer range.
///
/// # Example
/// ```
/// use polix::{
///     interpreter::{builder::build_tree, evaluator::evaluate, lexer::tokenize},
///     tree::Notation,
/// };
///
/// let tokens = tokenize("23*5+");
/// let root = build_tree(&tokens, Notation::Postfix).unwrap();
///
/// assert_eq!(evaluate(Some(&root)), Ok(11));
/// assert_eq!(evaluate(None), Ok(0));
/// ```
pub fn evaluate(root: Option<&TreeNode>) -> EvalResult<i64> {
    let Some(node) = root else {
        return Ok(0);
    };

    if node.is_leaf() {
        return node.value()
                   .to_digit(10)
                   .map(i64::from)
                   .ok_or(EvalError::NonNumericLeaf);
    }

    let left = evaluate(node.left())?;
    let right = evaluate(node.right())?;

    match node.value() {
        '+' => left.checked_add(right).ok_or(EvalError::Overflow),
        '-' => left.checked_sub(right).ok_or(EvalError::Overflow),
        '*' => left.checked_mul(right).ok_or(EvalError::Overflow),
        '/' => {
            if right == 0 {
                return Err(EvalError::DivisionByZero);
            }
            floor_div(left, right).ok_or(EvalError::Overflow)
        },
        _ => Err(EvalError::UnsupportedOperator),
    }
}

/// Floor division: the quotient rounded toward negative infinity.
///
/// `checked_div` truncates toward zero, so the quotient is adjusted down by
/// one whenever the division is inexact and the operands have opposite
/// signs. Returns `None` only for the `i64::MIN / -1` overflow, which the
/// checked division catches before the remainder is taken.
fn floor_div(left: i64, right: i64) -> Option<i64> {
    let quotient = left.checked_div(right)?;

    if left % right != 0 && (left < 0) != (right < 0) {
        Some(quotient - 1)
    } else {
        Some(quotient)
    }
}
