/// The builder module folds a token sequence into an expression tree.
///
/// The builder makes a single left-to-right pass over the tokens, keeping a
/// stack of finished subtrees, and either returns the root of the one tree
/// the sequence describes or reports a structural error. Prefix input is
/// processed by reversing the sequence and reusing the postfix pass.
///
/// # Responsibilities
/// - Pushes leaves for operand tokens and combines subtrees for operators.
/// - Validates the operand/operator counts of the whole sequence.
/// - Hands the caller exclusive ownership of the constructed tree.
pub mod builder;
/// The evaluator module computes the integer value of an expression tree.
///
/// The evaluator walks the tree in post-order, parsing leaves as decimal
/// digits and applying the operator of each internal node to the values of
/// its subtrees. It is independent of the builder and accepts any tree,
/// including an absent one.
///
/// # Responsibilities
/// - Evaluates leaves, reporting non-numeric operand symbols.
/// - Applies `+ - * /` with checked arithmetic and floor division.
/// - Reports division by zero and unsupported operator symbols.
pub mod evaluator;
/// The lexer module classifies input characters into tokens.
///
/// The lexer reads raw expression text and produces one token per character:
/// operand symbols for alphanumeric characters and operator symbols for
/// everything else. The classification is total, so it never fails; symbols
/// that no stage understands are carried along and reported by the stage
/// that rejects them.
///
/// # Responsibilities
/// - Converts the input character stream into operand and operator tokens.
/// - Preserves every input character, including whitespace.
pub mod lexer;
