/// Tree construction errors.
///
/// Defines the error type raised while folding a token sequence into an
/// expression tree. Construction fails only on malformed operand/operator
/// counts; unknown symbols are structural non-issues at this stage and are
/// reported later, during evaluation.
pub mod build_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while computing the value of
/// an expression tree: non-numeric leaves, division by zero, unsupported
/// operator symbols, and integer overflow.
pub mod eval_error;

pub use build_error::BuildError;
pub use eval_error::EvalError;
