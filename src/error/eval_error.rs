#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum EvalError {
    /// A leaf holds a symbol that is not a decimal digit.
    NonNumericLeaf,
    /// The right-hand operand of a division evaluated to zero.
    DivisionByZero,
    /// An internal node holds a symbol that is not one of `+ - * /`.
    UnsupportedOperator,
    /// An intermediate result exceeded the 64-bit integer range.
    Overflow,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonNumericLeaf => write!(f, "Leaf node contains non-numeric value."),

            Self::DivisionByZero => write!(f, "Division by zero encountered."),

            Self::UnsupportedOperator => write!(f, "Unsupported operator encountered."),

            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for EvalError {}
