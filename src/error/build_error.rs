#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building an expression tree.
pub enum BuildError {
    /// The operand/operator counts of the token sequence do not reduce to a
    /// single tree: an operator found fewer than two finished subtrees to
    /// combine, or operands were left over after the last token. The empty
    /// input is the zero-operand case of the latter.
    InvalidStructure,
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStructure => write!(f, "Invalid expression structure."),
        }
    }
}

impl std::error::Error for BuildError {}
