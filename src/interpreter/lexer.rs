use logos::Logos;

/// Represents a single-character token of an expression.
///
/// Every character of the input is a token: alphanumeric characters are
/// operand symbols and all other characters, whitespace included, are
/// operator symbols. The split is total, so symbols outside `+ - * /` still
/// tokenize (as operators) and are only rejected later, during evaluation.
/// One character per token is a hard input-domain limit: multi-character
/// operands are not recognized.
#[derive(Logos, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Token {
    /// An operand symbol, such as `7` or `x`.
    #[regex(r"[0-9A-Za-z]", symbol)]
    Operand(char),
    /// An operator symbol, such as `+` or `/`.
    #[regex(r"[^0-9A-Za-z]", symbol)]
    Operator(char),
}

/// Extracts the single matched character from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(char)`: The matched character.
/// - `None`: Never; both token patterns match exactly one character.
fn symbol(lex: &logos::Lexer<Token>) -> Option<char> {
    lex.slice().chars().next()
}

/// Splits an expression into its tokens.
///
/// The two token patterns together cover every character, so tokenization
/// cannot fail and the output has one token per input character.
///
/// ## Example
/// ```
/// use polix::interpreter::lexer::{tokenize, Token};
///
/// let tokens = tokenize("23*");
///
/// assert_eq!(tokens,
///            vec![Token::Operand('2'), Token::Operand('3'), Token::Operator('*')]);
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Token::lexer(input).filter_map(Result::ok).collect()
}
