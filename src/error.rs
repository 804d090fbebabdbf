use thiserror::Error;

/// Result type used throughout normalization, parsing and evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Represents every way turning a line of text into a number can fail.
///
/// The variants fall into three groups: problems with the shape of the input
/// (`EmptyExpression`, `InvalidCharacter`, `SyntaxError`, `TooComplex`),
/// arithmetic problems found while evaluating (`DivisionByZero`), and
/// invariant violations that a tree built by the parser cannot trigger
/// (`UnsupportedOperation`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The input was empty or only contained whitespace.
    #[error("Empty expression")]
    EmptyExpression,
    /// The input contained a character outside the arithmetic alphabet.
    #[error("Expression contains invalid characters: {detail}")]
    InvalidCharacter {
        /// Which character was rejected, where, and in which expression.
        detail: String,
    },
    /// The input is not a well-formed expression.
    #[error("Syntax error: {detail}")]
    SyntaxError {
        /// The unexpected token and its column, or "unexpected end of input".
        detail: String,
    },
    /// A division or remainder had a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,
    /// An operation outside the supported operator set was requested.
    #[error("Unsupported operation: {detail}")]
    UnsupportedOperation {
        /// Description of the rejected operation.
        detail: String,
    },
    /// The expression nests deeper than the configured limit.
    #[error("Expression is too complex: nesting exceeds {limit} levels")]
    TooComplex {
        /// The depth limit that was exceeded.
        limit: usize,
    },
}

impl EvalError {
    /// Shorthand for a [`EvalError::SyntaxError`] about an unexpected token.
    pub(crate) fn unexpected_token(token: impl std::fmt::Display, column: usize) -> Self {
        Self::SyntaxError { detail: format!("unexpected token '{token}' at column {column}") }
    }

    /// Shorthand for a [`EvalError::SyntaxError`] about truncated input.
    pub(crate) fn unexpected_end() -> Self {
        Self::SyntaxError { detail: "unexpected end of input".to_string() }
    }
}
