/// The evaluator module walks expression trees and computes results.
///
/// The evaluator applies the fixed arithmetic operator set bottom-up and
/// reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes cleaned input for the parser.
///
/// Produces numbers, operators and parentheses, each paired with the column
/// where it starts, and reports anything it cannot tokenize.
pub mod lexer;
/// The normalizer module prepares raw input for tokenizing.
///
/// Trims the input, rewrites percent literals such as `50%` into `(50/100)`
/// and rejects characters outside the arithmetic alphabet.
pub mod normalizer;
/// The parser module builds the expression tree from tokens.
///
/// A recursive-descent parser over a grammar that can only express numbers,
/// signs, the six arithmetic operators and parentheses.
pub mod parser;

/// Default maximum nesting depth for parsing and evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Resource limits applied to a single parse or evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// The deepest nesting the parser accepts and the deepest tree the
    /// evaluator walks before failing with
    /// [`EvalError::TooComplex`](crate::error::EvalError::TooComplex).
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}
