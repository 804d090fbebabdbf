//! # safecalc
//!
//! safecalc is an arithmetic calculator written in Rust. It parses a line of
//! text with a purpose-built grammar that can only express numbers, the six
//! arithmetic operators (`+ - * / % **`), unary signs, parentheses and
//! percent literals, and evaluates it to an `f64`.
//!
//! Nothing outside that grammar can be expressed, so no input can reach
//! anything but arithmetic.

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
    ast::Expr,
    error::EvalResult,
    interpreter::{
        Limits, lexer::tokenize, normalizer::normalize, parser::core::parse_tokens,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// an arithmetic expression as a tree. The tree is built by the parser and
/// walked by the evaluator.
pub mod ast;
/// Command-line driver.
///
/// Argument parsing, logging setup, one-shot evaluation and the interactive
/// read-evaluate-print loop used by the `safecalc` binary.
pub mod cli;
/// Provides the error type shared by every stage.
///
/// Separates malformed input, arithmetic failures and internal invariant
/// violations so callers can report each appropriately.
pub mod error;
/// Orchestrates the path from raw text to a number.
///
/// This module ties together normalization, lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Rewrites percent literals and enforces the character whitelist.
/// - Tokenizes and parses with standard precedence and associativity.
/// - Evaluates trees within configurable depth limits.
pub mod interpreter;

/// Evaluates an arithmetic expression.
///
/// Each call is independent: there is no state shared between calls, so this
/// can be used from several threads at once.
///
/// # Errors
/// Returns an [`EvalError`](crate::error::EvalError) if the input is empty,
/// contains characters outside the arithmetic alphabet, is not a well-formed
/// expression, nests too deeply, or divides by zero.
///
/// # Examples
/// ```
/// use safecalc::{error::EvalError, evaluate};
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("50%").unwrap(), 0.5);
/// assert_eq!(evaluate("-2**2").unwrap(), -4.0);
///
/// assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
/// assert!(matches!(evaluate("2+x"), Err(EvalError::InvalidCharacter { .. })));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    evaluate_with_limits(expression, &Limits::default())
}

/// Evaluates an arithmetic expression with explicit [`Limits`].
///
/// # Errors
/// See [`evaluate`].
pub fn evaluate_with_limits(expression: &str, limits: &Limits) -> EvalResult<f64> {
    parse_with_limits(expression, limits)?.evaluate_with_limits(limits)
}

/// Parses an arithmetic expression into a tree without evaluating it.
///
/// # Errors
/// Returns every error [`evaluate`] can return except division by zero,
/// which is only detected while evaluating.
///
/// # Examples
/// ```
/// use safecalc::parse;
///
/// let tree = parse("2**3**2").unwrap();
/// assert_eq!(tree.to_string(), "(2 ** (3 ** 2))");
/// assert_eq!(tree.evaluate().unwrap(), 512.0);
///
/// // Division by zero is a runtime failure, not a parse failure.
/// assert!(parse("5/0").is_ok());
/// ```
pub fn parse(expression: &str) -> EvalResult<Expr> {
    parse_with_limits(expression, &Limits::default())
}

/// Parses an arithmetic expression with explicit [`Limits`].
///
/// # Errors
/// See [`parse`].
pub fn parse_with_limits(expression: &str, limits: &Limits) -> EvalResult<Expr> {
    let cleaned = normalize(expression)?;
    let tokens = tokenize(&cleaned)?;
    parse_tokens(&tokens, limits)
}
