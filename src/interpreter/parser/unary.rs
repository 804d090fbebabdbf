use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::EvalError,
    interpreter::{
        lexer::Token,
        parser::core::{Nesting, ParseResult, parse_expression},
    },
};

/// Parses a signed factor.
///
/// Supports the prefix operators `+` and `-`. Signs are right-associative and
/// may be chained, so `--3` is `-(-3)`. A sign applies to a whole power, which
/// makes `-2**2` parse as `-(2**2)`.
///
/// If no sign is present, the function delegates to [`parse_power`].
///
/// Grammar:
/// ```text
///     factor := ("+" | "-") factor
///             | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `nesting`: Current nesting depth.
///
/// # Returns
/// An [`Expr::UnaryOp`] or the power expression underneath it.
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let op = match tokens.peek() {
        Some((Token::Minus, _)) => UnaryOperator::Minus,
        Some((Token::Plus, _)) => UnaryOperator::Plus,
        _ => return parse_power(tokens, nesting),
    };
    tokens.next();

    let expr = parse_factor(tokens, nesting.deeper()?)?;
    Ok(Expr::unary(op, expr))
}

/// Parses exponentiation expressions.
///
/// Exponentiation is right-associative: `2 ** 3 ** 2` parses as
/// `2 ** (3 ** 2)`. The exponent is a full factor, so it may carry its own
/// sign (`2 ** -1`).
///
/// Grammar: `power := primary ("**" factor)?`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `nesting`: Current nesting depth.
///
/// # Returns
/// An exponentiation expression tree, or the bare primary.
pub(crate) fn parse_power<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let base = parse_primary(tokens, nesting)?;

    if let Some((Token::DoubleStar, _)) = tokens.peek() {
        tokens.next();
        let exponent = parse_factor(tokens, nesting.deeper()?)?;
        return Ok(Expr::binary(base, BinaryOperator::Pow, exponent));
    }

    Ok(base)
}

/// Parses a primary (atomic) expression: a number or a parenthesized group.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
/// ```
/// # Errors
/// Returns a [`EvalError::SyntaxError`] if the next token cannot start an
/// operand (an operator, a `)`), or if input ends where an operand was
/// expected.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Number(value), _)) => Ok(Expr::literal(*value)),
        Some((Token::LParen, column)) => parse_grouping(tokens, nesting, *column),
        Some((token, column)) => Err(EvalError::unexpected_token(token, *column)),
        None => Err(EvalError::unexpected_end()),
    }
}

/// Parses the inside of a parenthesized group, after its `(`.
///
/// An empty group `()` fails on the `)` because an expression is required.
///
/// # Errors
/// - [`EvalError::SyntaxError`] if the group is empty or is never closed.
/// - [`EvalError::TooComplex`] if the group nests too deeply.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         nesting: Nesting,
                         open_column: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let expr = parse_expression(tokens, nesting.deeper()?)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some((token, column)) => Err(EvalError::unexpected_token(token, *column)),
        None => {
            Err(EvalError::SyntaxError { detail: format!("unexpected end of input, '(' at column {open_column} is never closed") })
        },
    }
}
