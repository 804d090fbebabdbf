use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::{Nesting, ParseResult},
            unary::parse_factor,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `2-3-4` is
/// `(2-3)-4`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `nesting`: Current nesting depth.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_multiplicative(tokens, nesting)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, nesting)?;
            left = Expr::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*`, `/` and `%`, which share one
/// precedence level.
///
/// The rule is: `multiplicative := factor (("*" | "/" | "%") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `nesting`: Current nesting depth.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_factor(tokens, nesting)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_factor(tokens, nesting)?;
            left = Expr::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for numbers and parentheses.
///
/// # Example
/// ```
/// use safecalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::DoubleStar),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        Token::Number(_) | Token::LParen | Token::RParen | Token::Ignored => None,
    }
}
