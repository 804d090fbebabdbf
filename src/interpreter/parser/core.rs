use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::{EvalError, EvalResult},
    interpreter::{Limits, lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = EvalResult<T>;

/// Tracks how deep the recursive descent currently is.
///
/// Every rule that recurses into a nested construct (a parenthesized group, a
/// sign prefix, an exponent) asks for [`Nesting::deeper`] first, so
/// pathological input fails with [`EvalError::TooComplex`] instead of
/// exhausting the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nesting {
    depth: usize,
    limit: usize,
}

impl Nesting {
    /// Starts at depth zero with the given limit.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { depth: 0, limit }
    }

    /// Returns the nesting one level down.
    ///
    /// # Errors
    /// Returns [`EvalError::TooComplex`] once the limit is reached.
    pub const fn deeper(self) -> ParseResult<Self> {
        if self.depth >= self.limit {
            return Err(EvalError::TooComplex { limit: self.limit });
        }
        Ok(Self { depth: self.depth + 1,
                  limit: self.limit, })
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, addition and subtraction, and recursively descends
/// through the precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
/// - `nesting`: Current nesting depth.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, nesting: Nesting) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_additive(tokens, nesting)
}

/// Parses a complete token list into one expression tree.
///
/// The whole list must be consumed: anything left over after a complete
/// expression, such as the `)` in `2+3)` or the `3` in `2 3`, is a syntax
/// error.
///
/// # Errors
/// - [`EvalError::SyntaxError`] for any grammar violation.
/// - [`EvalError::TooComplex`] if nesting exceeds `limits.max_depth`.
///
/// # Example
/// ```
/// use safecalc::interpreter::{Limits, lexer::tokenize, parser::core::parse_tokens};
///
/// let tokens = tokenize("2+3*4").unwrap();
/// let tree = parse_tokens(&tokens, &Limits::default()).unwrap();
/// assert_eq!(tree.to_string(), "(2 + (3 * 4))");
///
/// let tokens = tokenize("2+3)").unwrap();
/// assert!(parse_tokens(&tokens, &Limits::default()).is_err());
/// ```
pub fn parse_tokens(tokens: &[(Token, usize)], limits: &Limits) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter, Nesting::new(limits.max_depth))?;

    match iter.next() {
        Some((token, column)) => Err(EvalError::unexpected_token(token, *column)),
        None => Ok(expr),
    }
}
