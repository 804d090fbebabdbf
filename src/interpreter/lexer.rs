use logos::Logos;

use crate::error::{EvalError, EvalResult};

/// Represents a lexical token in the cleaned input.
///
/// Only the arithmetic alphabet exists here: there are no identifiers, so a
/// token stream can never name anything outside the calculator.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Unsigned numeric literals, such as `42`, `3.14`, `.5` or `2.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces, tabs and line breaks.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::DoubleStar => write!(f, "**"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which makes logos report an
///   error for it.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits a cleaned expression into tokens paired with their 1-based column.
///
/// # Errors
/// Returns [`EvalError::SyntaxError`] naming the slice that could not be
/// tokenized, e.g. a lone `.`.
///
/// # Example
/// ```
/// use safecalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 ** .5").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 1), (Token::DoubleStar, 3), (Token::Number(0.5), 6)]);
/// ```
pub fn tokenize(source: &str) -> EvalResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start + 1;
        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(()) => return Err(EvalError::unexpected_token(lexer.slice(), column)),
        }
    }

    Ok(tokens)
}
