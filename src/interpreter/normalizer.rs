use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{EvalError, EvalResult};

/// Matches a number immediately followed by `%`, in every number form the
/// lexer accepts.
static PERCENT_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]*)?|\.[0-9]+)%").expect("percent literal pattern is valid")
});

/// Trims, rewrites percent literals and checks the character whitelist.
///
/// This runs before tokenizing. Percent literals are rewritten first, so any
/// `%` that survives is the binary remainder operator.
///
/// # Errors
/// - [`EvalError::EmptyExpression`] if nothing but whitespace was given.
/// - [`EvalError::InvalidCharacter`] for anything outside digits, `+ - * / %
///   ( ) .` and whitespace.
///
/// # Example
/// ```
/// use safecalc::interpreter::normalizer::normalize;
///
/// assert_eq!(normalize("  2**3 + 5% ").unwrap(), "2**3 + (5/100)");
/// assert_eq!(normalize("7 % 2").unwrap(), "7 % 2");
/// assert!(normalize("2+x").is_err());
/// ```
pub fn normalize(expression: &str) -> EvalResult<String> {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    // The rewrite only introduces whitelisted characters, so checking the
    // input as typed rejects exactly what checking the rewritten text would,
    // with columns that match what the user wrote.
    validate_characters(trimmed)?;

    Ok(rewrite_percent_literals(trimmed))
}

/// Replaces every `<number>%` with `(<number>/100)`.
///
/// A `%` followed (after optional whitespace) by something that starts an
/// operand is left alone: in `5%3` or `5 %(1+2)` it is the remainder operator.
fn rewrite_percent_literals(expression: &str) -> String {
    PERCENT_LITERAL.replace_all(expression, |caps: &Captures<'_>| {
                       let whole = &caps[0];
                       let end = caps.get(0).map_or(expression.len(), |m| m.end());
                       if starts_operand(&expression[end..]) {
                           whole.to_string()
                       } else {
                           format!("({}/100)", &caps[1])
                       }
                   })
                   .into_owned()
}

fn starts_operand(rest: &str) -> bool {
    rest.trim_start()
        .starts_with(|c: char| c.is_ascii_digit() || c == '.' || c == '(')
}

const fn is_allowed(c: char) -> bool {
    c.is_ascii_digit()
    || matches!(c, '+' | '-' | '*' | '/' | '%' | '(' | ')' | '.')
    || c.is_ascii_whitespace()
}

fn validate_characters(expression: &str) -> EvalResult<()> {
    match expression.chars().enumerate().find(|(_, c)| !is_allowed(*c)) {
        Some((index, c)) => {
            Err(EvalError::InvalidCharacter { detail: format!("'{c}' at column {} in '{expression}'",
                                                              index + 1) })
        },
        None => Ok(()),
    }
}
