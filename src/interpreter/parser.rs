/// Parser entry points and shared parsing state.
///
/// Contains the top-level expression rule, the nesting guard and the
/// function that turns a whole token list into a single tree.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: additive and
/// multiplicative.
pub mod binary;

/// Unary, power and primary parsing.
///
/// Handles sign prefixes, right-associative exponentiation, numeric literals
/// and parenthesized groups.
pub mod unary;
