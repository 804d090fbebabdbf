/// Binary operator evaluation logic.
///
/// Applies addition, subtraction, multiplication, division, remainder and
/// exponentiation to two already evaluated operands.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

/// Core evaluation logic.
///
/// Contains the recursive tree walk and the depth guard.
pub mod core;
