use crate::ast::UnaryOperator;

impl UnaryOperator {
    /// Applies the sign to an evaluated operand.
    ///
    /// # Example
    /// ```
    /// use safecalc::ast::UnaryOperator;
    ///
    /// assert_eq!(UnaryOperator::Minus.apply(5.0), -5.0);
    /// assert_eq!(UnaryOperator::Plus.apply(-5.0), -5.0);
    /// ```
    #[must_use]
    pub const fn apply(self, value: f64) -> f64 {
        match self {
            Self::Plus => value,
            Self::Minus => -value,
        }
    }
}
