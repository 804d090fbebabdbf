use crate::{
    ast::BinaryOperator,
    error::{EvalError, EvalResult},
};

impl BinaryOperator {
    /// Applies the operator to two evaluated operands.
    ///
    /// Division and remainder check their divisor explicitly and never
    /// produce an infinity or NaN from a zero divisor. The remainder comes
    /// from floored division, so its sign follows the divisor. Raising zero
    /// to a negative power is reported as a division by zero.
    ///
    /// # Parameters
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing the computed value.
    ///
    /// # Example
    /// ```
    /// use safecalc::{ast::BinaryOperator, error::EvalError};
    ///
    /// assert_eq!(BinaryOperator::Mod.apply(-7.0, 3.0).unwrap(), 2.0);
    /// assert_eq!(BinaryOperator::Mod.apply(7.0, -3.0).unwrap(), -2.0);
    /// assert_eq!(BinaryOperator::Pow.apply(2.0, 10.0).unwrap(), 1024.0);
    /// assert_eq!(BinaryOperator::Div.apply(1.0, 0.0), Err(EvalError::DivisionByZero));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> EvalResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(left / right)
            },
            Self::Mod => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(floored_remainder(left, right))
            },
            Self::Pow => eval_pow(left, right),
        }
    }
}

/// Remainder of a floored division: the result has the divisor's sign.
fn floored_remainder(left: f64, right: f64) -> f64 {
    let rem = left % right;
    if rem == 0.0 {
        0.0_f64.copysign(right)
    } else if (rem < 0.0) != (right < 0.0) {
        rem + right
    } else {
        rem
    }
}

/// Evaluates `base ** exponent`.
fn eval_pow(base: f64, exponent: f64) -> EvalResult<f64> {
    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero);
    }
    Ok(base.powf(exponent))
}
