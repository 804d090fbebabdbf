use crate::{
    ast::{BinaryOperator, Expr},
    error::{EvalError, EvalResult},
    interpreter::Limits,
};

impl Expr {
    /// Evaluates the tree with the default [`Limits`].
    ///
    /// # Example
    /// ```
    /// use safecalc::ast::{BinaryOperator, Expr, UnaryOperator};
    ///
    /// let tree = Expr::binary(Expr::literal(2.0),
    ///                         BinaryOperator::Mul,
    ///                         Expr::unary(UnaryOperator::Minus, Expr::literal(4.0)));
    /// assert_eq!(tree.evaluate().unwrap(), -8.0);
    /// ```
    pub fn evaluate(&self) -> EvalResult<f64> {
        self.evaluate_with_limits(&Limits::default())
    }

    /// Evaluates the tree, failing if it is deeper than `limits.max_depth`.
    ///
    /// Evaluation is a pure bottom-up walk: the left operand is evaluated
    /// before the right one and nothing outside the tree is read or written,
    /// so evaluating the same tree twice yields the same result.
    ///
    /// # Errors
    /// - [`EvalError::DivisionByZero`] if a division, remainder, or a power of
    ///   zero with a negative exponent has no finite answer.
    /// - [`EvalError::TooComplex`] if signs, exponents or groups nest deeper
    ///   than the limit. Flat chains like `1+1+...+1` do not count.
    pub fn evaluate_with_limits(&self, limits: &Limits) -> EvalResult<f64> {
        self.eval_at(0, limits.max_depth)
    }

    fn eval_at(&self, depth: usize, limit: usize) -> EvalResult<f64> {
        if depth > limit {
            return Err(EvalError::TooComplex { limit });
        }

        match self {
            Self::Literal { value } => Ok(*value),
            Self::UnaryOp { op, expr } => Ok(op.apply(expr.eval_at(depth + 1, limit)?)),
            Self::BinaryOp { left,
                             op: BinaryOperator::Pow,
                             right, } => {
                let base = left.eval_at(depth + 1, limit)?;
                let exponent = right.eval_at(depth + 1, limit)?;
                BinaryOperator::Pow.apply(base, exponent)
            },
            Self::BinaryOp { .. } => self.eval_chain(depth, limit),
        }
    }

    /// Evaluates a left-associative chain such as `1 + 2 - 3 * 4`.
    ///
    /// Such chains hang off the left spine of the tree. The spine is walked
    /// iteratively, so a long flat chain costs one level of depth rather than
    /// one per operator. Operands are still evaluated left to right.
    fn eval_chain(&self, depth: usize, limit: usize) -> EvalResult<f64> {
        let mut pending = Vec::new();
        let mut node = self;
        loop {
            match node {
                Self::BinaryOp { left, op, right } if *op != BinaryOperator::Pow => {
                    pending.push((*op, right.as_ref()));
                    node = left;
                },
                _ => break,
            }
        }

        let mut value = node.eval_at(depth + 1, limit)?;
        for (op, right) in pending.into_iter().rev() {
            let right = right.eval_at(depth + 1, limit)?;
            value = op.apply(value, right)?;
        }
        Ok(value)
    }
}
