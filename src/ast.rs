/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` only has the three shapes the grammar can produce: numeric literals,
/// signed operands and binary operations. Every node owns its children through
/// a `Box`, so a tree is always acyclic and each node has exactly one parent.
/// Trees are built bottom-up by the parser and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal such as `3` or `0.25`.
    Literal {
        /// The constant value.
        value: f64,
    },
    /// A sign applied to an operand (`-x`, `+x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal { value }
    }

    /// Builds a unary node owning `expr`.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr) }
    }

    /// Builds a binary node owning both operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }
}

/// Represents a binary operator.
///
/// This is the complete set of operators the evaluator knows how to apply;
/// nothing outside it can be expressed in a tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floating-point remainder (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
}

/// Represents a unary sign operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Minus,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "**",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

/// Renders the tree fully parenthesized, which makes grouping explicit.
///
/// ## Example
/// ```
/// use safecalc::parse;
///
/// assert_eq!(parse("-2**2").unwrap().to_string(), "(-(2 ** 2))");
/// assert_eq!(parse("2-3-4").unwrap().to_string(), "((2 - 3) - 4)");
/// ```
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::UnaryOp { op, expr } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
