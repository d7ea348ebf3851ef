use crate::error::RuntimeError;

/// A unary operator.
///
/// The grammar only ever produces negation; a leading `+` is consumed by the
/// parser without creating a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation, `-x`.
    Negate,
}

impl TryFrom<char> for UnaryOperator {
    type Error = RuntimeError;

    /// Maps a source character to its unary operator.
    ///
    /// # Example
    /// ```
    /// use dentaku::{ast::UnaryOperator, error::RuntimeError};
    ///
    /// assert_eq!(UnaryOperator::try_from('-'), Ok(UnaryOperator::Negate));
    /// assert_eq!(UnaryOperator::try_from('!'),
    ///            Err(RuntimeError::UnsupportedOperator { operator: '!' }));
    /// ```
    fn try_from(operator: char) -> Result<Self, Self::Error> {
        match operator {
            '-' => Ok(Self::Negate),
            _ => Err(RuntimeError::UnsupportedOperator { operator }),
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating integer division.
    Div,
}

impl BinaryOperator {
    /// Returns `true` for the operators of the additive precedence level.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns `true` for the operators of the multiplicative precedence
    /// level.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl TryFrom<char> for BinaryOperator {
    type Error = RuntimeError;

    fn try_from(operator: char) -> Result<Self, Self::Error> {
        match operator {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Sub),
            '*' => Ok(Self::Mul),
            '/' => Ok(Self::Div),
            _ => Err(RuntimeError::UnsupportedOperator { operator }),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        };
        write!(f, "{symbol}")
    }
}

/// An expression tree for one parsed statement or sub-expression.
///
/// Expressions are immutable values. Evaluation never mutates a node; it
/// either returns a fresh tree or a clone of an existing one. The same type
/// is used for parsed input, for evaluation results and for the definitions
/// stored in an [`Environment`](crate::interpreter::environment::Environment).
///
/// The [`Display`](std::fmt::Display) implementation produces the textual
/// form used by the printer for every non-numeric result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal or a fully reduced value.
    Number(i64),
    /// A variable reference. An unbound symbol evaluates to itself and acts
    /// as a free variable.
    Symbol(String),
    /// A prefix operation such as `-x`.
    UnaryOp {
        /// The operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// The operator to apply.
        op:    BinaryOperator,
        /// Left-hand operand.
        left:  Box<Self>,
        /// Right-hand operand.
        right: Box<Self>,
    },
    /// `target = value`. The environment keeps `value` unevaluated.
    Assignment {
        /// Name of the variable being bound.
        target: String,
        /// Right-hand side, as written.
        value:  Box<Self>,
    },
    /// `name(argument)`, dispatched to a native procedure.
    FunctionCall {
        /// Name of the registered procedure.
        name:     String,
        /// The single argument, passed to the procedure unevaluated.
        argument: Box<Self>,
    },
}

impl Expr {
    /// Builds a unary node from its source operator character.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnsupportedOperator`] for anything but `-`.
    pub fn unary(op: char, expr: Self) -> Result<Self, RuntimeError> {
        Ok(Self::UnaryOp { op:   UnaryOperator::try_from(op)?,
                           expr: Box::new(expr), })
    }

    /// Builds a binary node from its source operator character.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UnsupportedOperator`] for anything but the
    /// four arithmetic operators.
    ///
    /// # Example
    /// ```
    /// use dentaku::ast::Expr;
    ///
    /// let sum = Expr::binary('+', Expr::Symbol("x".into()), Expr::Number(1)).unwrap();
    /// assert_eq!(sum.to_string(), "(x + 1)");
    /// assert!(Expr::binary('%', Expr::Number(1), Expr::Number(2)).is_err());
    /// ```
    pub fn binary(op: char, left: Self, right: Self) -> Result<Self, RuntimeError> {
        Ok(Self::BinaryOp { op:    BinaryOperator::try_from(op)?,
                            left:  Box::new(left),
                            right: Box::new(right), })
    }

    /// Returns the integer if this expression is a [`Expr::Number`].
    #[must_use]
    pub const fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns `true` if this expression is exactly the symbol `name`.
    #[must_use]
    pub fn is_symbol(&self, name: &str) -> bool {
        matches!(self, Self::Symbol(s) if s == name)
    }

    /// Returns the number of nodes on the longest path from this node to a
    /// leaf. Numbers and symbols have height 1.
    ///
    /// # Example
    /// ```
    /// use dentaku::read;
    ///
    /// let (expr, _) = read("1 + 2 * 3").unwrap();
    /// assert_eq!(expr.height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        match self {
            Self::Number(_) | Self::Symbol(_) => 1,
            Self::UnaryOp { expr, .. } => 1 + expr.height(),
            Self::BinaryOp { left, right, .. } => 1 + left.height().max(right.height()),
            Self::Assignment { value, .. } => 1 + value.height(),
            Self::FunctionCall { argument, .. } => 1 + argument.height(),
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Symbol(name) => write!(f, "{name}"),
            Self::UnaryOp { op, expr } => write!(f, "{op}{expr}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Assignment { target, value } => write!(f, "{target} = {value}"),
            Self::FunctionCall { name, argument } => write!(f, "{name}({argument})"),
        }
    }
}
