use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
};

impl Environment {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated, left first. If both reduce to numbers the
    /// operation is computed with [`Environment::eval_scalar_op`]. Otherwise a
    /// new node is built from the two evaluated operands, which is how
    /// expressions over free variables simplify as far as they can.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// A number or a partially evaluated [`Expr::BinaryOp`].
    pub(crate) fn eval_binary_op(&mut self,
                                 op: BinaryOperator,
                                 left: &Expr,
                                 right: &Expr)
                                 -> EvalResult<Expr> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;

        match (&left, &right) {
            (Expr::Number(a), Expr::Number(b)) => Self::eval_scalar_op(op, *a, *b).map(Expr::Number),
            _ => Ok(Expr::BinaryOp { op,
                                     left: Box::new(left),
                                     right: Box::new(right) }),
        }
    }

    /// Evaluates an integer arithmetic operation.
    ///
    /// Division truncates toward zero. Overflow is reported instead of
    /// wrapping.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `a`: Left operand.
    /// - `b`: Right operand.
    ///
    /// # Returns
    /// The computed integer.
    ///
    /// # Errors
    /// - `DivisionByZero` if `op` is `Div` and `b` is zero.
    /// - `Overflow` if the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use dentaku::{ast::BinaryOperator, error::RuntimeError, Environment};
    ///
    /// assert_eq!(Environment::eval_scalar_op(BinaryOperator::Div, -7, 2), Ok(-3));
    /// assert_eq!(Environment::eval_scalar_op(BinaryOperator::Div, 1, 0),
    ///            Err(RuntimeError::DivisionByZero));
    /// assert_eq!(Environment::eval_scalar_op(BinaryOperator::Mul, i64::MAX, 2),
    ///            Err(RuntimeError::Overflow));
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, a: i64, b: i64) -> EvalResult<i64> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero);
                }
                a.checked_div(b)
            },
        };

        result.ok_or(RuntimeError::Overflow)
    }
}
