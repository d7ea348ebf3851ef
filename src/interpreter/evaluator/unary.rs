use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
};

impl Environment {
    /// Evaluates a unary operation.
    ///
    /// The operand is evaluated first. A numeric operand is negated. An
    /// operand that does not reduce to a number is returned as it is, without
    /// the sign, so `-x` with `x` free evaluates to `x`.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `expr`: Operand expression.
    ///
    /// # Returns
    /// The negated number or the evaluated operand.
    ///
    /// # Errors
    /// Returns `Overflow` when negating `i64::MIN`.
    pub(crate) fn eval_unary_op(&mut self, op: UnaryOperator, expr: &Expr) -> EvalResult<Expr> {
        let value = self.eval(expr)?;

        match (op, value) {
            (UnaryOperator::Negate, Expr::Number(n)) => {
                n.checked_neg().map(Expr::Number).ok_or(RuntimeError::Overflow)
            },
            // The sign is dropped on open operands.
            (UnaryOperator::Negate, open) => Ok(open),
        }
    }
}
