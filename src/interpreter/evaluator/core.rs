use tracing::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::environment::{Environment, LAST_INPUT, UNDEF},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How many nested `eval` calls one statement may make. Every operator node
/// and every variable lookup on the current path counts once.
pub const MAX_EVAL_DEPTH: usize = 512;

impl Environment {
    /// Evaluates an expression and returns the resulting expression.
    ///
    /// Evaluation is a recursive tree walk. Numbers evaluate to themselves;
    /// symbols resolve through their stored definitions; operators reduce
    /// when their operands are numbers and otherwise rebuild the node from
    /// the evaluated operands. The result is therefore either a
    /// [`Expr::Number`] or a simplified tree that still contains free
    /// variables.
    ///
    /// The only side effects are binding changes made by assignments and by
    /// native procedures.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The reduced expression.
    ///
    /// # Errors
    /// Returns `TooDeep` once evaluation nests more than
    /// [`MAX_EVAL_DEPTH`] calls, along with every error of the node being
    /// evaluated.
    ///
    /// # Example
    /// ```
    /// use dentaku::{Environment, read};
    ///
    /// let mut env = Environment::new();
    /// let (expr, _) = read("y * (2 + 3)").unwrap();
    /// assert_eq!(env.eval(&expr).unwrap().to_string(), "(y * 5)");
    /// ```
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Expr> {
        if self.depth >= MAX_EVAL_DEPTH {
            return Err(RuntimeError::TooDeep { limit: MAX_EVAL_DEPTH });
        }

        self.depth += 1;
        let result = match expr {
            Expr::Number(n) => Ok(Expr::Number(*n)),
            Expr::Symbol(name) => self.eval_symbol(name),
            Expr::UnaryOp { op, expr } => self.eval_unary_op(*op, expr),
            Expr::BinaryOp { op, left, right } => self.eval_binary_op(*op, left, right),
            Expr::Assignment { target, value } => self.eval_assignment(target, value),
            Expr::FunctionCall { name, argument } => self.eval_function_call(name, argument),
        };
        self.depth -= 1;
        result
    }

    /// Evaluates a top-level statement.
    ///
    /// Behaves like [`Environment::eval`] and, on success, stores the input
    /// statement itself (not its value) under `_` so it can be re-evaluated
    /// later. Evaluating the bare symbol `_` leaves that binding alone.
    ///
    /// # Parameters
    /// - `statement`: A statement returned by the parser.
    ///
    /// # Returns
    /// The value of the statement.
    pub fn eval_statement(&mut self, statement: &Expr) -> EvalResult<Expr> {
        let value = self.eval(statement)?;
        if !statement.is_symbol(LAST_INPUT) {
            self.set_expr(LAST_INPUT, statement.clone());
        }
        Ok(value)
    }

    /// Evaluates an assignment.
    ///
    /// The right-hand side is evaluated to produce the statement's value, but
    /// the binding stores the right-hand side as written. References to the
    /// target are therefore re-evaluated lazily, which together with the
    /// self-reference guard makes `a = a + 1` leave `a` evaluating to `1`
    /// from then on.
    ///
    /// If the right-hand side is the bare symbol `undef`, the binding is
    /// removed instead.
    ///
    /// # Parameters
    /// - `target`: Variable name.
    /// - `value`: Unevaluated right-hand side.
    ///
    /// # Returns
    /// The evaluated right-hand side, in both cases.
    fn eval_assignment(&mut self, target: &str, value: &Expr) -> EvalResult<Expr> {
        let result = self.eval(value)?;

        if value.is_symbol(UNDEF) {
            debug!(variable = target, "deleted by undef");
            self.remove(target);
        } else {
            self.set_expr(target, value.clone());
        }

        Ok(result)
    }
}
