use crate::{
    ast::Expr,
    interpreter::{
        environment::Environment,
        evaluator::{core::EvalResult, function::core::stored_or_given},
    },
};

/// Returns the textual form of an expression as a symbol.
///
/// Like `dump`, a bound variable is replaced by its stored definition, so
/// `print(a)` after `a = a + 1` shows `(a + 1)` rather than the value `a`
/// currently evaluates to.
pub fn print(argument: &Expr, env: &mut Environment) -> EvalResult<Expr> {
    let target = stored_or_given(argument, env);
    Ok(Expr::Symbol(target.to_string()))
}
