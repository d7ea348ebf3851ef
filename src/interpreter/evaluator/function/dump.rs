use crate::{
    ast::Expr,
    interpreter::{
        environment::Environment,
        evaluator::{core::EvalResult, function::core::stored_or_given},
    },
};

/// Returns the debug representation of an expression as a symbol.
///
/// If the argument is a bound variable, its stored definition is dumped
/// instead, which shows the tree an assignment actually kept. The result is
/// wrapped in [`Expr::Symbol`] so the printer emits it verbatim.
///
/// # Example
/// ```
/// use dentaku::{Environment, get_result, register_builtins};
///
/// let mut env = Environment::new();
/// register_builtins(&mut env);
/// get_result("n = 0x10", &mut env).unwrap();
/// assert_eq!(get_result("dump(n)", &mut env).unwrap().printed, "Number(16)");
/// ```
pub fn dump(argument: &Expr, env: &mut Environment) -> EvalResult<Expr> {
    let target = stored_or_given(argument, env);
    Ok(Expr::Symbol(format!("{target:?}")))
}
