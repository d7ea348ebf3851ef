use tracing::debug;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Environment, NativeProcedure},
        evaluator::{
            core::EvalResult,
            function::{dump, print},
        },
    },
};

/// Defines the built-in helpers by generating a lookup table and a name list.
///
/// Each entry provides a string name and the native procedure implementing
/// it. The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table used for registration),
/// - `BUILTIN_FUNCTIONS` (public list of built-in names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name: &'static str,
            func: NativeProcedure,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "dump"  => dump::dump,
    "print" => print::print,
}

/// Registers every built-in helper in `env`.
///
/// Hosts call this once before processing input. Registering is optional;
/// an environment without built-ins rejects `dump(x)` like any other unknown
/// call.
///
/// # Example
/// ```
/// use dentaku::{Environment, get_result, register_builtins};
///
/// let mut env = Environment::new();
/// register_builtins(&mut env);
/// get_result("a = a + 1", &mut env).unwrap();
/// assert_eq!(get_result("print(a)", &mut env).unwrap().printed, "(a + 1)");
/// ```
pub fn register_builtins(env: &mut Environment) {
    for builtin in BUILTIN_TABLE {
        env.set_func(builtin.name, builtin.func);
    }
}

impl Environment {
    /// Evaluates a function call.
    ///
    /// The callee is looked up among the registered native procedures and
    /// invoked with the argument as written. Procedures evaluate their
    /// argument themselves if they need its value.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `argument`: Unevaluated argument expression.
    ///
    /// # Returns
    /// Whatever the procedure returns.
    ///
    /// # Errors
    /// Returns `UndefinedFunction` if no procedure is registered under
    /// `name`, and propagates the procedure's own errors.
    pub(crate) fn eval_function_call(&mut self, name: &str, argument: &Expr) -> EvalResult<Expr> {
        let procedure =
            self.function(name)
                .ok_or_else(|| RuntimeError::UndefinedFunction { name: name.to_string() })?;

        debug!(function = name, %argument, "calling native procedure");
        procedure(argument, self)
    }
}

/// Resolves a helper's argument to the expression it should describe.
///
/// A symbol that is bound yields its stored definition; anything else,
/// including an unbound symbol, yields the argument itself. Nothing is
/// evaluated.
pub(in crate::interpreter::evaluator::function) fn stored_or_given<'a>(argument: &'a Expr,
                                                                       env: &'a Environment)
                                                                       -> &'a Expr {
    match argument {
        Expr::Symbol(name) => env.get(name).unwrap_or(argument),
        _ => argument,
    }
}
