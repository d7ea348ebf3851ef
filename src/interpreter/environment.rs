use std::collections::HashMap;

use tracing::debug;

use crate::{ast::Expr, interpreter::evaluator::core::EvalResult};

/// Configuration variable selecting the radix numbers are printed in.
pub const PRINT_BASE: &str = ".printBase";
/// Holds the most recently evaluated input expression.
pub const LAST_INPUT: &str = "_";
/// Assigning this bare symbol deletes the target binding.
pub const UNDEF: &str = "undef";

/// A host-provided built-in.
///
/// Procedures receive their argument unevaluated together with the
/// environment, and decide for themselves whether and how to evaluate it.
pub type NativeProcedure = fn(&Expr, &mut Environment) -> EvalResult<Expr>;

/// Stores the state of one calculator session.
///
/// The environment holds the variable bindings and the registered native
/// procedures. It is created once, threaded explicitly through every
/// evaluation and print call, and is the only state that outlives a single
/// line.
///
/// Variables are bound to expressions, not values: an assignment stores its
/// right-hand side as written and every later reference evaluates it again.
///
/// ## Usage
///
/// ```
/// use dentaku::{ast::Expr, interpreter::environment::{Environment, PRINT_BASE}};
///
/// let mut env = Environment::new();
/// assert_eq!(env.value(PRINT_BASE), Some(10));
///
/// env.set("x", 5);
/// assert_eq!(env.eval(&Expr::Symbol("x".into())).unwrap(), Expr::Number(5));
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    variables: HashMap<String, Expr>,
    functions: HashMap<String, NativeProcedure>,
    /// Current `eval` nesting; back at zero between statements.
    pub(crate) depth: usize,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment with no functions and `.printBase` set to 10.
    #[must_use]
    pub fn new() -> Self {
        let mut env = Self { variables: HashMap::new(),
                             functions: HashMap::new(),
                             depth:     0, };
        env.set(PRINT_BASE, 10);
        env
    }

    /// Binds `key` to the number `n`.
    pub fn set(&mut self, key: &str, n: i64) {
        self.set_expr(key, Expr::Number(n));
    }

    /// Binds `key` to an arbitrary expression, replacing any previous
    /// binding.
    pub fn set_expr(&mut self, key: &str, expr: Expr) {
        debug!(variable = key, binding = %expr, "bind");
        self.variables.insert(key.to_string(), expr);
    }

    /// Removes the binding for `key`, returning what was stored.
    pub fn remove(&mut self, key: &str) -> Option<Expr> {
        debug!(variable = key, "unbind");
        self.variables.remove(key)
    }

    /// Returns the stored, unevaluated binding for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Expr> {
        self.variables.get(key)
    }

    /// Registers a native procedure under `name`.
    pub fn set_func(&mut self, name: &str, procedure: NativeProcedure) {
        debug!(function = name, "register");
        self.functions.insert(name.to_string(), procedure);
    }

    /// Looks up a native procedure.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<NativeProcedure> {
        self.functions.get(name).copied()
    }

    /// Reads a numeric setting.
    ///
    /// Returns `Some(n)` only when `key` is bound directly to a number. A
    /// missing key and a key bound to any other expression both yield
    /// `None`; nothing is evaluated.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<i64> {
        self.variables.get(key).and_then(Expr::as_number)
    }

    /// Returns `true` when `key` is bound to a non-zero number.
    #[must_use]
    pub fn is_defined(&self, key: &str) -> bool {
        self.value(key).is_some_and(|n| n != 0)
    }

    /// Replaces the binding for `key` with `expr`, returning the previous
    /// one without logging. Used by the self-reference guard.
    pub(crate) fn swap_binding(&mut self, key: &str, expr: Expr) -> Option<Expr> {
        self.variables.insert(key.to_string(), expr)
    }
}
