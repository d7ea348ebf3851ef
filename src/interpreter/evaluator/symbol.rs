use std::ops::{Deref, DerefMut};

use tracing::debug;

use crate::{
    ast::Expr,
    interpreter::{environment::Environment, evaluator::core::EvalResult},
};

/// Temporarily rebinds a variable and restores the original on drop.
///
/// While the guard is alive the environment is reachable through it, so the
/// nested evaluation runs against the rebinding. The original definition is
/// put back when the guard goes out of scope, whether evaluation returned a
/// value, an error or unwound.
struct RestoreBinding<'a> {
    env:      &'a mut Environment,
    name:     &'a str,
    original: Option<Expr>,
}

impl<'a> RestoreBinding<'a> {
    /// Binds `name` to zero until the guard is dropped.
    fn zero(env: &'a mut Environment, name: &'a str, original: Expr) -> Self {
        env.swap_binding(name, Expr::Number(0));
        debug!(variable = name, "self-reference guard: bound to 0");
        Self { env,
               name,
               original: Some(original) }
    }
}

impl Deref for RestoreBinding<'_> {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        self.env
    }
}

impl DerefMut for RestoreBinding<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.env
    }
}

impl Drop for RestoreBinding<'_> {
    fn drop(&mut self) {
        if let Some(original) = self.original.take() {
            debug!(variable = self.name, "self-reference guard: restored");
            self.env.swap_binding(self.name, original);
        }
    }
}

impl Environment {
    /// Evaluates a variable reference.
    ///
    /// An unbound symbol evaluates to itself and behaves as a free variable.
    /// A bound symbol evaluates its stored definition with the symbol itself
    /// bound to `0` for the duration, then gets its definition back. Any
    /// reference a definition makes to its own name therefore reads zero
    /// instead of recursing forever.
    ///
    /// # Parameters
    /// - `name`: Variable name.
    ///
    /// # Returns
    /// The evaluated definition, or the symbol itself if unbound.
    ///
    /// # Example
    /// ```
    /// use dentaku::{Environment, ast::Expr, read};
    ///
    /// let mut env = Environment::new();
    /// let (definition, _) = read("a + 1").unwrap();
    /// env.set_expr("a", definition.clone());
    ///
    /// // The inner `a` reads as zero.
    /// assert_eq!(env.eval(&Expr::Symbol("a".into())).unwrap(), Expr::Number(1));
    /// // And the definition is intact afterwards.
    /// assert_eq!(env.get("a"), Some(&definition));
    /// ```
    pub(crate) fn eval_symbol(&mut self, name: &str) -> EvalResult<Expr> {
        let Some(definition) = self.get(name).cloned() else {
            return Ok(Expr::Symbol(name.to_string()));
        };

        let mut guard = RestoreBinding::zero(self, name, definition.clone());
        guard.eval(&definition)
    }
}
