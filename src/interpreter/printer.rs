use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::{Environment, PRINT_BASE},
        evaluator::core::EvalResult,
    },
};

/// The radixes `.printBase` may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    /// `0b101`
    Binary,
    /// `017`
    Octal,
    /// `42`
    Decimal,
    /// `0xff`
    Hexadecimal,
}

impl Radix {
    /// Reads the radix from the environment's `.printBase` binding.
    ///
    /// # Errors
    /// Returns `BadPrintBase` if `.printBase` is missing, is bound to
    /// something other than a number, or holds a number other than 2, 8, 10
    /// or 16.
    pub fn from_env(env: &Environment) -> EvalResult<Self> {
        match env.value(PRINT_BASE) {
            Some(2) => Ok(Self::Binary),
            Some(8) => Ok(Self::Octal),
            Some(10) => Ok(Self::Decimal),
            Some(16) => Ok(Self::Hexadecimal),
            _ => {
                let found = env.get(PRINT_BASE)
                               .map_or_else(|| "unset".to_string(), ToString::to_string);
                Err(RuntimeError::BadPrintBase { found })
            },
        }
    }

    /// Formats `n` in this radix with its conventional prefix.
    ///
    /// Negative numbers carry the sign in front of the prefix.
    ///
    /// # Example
    /// ```
    /// use dentaku::interpreter::printer::Radix;
    ///
    /// assert_eq!(Radix::Hexadecimal.format(255), "0xff");
    /// assert_eq!(Radix::Binary.format(-5), "-0b101");
    /// assert_eq!(Radix::Octal.format(8), "010");
    /// ```
    #[must_use]
    pub fn format(self, n: i64) -> String {
        let sign = if n < 0 { "-" } else { "" };
        let magnitude = n.unsigned_abs();

        match self {
            Self::Binary => format!("{sign}0b{magnitude:b}"),
            Self::Octal => format!("{sign}0{magnitude:o}"),
            Self::Decimal => format!("{n}"),
            Self::Hexadecimal => format!("{sign}0x{magnitude:x}"),
        }
    }
}

/// Renders an evaluation result as text.
///
/// Numbers are formatted in the radix selected by `.printBase`. Every other
/// expression uses its textual form, so a partially evaluated result such as
/// `(x + 1)` prints the same whatever the radix.
///
/// # Parameters
/// - `value`: The result to render.
/// - `env`: Environment providing `.printBase`.
///
/// # Errors
/// Returns `BadPrintBase` when `value` is a number and `.printBase` is not
/// one of 2, 8, 10 or 16.
///
/// # Example
/// ```
/// use dentaku::{Environment, ast::Expr, print};
///
/// let mut env = Environment::new();
/// assert_eq!(print(&Expr::Number(255), &env).unwrap(), "255");
///
/// env.set(".printBase", 16);
/// assert_eq!(print(&Expr::Number(255), &env).unwrap(), "0xff");
///
/// env.set(".printBase", 7);
/// assert!(print(&Expr::Number(255), &env).is_err());
/// assert_eq!(print(&Expr::Symbol("x".into()), &env).unwrap(), "x");
/// ```
pub fn print(value: &Expr, env: &Environment) -> EvalResult<String> {
    match value {
        Expr::Number(n) => Ok(Radix::from_env(env)?.format(*n)),
        _ => Ok(value.to_string()),
    }
}
