#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation and printing.
pub enum RuntimeError {
    /// Called a name with no registered native procedure.
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// An operator character outside the supported set reached the
    /// expression model.
    UnsupportedOperator {
        /// The rejected operator.
        operator: char,
    },
    /// Integer division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed 64 bits.
    Overflow,
    /// `.printBase` is not bound to 2, 8, 10 or 16.
    BadPrintBase {
        /// Textual form of the stored binding, or `unset`.
        found: String,
    },
    /// Evaluation recursed deeper than the evaluator allows, usually through
    /// a long chain of variables defined in terms of each other.
    TooDeep {
        /// The maximum evaluation depth.
        limit: usize,
    },
}

impl RuntimeError {
    /// Returns `true` for the arithmetic failures (division by zero and
    /// overflow).
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::Overflow)
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedFunction { name } => write!(f, "No such function: '{name}'."),
            Self::UnsupportedOperator { operator } => {
                write!(f, "Unsupported operator '{operator}'.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
            Self::BadPrintBase { found } => write!(f,
                                                   "Bad .printBase: {found}. Expected one of 2, 8, 10 or 16."),
            Self::TooDeep { limit } => {
                write!(f, "Evaluation is nested deeper than {limit} levels.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
