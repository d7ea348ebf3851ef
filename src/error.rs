/// Parsing errors.
///
/// Defines every syntax error that can occur while scanning literals or
/// parsing a line: unexpected characters, unbalanced parentheses, invalid
/// assignment targets and oversized literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// printing, such as division by zero, calls to unregistered functions or a
/// corrupt `.printBase` setting.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure raised while processing one line.
///
/// This is what [`get_result`](crate::get_result) returns so the host can
/// report either family with a single `match` or a plain `{}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line could not be parsed.
    Parse(ParseError),
    /// The statement failed during evaluation or printing.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
