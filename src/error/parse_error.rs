#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all syntax errors raised while scanning or parsing a line.
///
/// Each variant carries the piece of input it was raised at, with any
/// trailing line terminator removed, so the host can point the user at the
/// offending text.
pub enum ParseError {
    /// A character that cannot start or continue the current production.
    UnexpectedToken {
        /// The remaining input starting at the offending character.
        near: String,
    },
    /// The line ended where a number, symbol or `(` was required.
    UnexpectedEndOfInput,
    /// A `(` without its matching `)`.
    UnbalancedParen {
        /// The input where the group or call started.
        near: String,
    },
    /// The left side of `=` parsed as something other than a bare symbol.
    LvalueNotSymbol {
        /// Textual form of the rejected left-hand expression.
        lvalue: String,
    },
    /// An integer literal that does not fit in 64 bits.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
    },
    /// The expression nests groups, calls or chained operators deeper than
    /// the parser accepts.
    TooDeep {
        /// The maximum nesting depth.
        limit: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { near } => {
                write!(f, "Syntax error: Unexpected token at '{near}'.")
            },
            Self::UnexpectedEndOfInput => write!(f, "Syntax error: Unexpected end of input."),
            Self::UnbalancedParen { near } => {
                write!(f, "Syntax error: Unbalanced paren in '{near}'.")
            },
            Self::LvalueNotSymbol { lvalue } => write!(f,
                                                       "Syntax error: Left side of '=' is not a symbol: {lvalue}."),
            Self::LiteralTooLarge { literal } => {
                write!(f, "Syntax error: Literal {literal} is too large.")
            },
            Self::TooDeep { limit } => {
                write!(f, "Syntax error: Expression is nested deeper than {limit} levels.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
