use tracing::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, parse_expression},
        scanner::skip_space,
    },
};

/// Parses a single statement.
///
/// A statement is an expression, optionally followed by `=` and a second
/// expression. The left side is parsed as an ordinary expression first and
/// only then checked to be a bare symbol, so `1 + 2 = 3` is rejected after
/// `1 + 2` has been read.
///
/// Grammar: `stmt := expr | symbol '=' expr`
///
/// Parsing stops at the first character no rule accepts. That remainder is
/// returned so the caller can detect trailing garbage; for a well-formed
/// line it is empty or just the line terminator.
///
/// # Parameters
/// - `buf`: One line of input.
///
/// # Returns
/// The parsed statement and the unconsumed remainder.
///
/// # Errors
/// Returns `LvalueNotSymbol` if the target of `=` is not a symbol, and
/// propagates every error from the expression rules.
///
/// # Example
/// ```
/// use dentaku::{ast::Expr, interpreter::parser::statement::parse_statement};
///
/// let (stmt, rest) = parse_statement("a = a + 1\n").unwrap();
/// assert!(matches!(stmt, Expr::Assignment { .. }));
/// assert_eq!(stmt.to_string(), "a = (a + 1)");
/// assert_eq!(rest, "\n");
///
/// assert!(parse_statement("1 = 2").is_err());
/// ```
pub fn parse_statement(buf: &str) -> ParseResult<(Expr, &str)> {
    let (statement, rest) = parse_expression(skip_space(buf))?;
    let rest = skip_space(rest);

    let Some(rhs) = rest.strip_prefix('=') else {
        trace!(%statement, "parsed expression statement");
        return Ok((statement, rest));
    };

    let target = match statement {
        Expr::Symbol(target) => target,
        lvalue => return Err(ParseError::LvalueNotSymbol { lvalue: lvalue.to_string() }),
    };

    let (value, rest) = parse_expression(rhs)?;
    trace!(%target, %value, "parsed assignment");
    Ok((Expr::Assignment { target,
                           value: Box::new(value) },
        rest))
}
