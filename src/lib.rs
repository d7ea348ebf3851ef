//! # dentaku
//!
//! dentaku is a line-oriented integer calculator with variables, written in
//! Rust. Each line is parsed into an expression tree, evaluated against a
//! session [`Environment`], and printed in the radix selected by the
//! `.printBase` variable.
//!
//! Variables are bound lazily: `a = a + 1` stores the expression `a + 1`, and
//! every later use of `a` evaluates it again with the inner `a` read as zero.
//! Expressions over unbound variables are simplified as far as possible
//! instead of failing, so `x + 2 * 3` evaluates to `(x + 6)`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::trace;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and the operator types that represent
/// a statement as a tree. The same type is used for parser output, evaluation
/// results and stored variable definitions.
///
/// # Responsibilities
/// - Defines the six expression variants and the operator enums.
/// - Provides the textual form used when printing non-numeric results.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning, parsing,
/// evaluating or printing a line, plus the `Error` type that wraps both
/// families for the line-level API.
///
/// # Responsibilities
/// - Defines error enums for every failure mode.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the processing of one line.
///
/// This module ties together scanning, parsing, the environment, evaluation
/// and printing.
pub mod interpreter;

pub use ast::Expr;
pub use error::{Error, ParseError, RuntimeError};
pub use interpreter::{
    environment::{Environment, LAST_INPUT, NativeProcedure, PRINT_BASE, UNDEF},
    evaluator::{
        core::{EvalResult, MAX_EVAL_DEPTH},
        function::core::{BUILTIN_FUNCTIONS, register_builtins},
    },
    parser::core::{MAX_DEPTH, ParseResult},
    printer::print,
};

/// Parses one line into a statement.
///
/// Returns the statement and the unconsumed remainder of `line`. For a
/// well-formed line the remainder is empty or just the line terminator;
/// anything else is trailing input the grammar did not accept.
///
/// # Errors
/// Returns a [`ParseError`] if the line is not a valid statement.
///
/// # Example
/// ```
/// let (stmt, rest) = dentaku::read("2 + 3 * 4\n").unwrap();
/// assert_eq!(stmt.to_string(), "(2 + (3 * 4))");
/// assert_eq!(rest, "\n");
/// ```
pub fn read(line: &str) -> ParseResult<(Expr, &str)> {
    interpreter::parser::statement::parse_statement(line)
}

/// The outcome of processing one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The parsed statement.
    pub statement: Expr,
    /// The evaluated result.
    pub value:     Expr,
    /// `value` rendered by [`print`].
    pub printed:   String,
    /// Input the parser did not consume, without the line terminator. Empty
    /// when the whole line was accepted.
    pub unparsed:  String,
}

/// Reads, evaluates and prints one line.
///
/// This is the per-line entry point for hosts. A failure aborts only this
/// line: the environment keeps every binding made before the failure and the
/// next call proceeds normally.
///
/// # Errors
/// Returns an error if parsing, evaluation or printing fails.
///
/// # Examples
/// ```
/// use dentaku::{Environment, get_result};
///
/// let mut env = Environment::new();
///
/// assert_eq!(get_result("a = 1", &mut env).unwrap().printed, "1");
/// assert_eq!(get_result("a = a + 1", &mut env).unwrap().printed, "2");
/// assert_eq!(get_result("a", &mut env).unwrap().printed, "1");
///
/// // A failing line leaves the session usable.
/// assert!(get_result("1 / 0", &mut env).is_err());
/// assert_eq!(get_result("x + 1", &mut env).unwrap().printed, "(x + 1)");
/// ```
pub fn get_result(line: &str, env: &mut Environment) -> Result<Evaluation, Error> {
    let (statement, rest) = read(line)?;
    let value = env.eval_statement(&statement)?;
    let printed = print(&value, env)?;
    trace!(%statement, %printed, "line processed");

    Ok(Evaluation { statement,
                    value,
                    printed,
                    unparsed: rest.trim_end_matches(['\r', '\n']).to_string() })
}
