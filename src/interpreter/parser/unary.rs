use tracing::trace;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::{
            binary::parse_term,
            core::{ParseResult, check_depth, parse_nested_expression},
        },
        scanner::{is_alpha, is_digit, scan_number, scan_symbol, skip_space, without_newline},
    },
};

/// Parses the first term of an expression with its optional sign.
///
/// A leading `-` wraps the whole term, so `-2 * 3` becomes `-(2 * 3)`. A
/// leading `+` is consumed and produces no node. Signs are only recognized
/// here: `2 * -3` and `--3` are syntax errors.
///
/// Grammar: `signed := ['+'|'-'] term`
///
/// # Parameters
/// - `buf`: Input positioned at the start of an expression.
/// - `depth`: Group and call nesting of the expression.
///
/// # Returns
/// An [`Expr::UnaryOp`] or the bare term, with the remaining input.
pub(crate) fn parse_signed_term(buf: &str, depth: usize) -> ParseResult<(Expr, &str)> {
    if let Some(rest) = buf.strip_prefix('-') {
        let (expr, rest) = parse_term(rest, depth)?;
        check_depth(depth, expr.height() + 1)?;
        Ok((Expr::UnaryOp { op:   UnaryOperator::Negate,
                            expr: Box::new(expr), },
            rest))
    } else if let Some(rest) = buf.strip_prefix('+') {
        parse_term(rest, depth)
    } else {
        parse_term(buf, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar and include:
/// - integer literals in base 2, 8, 10 or 16
/// - symbols
/// - function calls
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     factor := number
///             | symbol
///             | '(' expr ')'
///             | symbol '(' expr ')'
/// ```
/// # Parameters
/// - `buf`: Input positioned at the start of a factor.
/// - `depth`: Group and call nesting of the enclosing expression.
///
/// # Returns
/// The parsed [`Expr`] and the input that follows it.
///
/// # Errors
/// - `UnexpectedEndOfInput` if nothing but a line terminator is left.
/// - `UnexpectedToken` for any character that cannot start a factor.
/// - Errors from the literal scanners and nested expressions.
pub(crate) fn parse_primary(buf: &str, depth: usize) -> ParseResult<(Expr, &str)> {
    let buf = skip_space(buf);

    match buf.chars().next() {
        Some('(') => parse_grouping(buf, depth),
        Some(c) if is_digit(c) => {
            let (n, rest) = scan_number(buf)?;
            Ok((Expr::Number(n), rest))
        },
        Some(c) if is_alpha(c) || c == '.' => parse_symbol_or_call(buf, depth),
        _ if without_newline(buf).is_empty() => Err(ParseError::UnexpectedEndOfInput),
        _ => Err(ParseError::UnexpectedToken { near: without_newline(buf).to_string() }),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `group := '(' expr ')'`
///
/// # Errors
/// Returns `UnbalancedParen` if the closing `)` is missing.
fn parse_grouping(buf: &str, depth: usize) -> ParseResult<(Expr, &str)> {
    let (expr, rest) = parse_nested_expression(&buf[1..], depth + 1)?;
    match skip_space(rest).strip_prefix(')') {
        Some(rest) => Ok((expr, rest)),
        None => Err(ParseError::UnbalancedParen { near: without_newline(buf).to_string() }),
    }
}

/// Parses a symbol, or a function call if the symbol is followed by `(`.
///
/// Whitespace is allowed between the name and the parenthesis, so `f (1)`
/// is a call. Calls take exactly one argument expression.
///
/// Grammar: `symbol_or_call := symbol ['(' expr ')']`
///
/// # Errors
/// Returns `UnbalancedParen` if a call's closing `)` is missing.
fn parse_symbol_or_call(buf: &str, depth: usize) -> ParseResult<(Expr, &str)> {
    let (name, rest) = scan_symbol(buf)?;
    let rest = skip_space(rest);

    let Some(inner) = rest.strip_prefix('(') else {
        return Ok((Expr::Symbol(name), rest));
    };

    let (argument, rest) = parse_nested_expression(inner, depth + 1)?;
    match skip_space(rest).strip_prefix(')') {
        Some(rest) => {
            trace!(function = %name, "parsed call");
            Ok((Expr::FunctionCall { name,
                                     argument: Box::new(argument) },
                rest))
        },
        None => Err(ParseError::UnbalancedParen { near: without_newline(buf).to_string() }),
    }
}
