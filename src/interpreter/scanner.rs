use logos::Logos;
use tracing::trace;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// A literal at the front of the unconsumed input.
///
/// There is no token stream: the parser asks for one literal at a time and
/// continues from the lexer's remainder. Each numeric pattern keeps eating
/// characters while they are valid digits in its base, so `0b102` scans as
/// `0b10` followed by the remainder `2`.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
enum Literal {
    /// `0b101`, `0xff`, legacy octal `017` or decimal `42`. A bare `0b` or
    /// `0x` is zero, and a lone `0` goes through the octal pattern.
    #[regex(r"0[bB][01]*", |lex| radix_value(&lex.slice()[2..], 2))]
    #[regex(r"0[xX][0-9a-fA-F]*", |lex| radix_value(&lex.slice()[2..], 16))]
    #[regex(r"0[0-7]*", |lex| radix_value(&lex.slice()[1..], 8))]
    #[regex(r"[1-9][0-9]*", |lex| radix_value(lex.slice(), 10))]
    Number(i64),
    /// Identifiers, including the dotted configuration names.
    #[regex(r"[._a-zA-Z][_a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Symbol(String),
}

/// Folds a run of digits into an `i64`, failing on overflow.
///
/// An empty run is zero.
fn radix_value(digits: &str, radix: u32) -> Option<i64> {
    digits.chars().try_fold(0_i64, |acc, c| {
                      acc.checked_mul(i64::from(radix))?
                         .checked_add(i64::from(c.to_digit(radix)?))
                  })
}

/// Returns `true` for an ASCII decimal digit.
#[must_use]
pub const fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Returns `true` for an ASCII letter or `_`.
#[must_use]
pub const fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns `true` for the intra-line whitespace the grammar ignores (space
/// and tab).
#[must_use]
pub const fn is_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Skips leading spaces and tabs. The result may be empty.
#[must_use]
pub fn skip_space(buf: &str) -> &str {
    buf.trim_start_matches(is_space)
}

/// Removes a trailing line terminator for use in diagnostics.
pub(crate) fn without_newline(buf: &str) -> &str {
    buf.trim_end_matches(['\r', '\n'])
}

/// Scans an integer literal from the start of `buf`.
///
/// The base is chosen from the prefix: `0b`/`0B` is binary, `0x`/`0X` is
/// hexadecimal, `0` followed by another digit is octal, and anything else is
/// decimal.
///
/// # Parameters
/// - `buf`: Input starting at the literal.
///
/// # Returns
/// The value and the input following the literal.
///
/// # Errors
/// - `UnexpectedToken` if `buf` does not start with a digit.
/// - `LiteralTooLarge` if the value does not fit in an `i64`.
///
/// # Example
/// ```
/// use dentaku::interpreter::scanner::scan_number;
///
/// assert_eq!(scan_number("0x1F + 1").unwrap(), (31, " + 1"));
/// assert_eq!(scan_number("017").unwrap(), (15, ""));
/// assert_eq!(scan_number("0b102").unwrap(), (2, "2"));
/// assert!(scan_number("x1").is_err());
/// ```
pub fn scan_number(buf: &str) -> ParseResult<(i64, &str)> {
    if !buf.starts_with(is_digit) {
        return Err(ParseError::UnexpectedToken { near: without_newline(buf).to_string() });
    }

    let mut lexer = Literal::lexer(buf);
    match lexer.next() {
        Some(Ok(Literal::Number(n))) => {
            trace!(literal = lexer.slice(), value = n, "scanned number");
            Ok((n, lexer.remainder()))
        },
        _ => Err(ParseError::LiteralTooLarge { literal: lexer.slice().to_string() }),
    }
}

/// Scans an identifier from the start of `buf`.
///
/// Identifiers start with a letter, `_` or `.` and continue with letters,
/// digits and `_`. Names beginning with `.` are used for configuration
/// variables such as `.printBase` but are otherwise ordinary symbols.
///
/// # Errors
/// Returns `UnexpectedToken` if `buf` does not start an identifier.
///
/// # Example
/// ```
/// use dentaku::interpreter::scanner::scan_symbol;
///
/// assert_eq!(scan_symbol(".printBase = 16").unwrap(), (".printBase".to_string(), " = 16"));
/// assert_eq!(scan_symbol("a_1(2)").unwrap(), ("a_1".to_string(), "(2)"));
/// ```
pub fn scan_symbol(buf: &str) -> ParseResult<(String, &str)> {
    if !buf.starts_with(|c| is_alpha(c) || c == '.') {
        return Err(ParseError::UnexpectedToken { near: without_newline(buf).to_string() });
    }

    let mut lexer = Literal::lexer(buf);
    match lexer.next() {
        Some(Ok(Literal::Symbol(name))) => Ok((name, lexer.remainder())),
        _ => Err(ParseError::UnexpectedToken { near: without_newline(buf).to_string() }),
    }
}
