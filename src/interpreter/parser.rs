/// Expression entry point and shared parser types.
///
/// Contains the `expr` rule, which handles the optional leading sign and the
/// additive level, and the `ParseResult` alias.
pub mod core;

/// Signed terms and atoms.
///
/// Handles the optional leading `+`/`-` of an expression and the `factor`
/// rule: numbers, symbols, parenthesized groups and function calls.
pub mod unary;

/// Binary operator levels.
///
/// Implements the left-associative `term` rule for `*` and `/`, and the
/// operator lookahead shared with the additive loop.
pub mod binary;

/// Statement parsing.
///
/// Parses a full line: an expression optionally followed by `=` and a
/// right-hand side, validating the assignment target.
pub mod statement;
