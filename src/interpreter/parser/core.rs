use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::{
            binary::{next_binary_operator, parse_term},
            unary::parse_signed_term,
        },
        scanner::skip_space,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply an expression may nest before the parser gives up.
///
/// Parenthesized groups and call arguments each count one level, and every
/// chained operator adds one to the height of the tree it extends.
pub const MAX_DEPTH: usize = 256;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. An optional sign is
/// accepted in front of the first term only; after it, `+` and `-` combine
/// terms left-associatively.
///
/// Grammar: `expr := ['+'|'-'] term (('+'|'-') term)*`
///
/// # Parameters
/// - `buf`: Unconsumed input.
///
/// # Returns
/// The parsed expression and the input that follows it, with leading
/// whitespace already skipped.
///
/// # Errors
/// Returns `TooDeep` if the expression is taller than [`MAX_DEPTH`].
///
/// # Example
/// ```
/// use dentaku::interpreter::parser::core::parse_expression;
///
/// let (expr, rest) = parse_expression("1 - 2 - 3 )").unwrap();
/// assert_eq!(expr.to_string(), "((1 - 2) - 3)");
/// assert_eq!(rest, ")");
///
/// let deep = format!("{}1{}", "(".repeat(1000), ")".repeat(1000));
/// assert!(parse_expression(&deep).is_err());
/// ```
pub fn parse_expression(buf: &str) -> ParseResult<(Expr, &str)> {
    parse_nested_expression(buf, 0)
}

/// Parses an expression found `depth` groups or calls below the top level.
///
/// The returned tree is at most `MAX_DEPTH - depth` nodes tall.
pub(in crate::interpreter::parser) fn parse_nested_expression(buf: &str,
                                                              depth: usize)
                                                              -> ParseResult<(Expr, &str)> {
    check_depth(depth, 0)?;

    let (mut left, mut rest) = parse_signed_term(skip_space(buf), depth)?;
    let mut height = left.height();
    loop {
        rest = skip_space(rest);
        if let Some(op) = next_binary_operator(rest)
           && op.is_additive()
        {
            let (right, next) = parse_term(&rest[1..], depth)?;
            height = 1 + height.max(right.height());
            check_depth(depth, height)?;
            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right) };
            rest = next;
            continue;
        }
        break;
    }
    Ok((left, rest))
}

/// Fails once a tree of `height` placed `depth` levels down would exceed
/// [`MAX_DEPTH`].
pub(in crate::interpreter::parser) fn check_depth(depth: usize, height: usize) -> ParseResult<()> {
    if depth + height > MAX_DEPTH {
        Err(ParseError::TooDeep { limit: MAX_DEPTH })
    } else {
        Ok(())
    }
}
