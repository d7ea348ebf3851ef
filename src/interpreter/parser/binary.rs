use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        parser::{
            core::{ParseResult, check_depth},
            unary::parse_primary,
        },
        scanner::skip_space,
    },
};

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*` and `/`, so `8 / 2 / 2` is
/// `((8 / 2) / 2)`.
///
/// The rule is: `term := factor (('*'|'/') factor)*`
///
/// # Parameters
/// - `buf`: Unconsumed input positioned at the first factor.
/// - `depth`: Group and call nesting of the enclosing expression.
///
/// # Returns
/// A binary expression tree combining factor-level nodes, and the remaining
/// input with leading whitespace skipped.
pub(crate) fn parse_term(buf: &str, depth: usize) -> ParseResult<(Expr, &str)> {
    let (mut left, mut rest) = parse_primary(buf, depth)?;
    let mut height = left.height();
    loop {
        rest = skip_space(rest);
        if let Some(op) = next_binary_operator(rest)
           && op.is_multiplicative()
        {
            let (right, next) = parse_primary(&rest[1..], depth)?;
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

/// Peeks at the next character and maps it to a binary operator.
///
/// Returns `None` at the end of input or when the character is not one of
/// `+ - * /`. Nothing is consumed; callers skip the single operator byte
/// themselves.
pub(in crate::interpreter::parser) fn next_binary_operator(buf: &str) -> Option<BinaryOperator> {
    buf.chars()
       .next()
       .and_then(|c| BinaryOperator::try_from(c).ok())
}
