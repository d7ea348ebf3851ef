/// Core evaluation logic.
///
/// Contains the expression dispatch, the top-level statement entry point that
/// records `_`, and assignment with its deletion sentinel.
pub mod core;

/// Symbol evaluation.
///
/// Resolves variables through their stored definitions under the
/// self-reference guard.
pub mod symbol;

/// Unary operator evaluation logic.
///
/// Implements negation, including its pass-through for open operands.
pub mod unary;

/// Binary operator evaluation logic.
///
/// Handles integer arithmetic and partial evaluation of operands that contain
/// free variables.
pub mod binary;

/// Function evaluation.
///
/// Dispatches calls to registered native procedures and provides the
/// built-in introspection helpers.
pub mod function;
