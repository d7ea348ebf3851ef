/// Variable and function bindings for a session.
///
/// Declares the `Environment` that holds unevaluated variable definitions
/// and registered native procedures, together with the reserved names
/// (`.printBase`, `_`, `undef`).
pub mod environment;
/// The evaluator module walks expression trees and computes results.
///
/// The evaluator reduces expressions against an `Environment`, performs
/// integer arithmetic, partially evaluates expressions over free variables,
/// and applies the lazy assignment and self-reference rules.
///
/// # Responsibilities
/// - Evaluates every expression variant.
/// - Guards self-referential definitions against infinite recursion.
/// - Reports runtime errors such as division by zero or unknown functions.
pub mod evaluator;
/// The parser module builds expression trees from a line of text.
///
/// The parser is a hand-written recursive descent over the raw line. It pulls
/// literals from the scanner on demand and returns the unconsumed remainder
/// alongside the tree.
///
/// # Responsibilities
/// - Implements the statement, expression, term and factor rules.
/// - Validates parenthesis balance and assignment targets.
pub mod parser;
/// Rendering of evaluation results.
///
/// Formats numbers in the radix selected by `.printBase` and falls back to
/// the textual form for every other expression.
pub mod printer;
/// Character classes and literal scanning.
///
/// Provides the predicates and the on-demand literal extraction the parser
/// is built on.
pub mod scanner;
