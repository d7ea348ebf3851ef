/// Call dispatch and the built-in table.
///
/// Looks up native procedures and registers the helpers below.
pub mod core;
/// The `dump` helper.
///
/// Returns the debug representation of an expression or of a variable's
/// stored definition.
pub mod dump;
/// The `print` helper.
///
/// Returns the textual form of an expression or of a variable's stored
/// definition.
pub mod print;
