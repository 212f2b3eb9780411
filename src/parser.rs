/// Core parsing logic.
///
/// Contains the shared `ParseResult` alias and the entry point that descends
/// into the precedence hierarchy.
pub mod core;

/// Unary and primary parsing.
///
/// Handles prefix negation, literals, the variable, function calls, and
/// parenthesized groupings.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence tiers: additive (`+`, `-`)
/// and multiplicative (`*`, `/`, `^`).
pub mod binary;
