//! # fplot
//!
//! fplot turns a mathematical expression in one variable into a one-page
//! PostScript plot. It lexes, parses, and evaluates expressions such as
//! `sin(x) * x ^ 2`, samples them over a configurable window, and draws the
//! curve together with axes, a unit grid, and the window boundary.

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

use crate::{ast::Expr, error::ParseError, lexer::tokenize, parser::core::parse_expression as parse_tokens};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator and the plotter.
///
/// # Responsibilities
/// - Defines node types for literals, the variable, negation, binary
///   operations, and function calls.
/// - Defines the closed sets of binary operators and built-in functions.
pub mod ast;
/// Provides unified error types for lexing, parsing, and limits handling.
///
/// This module defines all errors that can be raised while turning user input
/// into an expression tree or a plot window. It standardizes error reporting
/// and carries detailed information about failures, including byte positions
/// in the input where they apply.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, limits).
/// - Attaches positions and the offending text for user feedback.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Evaluates expression trees.
///
/// Walks an expression tree at a concrete value of `x` and returns the
/// result. Evaluation follows IEEE 754 throughout, so it never fails;
/// non-finite values propagate to the caller.
pub mod evaluator;
/// Turns expression text into tokens.
///
/// Defines the token set and the tokenizing entry point, including the
/// bracket-balance pre-check and the validation rules for number literals
/// and identifiers.
pub mod lexer;
/// The visible window of the coordinate plane.
///
/// Defines the `Limits` rectangle, its default window, and parsing from a
/// `xmin:xmax:ymin:ymax` string.
pub mod limits;
/// Builds expression trees from tokens.
///
/// Implements a recursive-descent parser over the token stream, organized by
/// precedence tier: additive, multiplicative, unary, primary.
pub mod parser;
/// Renders plots as PostScript.
///
/// Computes page geometry for a plot window and writes the full document:
/// prologue, axes, boundary, grid, and the sampled function curve.
pub mod plot;

/// Parses an expression string into an expression tree.
///
/// This is the main entry point of the crate: it checks bracket balance,
/// tokenizes the whole input, parses one expression, and rejects anything
/// left over afterwards.
///
/// # Errors
/// Returns a [`ParseError`] if the input fails to lex, violates the grammar,
/// or has trailing tokens after a complete expression.
///
/// # Examples
/// ```
/// use fplot::parse_expression;
///
/// assert!(parse_expression("sin(x) * x ^ 2").is_ok());
/// assert!(parse_expression("2 +").is_err());
/// assert!(parse_expression("2 2").is_err());
/// ```
pub fn parse_expression(source: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let expression = parse_tokens(&mut iter)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    format!("{token:?}"),
                                                          position: *position, });
    }

    Ok(expression)
}
