use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    lexer::Token,
    parser::core::{ParseResult, parse_expression},
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation binds at the
/// operand level, below every binary tier, so `-x ^ 2` parses as `(-x) ^ 2`.
/// The operator is right-associative and may be stacked: `--x` negates twice.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::Negate`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        let operand = parse_unary(tokens)?;
        Ok(Expr::Negate { operand: Box::new(operand) })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - the variable `x`
/// - function calls
/// - parenthesized expressions
///
/// This function does not handle unary operators.
/// It dispatches to specialized parsing functions depending on the leading
/// token.
///
/// Grammar:
/// ```text
///     primary := number
///              | "x"
///              | function "(" expression ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        (Token::Number(value), _) => {
            let value = *value;
            tokens.next();
            Ok(Expr::Number { value })
        },

        (Token::Variable, _) => {
            tokens.next();
            Ok(Expr::Variable)
        },

        (Token::Function(_), _) => parse_function_call(tokens),

        (Token::LParen, _) => parse_grouping(tokens),

        (tok, position) => Err(ParseError::UnexpectedToken { token:    format!("{tok:?}"),
                                                             position: *position, }),
    }
}

/// Parses a function call.
///
/// The argument must be parenthesized; `sin x` is rejected. The call consumes
/// the function token, the `(`, the argument expression and the `)`.
///
/// Grammar: `call := function "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the function token.
///
/// # Returns
/// An [`Expr::FunctionCall`] node.
///
/// # Errors
/// - `ExpectedLeftParen` if the function name is not followed by `(`.
/// - `ExpectedClosingParen` if the argument is not closed.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::Function(function), position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };

    match tokens.peek() {
        Some((Token::LParen, _)) => {
            tokens.next();
        },
        _ => {
            return Err(ParseError::ExpectedLeftParen { function: function.name().to_string(),
                                                       position: *position, });
        },
    }

    let argument = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(Expr::FunctionCall { function: *function,
                                                            argument: Box::new(argument) }),
        _ => Err(ParseError::ExpectedClosingParen { position: *position }),
    }
}

/// Parses a parenthesized grouping.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the `(` token.
///
/// # Returns
/// The inner expression; groupings leave no node of their own in the tree.
///
/// # Errors
/// - `ExpectedClosingParen` if the grouping is not closed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let Some((Token::LParen, position)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };

    let inner = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(inner),
        _ => Err(ParseError::ExpectedClosingParen { position: *position }),
    }
}
