use logos::Logos;

use crate::{ast::MathFunction, error::{LexError, ParseError}};

/// The longest identifier the lexer accepts. Longer alphabetic runs are
/// rejected before any name lookup happens.
pub const MAX_IDENTIFIER_LENGTH: usize = 9;

/// Represents a lexical token in an expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Tokens are produced on demand and handed straight to the parser; the end of
/// the input is represented by the token stream running dry rather than by a
/// dedicated token.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9.]+([eE][+-]?[0-9]*)?", lex_number)]
    Number(f64),
    /// The free variable `x`.
    #[token("x", priority = 3)]
    Variable,
    /// A built-in function name, such as `sin` or `log`.
    #[regex(r"[a-zA-Z]+", lex_function)]
    Function(MathFunction),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Validates and parses a number literal from the current token slice.
///
/// The token regex matches a maximal run of digits and dots plus an optional
/// exponent, so all malformed shapes arrive here in one piece and are rejected
/// as a unit:
/// - more than one `.` in the mantissa, or a mantissa that is only `.`,
/// - an exponent marker with no digits after it,
/// - a `.`, a letter, or a `(` directly after the exponent digits.
///
/// # Parameters
/// - `lex`: Reference to the lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexError)`: If the literal violates the rules above.
fn lex_number(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    let slice = lex.slice();
    let (mantissa, exponent) = match slice.find(['e', 'E']) {
        Some(at) => (&slice[..at], Some(&slice[at + 1..])),
        None => (slice, None),
    };

    if mantissa == "." || mantissa.bytes().filter(|&b| b == b'.').count() > 1 {
        return Err(LexError::MalformedNumber { literal: slice.to_string() });
    }

    if let Some(exponent) = exponent {
        if exponent.trim_start_matches(['+', '-']).is_empty() {
            return Err(LexError::MalformedExponent { literal: slice.to_string() });
        }
        // The original grammar forbids gluing anything number-like or a call
        // onto an exponent: `2e5.1`, `2e5x` and `2e5(` are all rejected.
        if let Some(next) = lex.remainder().chars().next()
           && (next == '.' || next == '(' || next.is_ascii_alphabetic())
        {
            return Err(LexError::MalformedExponent { literal: slice.to_string() });
        }
    }

    slice.parse()
         .map_err(|_| LexError::MalformedNumber { literal: slice.to_string() })
}

/// Resolves an alphabetic identifier run against the built-in function set.
///
/// The variable `x` never reaches this callback; it is matched by its own
/// higher-priority token rule.
///
/// # Parameters
/// - `lex`: Reference to the lexer at the current token.
///
/// # Returns
/// - `Ok(MathFunction)`: If the identifier names a built-in function.
/// - `Err(LexError)`: If it is too long or unknown.
fn lex_function(lex: &logos::Lexer<Token>) -> Result<MathFunction, LexError> {
    let name = lex.slice();
    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(LexError::IdentifierTooLong { name: name.to_string() });
    }
    MathFunction::from_name(name).ok_or_else(|| {
                                     LexError::UnknownIdentifier { name: name.to_string() }
                                 })
}

/// Checks whether the parentheses in an expression are balanced.
///
/// Runs a simple counter over the whole input: every `(` increments, every
/// `)` decrements, and the check fails if the counter ever goes negative or
/// ends non-zero. This runs once, before any tokenizing.
///
/// # Parameters
/// - `expression`: The full expression text.
///
/// # Returns
/// `true` if every `)` closes an earlier `(` and none are left open.
///
/// # Example
/// ```
/// use fplot::lexer::brackets_balanced;
///
/// assert!(brackets_balanced("sin(x) * (1 + x)"));
/// assert!(!brackets_balanced("(2 + 3"));
/// assert!(!brackets_balanced("2 + 3)"));
/// ```
#[must_use]
pub fn brackets_balanced(expression: &str) -> bool {
    let mut open = 0_u32;
    for character in expression.chars() {
        match character {
            '(' => open += 1,
            ')' => {
                if open == 0 {
                    return false;
                }
                open -= 1;
            },
            _ => {},
        }
    }
    open == 0
}

/// Tokenizes a whole expression, pairing every token with its byte offset.
///
/// The bracket-balance check runs first; afterwards tokens are collected in
/// order. The first lexical error aborts tokenizing and is surfaced as a
/// [`ParseError`] with the position and text of the offending slice attached.
///
/// # Errors
/// Returns a `ParseError` if the brackets are unbalanced or any part of the
/// input fails to lex.
///
/// # Example
/// ```
/// use fplot::lexer::tokenize;
///
/// let tokens = tokenize("2 + x").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert!(tokenize("3.5.2").is_err());
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    if !brackets_balanced(expression) {
        return Err(ParseError::UnbalancedBrackets);
    }

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span().start)),
            Err(e) => return Err(ParseError::from_lex(e, lexer.span().start, lexer.slice())),
        }
    }

    Ok(tokens)
}
