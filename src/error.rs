/// Lexical errors.
///
/// Defines the error type produced while tokenizing an expression: unknown
/// characters, malformed number literals and exponents, and identifiers that
/// are unrecognized or too long.
pub mod lex_error;
/// Limits errors.
///
/// Contains the error type for parsing a plot-bounds string of the form
/// `xmin:xmax:ymin:ymax`.
pub mod limits_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning an expression string
/// into a syntax tree. Parse errors cover both lexical failures (carried over
/// with their position in the input) and grammar violations such as missing
/// parentheses or trailing tokens.
pub mod parse_error;

pub use lex_error::LexError;
pub use limits_error::LimitsError;
pub use parse_error::ParseError;
