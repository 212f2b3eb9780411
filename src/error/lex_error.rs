#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Represents all errors that can occur while tokenizing an expression.
///
/// The lexer reports these without positions; the tokenizing boundary attaches
/// the byte offset of the offending token when it converts them into
/// [`ParseError`](crate::error::ParseError) values.
pub enum LexError {
    /// Encountered a character that cannot start any token.
    #[default]
    UnknownCharacter,
    /// A number literal was malformed (e.g. a second decimal point).
    MalformedNumber {
        /// The offending literal as written.
        literal: String,
    },
    /// A scientific-notation exponent was malformed (no digits, or a `.`,
    /// letter, or `(` directly after the exponent digits).
    MalformedExponent {
        /// The offending literal as written.
        literal: String,
    },
    /// An identifier is neither `x` nor a built-in function name.
    UnknownIdentifier {
        /// The identifier as written.
        name: String,
    },
    /// An identifier exceeds the maximum supported length.
    IdentifierTooLong {
        /// The identifier as written.
        name: String,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter => write!(f, "Unknown character."),

            Self::MalformedNumber { literal } => {
                write!(f, "Malformed number literal '{literal}'.")
            },

            Self::MalformedExponent { literal } => {
                write!(f, "Malformed exponent in '{literal}'.")
            },

            Self::UnknownIdentifier { name } => {
                write!(f, "Unknown identifier '{name}'.")
            },

            Self::IdentifierTooLong { name } => {
                write!(f, "Identifier '{name}' is too long.")
            },
        }
    }
}

impl std::error::Error for LexError {}
