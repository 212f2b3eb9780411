use crate::error::LexError;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing an expression string.
///
/// Lexical failures and grammar violations share this type because both make
/// the expression unusable as a whole; the caller reports the error once and
/// gives up on the input. Positions are byte offsets into the expression.
pub enum ParseError {
    /// The parentheses in the input are not balanced. Detected by a scan over
    /// the whole input before any tokenizing happens.
    UnbalancedBrackets,
    /// Encountered a character that cannot start any token.
    UnknownCharacter {
        /// The offending text as written.
        character: String,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// A number literal was malformed (e.g. a second decimal point).
    MalformedNumber {
        /// The offending literal as written.
        literal:  String,
        /// Byte offset of the literal in the input.
        position: usize,
    },
    /// A scientific-notation exponent was malformed.
    MalformedExponent {
        /// The offending literal as written.
        literal:  String,
        /// Byte offset of the literal in the input.
        position: usize,
    },
    /// An identifier is neither `x` nor a built-in function name.
    UnknownIdentifier {
        /// The identifier as written.
        name:     String,
        /// Byte offset of the identifier in the input.
        position: usize,
    },
    /// An identifier exceeds the maximum supported length.
    IdentifierTooLong {
        /// The identifier as written.
        name:     String,
        /// Byte offset of the identifier in the input.
        position: usize,
    },
    /// Found a token that cannot start an operand.
    UnexpectedToken {
        /// A description of the token encountered.
        token:    String,
        /// Byte offset of the token in the input.
        position: usize,
    },
    /// Reached the end of the input while an operand was still expected.
    UnexpectedEndOfInput,
    /// A function name was not followed by `(`.
    ExpectedLeftParen {
        /// The name of the function.
        function: String,
        /// Byte offset of the function name in the input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the matching opening construct.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// A description of the first extra token.
        token:    String,
        /// Byte offset of the token in the input.
        position: usize,
    },
}

impl ParseError {
    /// Converts a lexical error into a `ParseError`, attaching its position.
    ///
    /// # Parameters
    /// - `error`: The error the lexer produced.
    /// - `position`: Byte offset of the offending token.
    /// - `slice`: The offending input text, used to fill in the character for
    ///   [`LexError::UnknownCharacter`], which carries no payload of its own.
    #[must_use]
    pub fn from_lex(error: LexError, position: usize, slice: &str) -> Self {
        match error {
            LexError::UnknownCharacter => Self::UnknownCharacter { character: slice.to_string(),
                                                                   position },
            LexError::MalformedNumber { literal } => Self::MalformedNumber { literal, position },
            LexError::MalformedExponent { literal } => {
                Self::MalformedExponent { literal, position }
            },
            LexError::UnknownIdentifier { name } => Self::UnknownIdentifier { name, position },
            LexError::IdentifierTooLong { name } => Self::IdentifierTooLong { name, position },
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedBrackets => {
                write!(f, "Error: Brackets in the expression are not balanced.")
            },

            Self::UnknownCharacter { character, position } => {
                write!(f, "Error at position {position}: Unknown character '{character}'.")
            },

            Self::MalformedNumber { literal, position } => {
                write!(f, "Error at position {position}: Malformed number literal '{literal}'.")
            },

            Self::MalformedExponent { literal, position } => {
                write!(f, "Error at position {position}: Malformed exponent in '{literal}'.")
            },

            Self::UnknownIdentifier { name, position } => {
                write!(f, "Error at position {position}: Unknown identifier '{name}'.")
            },

            Self::IdentifierTooLong { name, position } => {
                write!(f, "Error at position {position}: Identifier '{name}' is too long.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::ExpectedLeftParen { function, position } => write!(f,
                                                                     "Error at position {position}: Expected '(' after function '{function}'."),

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at position {position}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Error at position {position}: Extra tokens after expression. Check your input: {token}"),
        }
    }
}

impl std::error::Error for ParseError {}
