use crate::interpreter::lexer::TokenKind;

#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer found a character that is neither whitespace, a digit,
    /// `*`, nor `/`.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Its 0-based position in the input line.
        position:  usize,
    },
    /// The evaluator expected a token of one kind but found another.
    UnexpectedToken {
        /// The kind the grammar required.
        expected: TokenKind,
        /// The kind that was actually found.
        found:    TokenKind,
    },
    /// Found extra tokens after the expression should have ended.
    UnexpectedTrailingTokens {
        /// The kind of the first unconsumed token.
        found: TokenKind,
    },
    /// An integer literal was too large to be represented safely.
    LiteralTooLarge {
        /// The 0-based position where the literal starts.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{character}' at position {position}.")
            },

            Self::UnexpectedToken { expected, found } => {
                write!(f, "Invalid syntax: expected {expected}, found {found}.")
            },

            Self::UnexpectedTrailingTokens { found } => write!(f,
                                                               "Extra tokens after expression. Check your input: found {found}."),

            Self::LiteralTooLarge { position } => {
                write!(f, "Integer literal at position {position} is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
