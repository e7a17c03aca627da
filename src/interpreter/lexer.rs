use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Only integer literals carry a payload; the operator and end-of-input
/// tokens are fully described by their kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    Integer(i128),
    /// `*`
    Mul,
    /// `/`
    Div,
    /// End of input. Once the cursor has moved past the last character the
    /// lexer produces this token on every further request.
    Eof,
}

impl Token {
    /// Returns the payload-free classification of this token.
    ///
    /// The grammar only ever compares classifications; the integer payload
    /// is read separately by the evaluator.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Mul => TokenKind::Mul,
            Self::Div => TokenKind::Div,
            Self::Eof => TokenKind::Eof,
        }
    }
}

/// The classification of a [`Token`], without any payload.
///
/// Used by the evaluator to state which token it expects next, and by parse
/// errors to report what was expected versus what was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// An integer literal.
    Integer,
    /// The `*` operator.
    Mul,
    /// The `/` operator.
    Div,
    /// End of input.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer => write!(f, "an integer"),
            Self::Mul => write!(f, "'*'"),
            Self::Div => write!(f, "'/'"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// A single-character-lookahead scanner over one line of input.
///
/// The lexer owns the input characters and a cursor that only ever moves
/// forward. `current_char` is the character under the cursor, or `None`
/// once the cursor has passed the end. A lexer is built once per input
/// line, drained by the evaluator, and then discarded; it is never rewound.
///
/// # Example
/// ```
/// use muldiv::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("6 * 7");
/// assert_eq!(lexer.get_next_token().unwrap(), Token::Integer(6));
/// assert_eq!(lexer.get_next_token().unwrap(), Token::Mul);
/// assert_eq!(lexer.get_next_token().unwrap(), Token::Integer(7));
/// assert_eq!(lexer.get_next_token().unwrap(), Token::Eof);
/// ```
#[derive(Debug)]
pub struct Lexer {
    chars: Vec<char>,
    pos: usize,
    current_char: Option<char>,
}

impl Lexer {
    /// Creates a lexer over one line of input.
    ///
    /// Never fails: an empty string simply yields [`Token::Eof`] on the
    /// first request.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let current_char = chars.first().copied();

        Self { chars, pos: 0, current_char }
    }

    /// Moves the cursor one position forward and refreshes `current_char`,
    /// setting it to `None` once the cursor has passed the last character.
    fn advance(&mut self) {
        self.pos += 1;
        self.current_char = self.chars.get(self.pos).copied();
    }

    /// Advances over any run of ASCII whitespace.
    fn skip_whitespace(&mut self) {
        while self.current_char.is_some_and(|c| c.is_ascii_whitespace()) {
            self.advance();
        }
    }

    /// Reads a (multi-digit) integer literal from the input.
    ///
    /// Accumulates consecutive ASCII digits into a string, then parses it
    /// in base 10. Literals are stored as `i128`; a literal that does not
    /// fit is rejected rather than wrapped.
    ///
    /// Precondition: `current_char` is an ASCII digit.
    ///
    /// # Errors
    /// - `ParseError::LiteralTooLarge` if the literal exceeds `i128::MAX`.
    fn read_integer(&mut self) -> Result<i128, ParseError> {
        let start = self.pos;
        let mut digits = String::new();

        while let Some(c) = self.current_char {
            if !c.is_ascii_digit() {
                break;
            }
            digits.push(c);
            self.advance();
        }

        digits.parse()
              .map_err(|_| ParseError::LiteralTooLarge { position: start })
    }

    /// Produces the next token from the input.
    ///
    /// Whitespace between tokens is skipped. Digits become
    /// [`Token::Integer`], `*` becomes [`Token::Mul`], `/` becomes
    /// [`Token::Div`], and any other character is a lexical error. At the
    /// end of the input this returns [`Token::Eof`], and keeps returning it
    /// on repeated calls.
    ///
    /// # Errors
    /// - `ParseError::InvalidCharacter` for any character that is not
    ///   whitespace, a digit, `*`, or `/`, carrying the character and its
    ///   0-based position in the line.
    /// - `ParseError::LiteralTooLarge` for an oversized integer literal.
    ///
    /// # Example
    /// ```
    /// use muldiv::{error::ParseError, interpreter::lexer::Lexer};
    ///
    /// let mut lexer = Lexer::new("3%");
    /// lexer.get_next_token().unwrap();
    /// let err = lexer.get_next_token().unwrap_err();
    /// assert!(matches!(err,
    ///                  ParseError::InvalidCharacter { character: '%', position: 1 }));
    /// ```
    pub fn get_next_token(&mut self) -> Result<Token, ParseError> {
        while let Some(c) = self.current_char {
            if c.is_ascii_whitespace() {
                self.skip_whitespace();
                continue;
            }

            if c.is_ascii_digit() {
                return Ok(Token::Integer(self.read_integer()?));
            }

            if c == '*' {
                self.advance();
                return Ok(Token::Mul);
            }

            if c == '/' {
                self.advance();
                return Ok(Token::Div);
            }

            return Err(ParseError::InvalidCharacter { character: c,
                                                      position: self.pos });
        }

        Ok(Token::Eof)
    }
}
