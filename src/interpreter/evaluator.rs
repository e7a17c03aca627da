use crate::{
    error::{CalcError, ParseError, RuntimeError},
    interpreter::lexer::{Lexer, Token, TokenKind},
};

/// A recursive-descent evaluator over the token stream of a [`Lexer`].
///
/// The evaluator drives a two-level grammar and folds the result as it
/// goes; no syntax tree is built:
///
/// ```text
/// expression := term (("*" | "/") term)*
/// term       := INTEGER
/// ```
///
/// Both operators share one precedence level and associate to the left, so
/// a single iterative loop over `term`s suffices. The evaluator holds
/// exactly one lookahead token, which between grammar steps is always the
/// lexer's next unconsumed token. One evaluator is built per input line
/// and discarded after producing its result.
///
/// # Example
/// ```
/// use muldiv::interpreter::{evaluator::Evaluator, lexer::Lexer};
///
/// let mut evaluator = Evaluator::new(Lexer::new("12 / 3 * 4")).unwrap();
/// assert_eq!(evaluator.expression().unwrap(), 16);
/// ```
#[derive(Debug)]
pub struct Evaluator {
    lexer: Lexer,
    current_token: Token,
}

impl Evaluator {
    /// Creates an evaluator over the given lexer, priming the lookahead
    /// with the first token.
    ///
    /// # Errors
    /// Any lexical error hit while reading the first token.
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.get_next_token()?;

        Ok(Self { lexer, current_token })
    }

    /// Consumes the lookahead token if it has the expected kind, replacing
    /// it with the lexer's next token. This is the only way evaluator state
    /// changes after construction.
    ///
    /// # Errors
    /// - `ParseError::UnexpectedToken` if the lookahead has a different
    ///   kind than expected.
    /// - Any lexical error hit while reading the replacement token.
    fn consume(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.current_token.kind() == expected {
            self.current_token = self.lexer.get_next_token()?;
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken { expected,
                                              found: self.current_token.kind() })
        }
    }

    /// Evaluates a term, the value of a single integer literal.
    ///
    /// Grammar: `term := INTEGER`
    ///
    /// # Errors
    /// `ParseError::UnexpectedToken` if the lookahead is not an integer.
    fn term(&mut self) -> Result<i128, ParseError> {
        let Token::Integer(value) = self.current_token else {
            return Err(ParseError::UnexpectedToken { expected: TokenKind::Integer,
                                                     found: self.current_token.kind() });
        };
        self.consume(TokenKind::Integer)?;

        Ok(value)
    }

    /// Evaluates a full expression and returns its integer result.
    ///
    /// Grammar: `expression := term (("*" | "/") term)*`
    ///
    /// Operators are applied strictly left to right as terms arrive.
    /// Division is floor division (`div_euclid`); for the non-negative
    /// operands this grammar admits it coincides with truncation. The
    /// entire input must be consumed: a token remaining after the operator
    /// loop is rejected rather than silently ignored.
    ///
    /// # Errors
    /// - `ParseError::UnexpectedToken` where the grammar expected an
    ///   integer and found something else.
    /// - `ParseError::UnexpectedTrailingTokens` if input remains after the
    ///   expression.
    /// - `RuntimeError::DivisionByZero` if a divisor evaluates to zero.
    /// - `RuntimeError::Overflow` if a product exceeds the `i128` range.
    ///
    /// # Example
    /// ```
    /// use muldiv::interpreter::{evaluator::Evaluator, lexer::Lexer};
    ///
    /// let mut evaluator = Evaluator::new(Lexer::new("7 / 2")).unwrap();
    /// assert_eq!(evaluator.expression().unwrap(), 3);
    /// ```
    pub fn expression(&mut self) -> Result<i128, CalcError> {
        let mut result = self.term()?;

        while matches!(self.current_token.kind(), TokenKind::Mul | TokenKind::Div) {
            let operator = self.current_token.kind();
            self.consume(operator)?;
            let right = self.term()?;

            result = match operator {
                TokenKind::Mul => {
                    result.checked_mul(right).ok_or(RuntimeError::Overflow)?
                },
                TokenKind::Div => {
                    if right == 0 {
                        return Err(RuntimeError::DivisionByZero.into());
                    }
                    result.div_euclid(right)
                },
                TokenKind::Integer | TokenKind::Eof => unreachable!(),
            };
        }

        if self.current_token.kind() != TokenKind::Eof {
            let found = self.current_token.kind();
            return Err(ParseError::UnexpectedTrailingTokens { found }.into());
        }

        Ok(result)
    }
}
