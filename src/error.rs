/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// input line. Parse errors include invalid characters, unexpected tokens,
/// trailing input, and oversized integer literals — any issue detected
/// before a value is computed.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while computing the result
/// of an expression: division by zero and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// The single error surface returned by [`crate::evaluate`].
///
/// Evaluating a line can fail while tokenizing/parsing or while computing,
/// and callers usually want to branch on which. Both underlying error types
/// convert into this one via `From`, so `?` works across the whole
/// pipeline.
pub enum CalcError {
    /// The input could not be tokenized or did not match the grammar.
    Parse(ParseError),
    /// The expression was well-formed but could not be computed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for CalcError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for CalcError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
