/// The evaluator module consumes tokens and computes results.
///
/// The evaluator is a recursive-descent procedure pair (a term reader and
/// an expression reader) that pulls tokens from the lexer on demand and
/// folds them into a single integer, left to right. No syntax tree is
/// retained; parsing and evaluation happen in one pass.
///
/// # Responsibilities
/// - Enforces the `expression := term (("*" | "/") term)*` grammar.
/// - Applies multiplication and floor division left-associatively.
/// - Reports syntax errors, division by zero, and overflow.
pub mod evaluator;
/// The lexer module tokenizes an input line for the evaluator.
///
/// The lexer (tokenizer) reads the raw text one character at a time and
/// produces tokens on demand: integer literals, the `*` and `/` operators,
/// and an end-of-input marker. This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens.
/// - Skips whitespace and decodes multi-digit integer literals.
/// - Reports lexical errors with the offending character and position.
pub mod lexer;
