//! # muldiv
//!
//! muldiv is a tiny arithmetic expression evaluator. It reads a line of
//! text containing non-negative integers combined with `*` and `/`, and
//! evaluates the chain left to right with both operators at one precedence
//! level. There are no parentheses, no addition or subtraction, and no
//! state that survives past a single line.
//!
//! Results are `i128`; division is floor division.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::CalcError,
    interpreter::{evaluator::Evaluator, lexer::Lexer},
};

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating an input line, and a single [`error::CalcError`] surface
/// that both kinds convert into.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Attaches character positions and token kinds for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the tokenize-and-evaluate pipeline.
///
/// This module ties the lexer and the recursive-descent evaluator together.
/// The lexer produces tokens on demand; the evaluator pulls them through a
/// one-token lookahead and folds the result in a single pass.
///
/// # Responsibilities
/// - Declares the lexer and evaluator components.
/// - Manages the flow of tokens and errors between the two.
pub mod interpreter;

/// Evaluates one line of input and returns the integer result.
///
/// A fresh lexer/evaluator pair is built for every call, so repeated calls
/// with the same input are independent and yield the same outcome.
///
/// # Errors
/// Returns a [`CalcError`] if the line contains an invalid character, does
/// not match the grammar, leaves trailing input, divides by zero, or
/// overflows.
///
/// # Examples
/// ```
/// use muldiv::evaluate;
///
/// assert_eq!(evaluate("6 * 7").unwrap(), 42);
/// assert_eq!(evaluate("100/3/3").unwrap(), 11);
///
/// // Division by zero is an error, not a value.
/// assert!(evaluate("5 / 0").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<i128, CalcError> {
    let lexer = Lexer::new(source);
    let mut evaluator = Evaluator::new(lexer)?;

    evaluator.expression()
}
