use muldiv::{
    error::{CalcError, ParseError, RuntimeError},
    evaluate,
    interpreter::{
        evaluator::Evaluator,
        lexer::{Lexer, Token, TokenKind},
    },
};

fn assert_evaluates(src: &str, expected: i128) {
    match evaluate(src) {
        Ok(value) => {
            assert_eq!(value, expected,
                       "Expression {src:?} evaluated to {value}, expected {expected}")
        },
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> CalcError {
    match evaluate(src) {
        Ok(value) => panic!("Expression {src:?} succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn single_integer() {
    assert_evaluates("42", 42);
    assert_evaluates("0", 0);
    assert_evaluates("007", 7);
}

#[test]
fn multiplication_chains() {
    assert_evaluates("6*7", 42);
    assert_evaluates("2*3*4", 24);
    assert_evaluates("1*1*1*1*1", 1);
    assert_evaluates("0*5", 0);
}

#[test]
fn division_is_floor_division() {
    assert_evaluates("7/2", 3);
    assert_evaluates("100/3/3", 11);
    assert_evaluates("0/5", 0);
    assert_evaluates("9/10", 0);
}

#[test]
fn operators_apply_left_to_right() {
    assert_evaluates("12/3*4", 16);
    assert_evaluates("8*3/2/3", 4);
    // 10/4 floors to 2 before the multiplication; right-to-left grouping
    // would give 0 and post-hoc truncation would give 15.
    assert_evaluates("10 / 4 * 6", 12);
}

#[test]
fn whitespace_between_tokens_is_ignored() {
    assert_evaluates("  6  *   7 ", 42);
    assert_evaluates("\t12/3\t*4\t", 16);
    assert_evaluates("6 *7", 42);
}

#[test]
fn large_literals_fit_in_i128() {
    assert_evaluates("9223372036854775808 * 2", 18_446_744_073_709_551_616);
}

#[test]
fn division_by_zero_is_error() {
    let err = assert_failure("5/0");
    assert!(matches!(err, CalcError::Runtime(RuntimeError::DivisionByZero)));

    // The left factor is folded before the failing division is reached.
    let err = assert_failure("3*4/0*2");
    assert!(matches!(err, CalcError::Runtime(RuntimeError::DivisionByZero)));
}

#[test]
fn overflowing_product_is_error() {
    let err = assert_failure("170141183460469231731687303715884105727 * 2");
    assert!(matches!(err, CalcError::Runtime(RuntimeError::Overflow)));
}

#[test]
fn oversized_literal_is_error() {
    let err = assert_failure("170141183460469231731687303715884105728");
    assert!(matches!(err,
                     CalcError::Parse(ParseError::LiteralTooLarge { position: 0 })));

    // A literal deeper into the line is reported at its starting position,
    // not at the cursor position where scanning stopped.
    let err = assert_failure("2 * 1701411834604692317316873037158841057280");
    assert!(matches!(err,
                     CalcError::Parse(ParseError::LiteralTooLarge { position: 4 })));
}

#[test]
fn invalid_character_is_error() {
    let err = assert_failure("3*a");
    assert!(matches!(err,
                     CalcError::Parse(ParseError::InvalidCharacter { character: 'a',
                                                                     position: 2 })));

    let err = assert_failure("1 + 2");
    assert!(matches!(err,
                     CalcError::Parse(ParseError::InvalidCharacter { character: '+', .. })));
}

#[test]
fn dangling_operator_is_error() {
    let err = assert_failure("3 *");
    assert!(matches!(err,
                     CalcError::Parse(ParseError::UnexpectedToken { expected: TokenKind::Integer,
                                                                    found: TokenKind::Eof })));

    let err = assert_failure("* 3");
    assert!(matches!(err,
                     CalcError::Parse(ParseError::UnexpectedToken { expected: TokenKind::Integer,
                                                                    found: TokenKind::Mul })));
}

#[test]
fn trailing_input_is_error() {
    let err = assert_failure("3 4");
    assert!(matches!(err,
                     CalcError::Parse(ParseError::UnexpectedTrailingTokens { found: TokenKind::Integer })));
}

#[test]
fn empty_input_is_error_at_the_core() {
    // The driver skips blank lines before constructing a pipeline; the
    // core itself reports a plain syntax error if handed one anyway.
    for src in ["", "   ", " \t "] {
        let err = assert_failure(src);
        assert!(matches!(err,
                         CalcError::Parse(ParseError::UnexpectedToken { expected: TokenKind::Integer,
                                                                        found: TokenKind::Eof })));
    }
}

#[test]
fn evaluation_is_idempotent() {
    assert_eq!(evaluate("12/3*4").unwrap(), evaluate("12/3*4").unwrap());

    let first = assert_failure("5/0");
    let second = assert_failure("5/0");
    assert!(matches!(first, CalcError::Runtime(RuntimeError::DivisionByZero)));
    assert!(matches!(second, CalcError::Runtime(RuntimeError::DivisionByZero)));
}

#[test]
fn lexer_keeps_yielding_eof_after_end() {
    let mut lexer = Lexer::new("5");
    assert_eq!(lexer.get_next_token().unwrap(), Token::Integer(5));
    assert_eq!(lexer.get_next_token().unwrap(), Token::Eof);
    assert_eq!(lexer.get_next_token().unwrap(), Token::Eof);
}

#[test]
fn evaluator_over_explicit_pipeline() {
    let lexer = Lexer::new("12 / 3 * 4");
    let mut evaluator = Evaluator::new(lexer).expect("priming the lookahead failed");
    assert_eq!(evaluator.expression().unwrap(), 16);
}

#[test]
fn lexical_error_can_surface_at_construction() {
    let err = Evaluator::new(Lexer::new("?")).unwrap_err();
    assert!(matches!(err,
                     ParseError::InvalidCharacter { character: '?', position: 0 }));
}
