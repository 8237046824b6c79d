//! Tests for the engine session and the full parse pipeline.

use pointd_test::expressions::{MALFORMED_EXPRESSIONS, VALID_EXPRESSIONS};
use pointd_test::MalformedKind;

use crate::engine::{parse, Engine};
use crate::error::{ArityError, EngineError};
use crate::token::{precedence, Operator, Token, TokenKind};
use crate::warning::Warning;

fn kind_of(err: &EngineError) -> Option<MalformedKind> {
    match err {
        EngineError::Arity(ArityError::MismatchedParentheses) => {
            Some(MalformedKind::MismatchedParentheses)
        }
        EngineError::Arity(ArityError::MissingOperands(_)) => Some(MalformedKind::MissingOperands),
        EngineError::Arity(ArityError::TooManyArguments) => Some(MalformedKind::TooManyArguments),
        EngineError::Arity(ArityError::EmptyExpression) => Some(MalformedKind::EmptyExpression),
        EngineError::InvalidNumber(_) => Some(MalformedKind::InvalidNumber),
        _ => None,
    }
}

#[test]
fn test_valid_expressions() {
    let mut engine = Engine::new();
    for case in VALID_EXPRESSIONS {
        let value = engine
            .parse(case.input)
            .unwrap_or_else(|e| panic!("{:?} failed: {}", case.input, e));
        assert!(
            (value - case.expected).abs() < 1e-9,
            "{:?} = {}, expected {}",
            case.input,
            value,
            case.expected
        );
    }
    assert!(!engine.has_warning());
}

#[test]
fn test_malformed_expressions() {
    for case in MALFORMED_EXPRESSIONS {
        let err = parse(case.input).expect_err(case.input);
        assert_eq!(kind_of(&err), Some(case.kind), "{:?}: {}", case.input, err);
    }
}

#[test]
fn test_parse_is_repeatable() {
    let mut engine = Engine::new();
    let first = engine.parse("12+8*2").unwrap();
    let _ = engine.parse("(1+2");
    let second = engine.parse("12+8*2").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_division_by_zero_passes_through() {
    let value = parse("5/0").unwrap();
    assert!(!value.is_finite());
}

#[test]
fn test_warning_survives_until_cleared() {
    let mut engine = Engine::new();
    assert_eq!(engine.parse("4#").unwrap(), 4.0);
    assert_eq!(engine.warning(), Some(&Warning::UnknownCharacter('#')));

    engine.parse("5?").unwrap();
    assert_eq!(engine.warning(), Some(&Warning::UnknownCharacter('#')));

    engine.clear_warning();
    assert!(engine.warning().is_none());
    engine.parse("6").unwrap();
    assert!(!engine.has_warning());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        parse("(1+2").unwrap_err().to_string(),
        "Mismatched parentheses!"
    );
    assert_eq!(
        parse("2+*3").unwrap_err().to_string(),
        "Operator + needs more arguments!"
    );
    assert_eq!(parse("2 3").unwrap_err().to_string(), "Too many arguments.");
}

#[test]
fn test_token_join_conflict() {
    let err = Token::number("1").join(Token::operator("+")).unwrap_err();
    assert!(matches!(err, EngineError::TokenConflict { .. }));
    assert!(err.to_string().starts_with("Cannot join tokens of different types."));

    let err = Token::open_bracket().join(Token::open_bracket()).unwrap_err();
    assert!(matches!(err, EngineError::TokenConflict { .. }));
}

#[test]
fn test_precedence_table() {
    assert_eq!(precedence("*"), 3);
    assert_eq!(precedence("/"), 3);
    assert_eq!(precedence("+"), 2);
    assert_eq!(precedence("-"), 2);
    assert_eq!(precedence("("), 1);
    assert_eq!(Token::number("3").precedence(), None);
    assert_eq!(Token::operator("*").precedence(), Some(3));
    assert_eq!(Operator::Divide.symbol(), '/');
}

#[test]
fn test_classify() {
    assert_eq!(TokenKind::classify('7'), Some(TokenKind::Number));
    assert_eq!(TokenKind::classify(','), Some(TokenKind::Number));
    assert_eq!(TokenKind::classify('-'), Some(TokenKind::Operator));
    assert_eq!(TokenKind::classify('\t'), Some(TokenKind::Ignored));
    assert_eq!(TokenKind::classify('^'), None);
    assert_eq!(TokenKind::classify('٣'), None);
}
