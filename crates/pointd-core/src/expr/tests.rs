//! Tests for the expression pipeline stages.

use super::*;
use crate::error::{ArityError, EngineError};
use crate::token::{Token, TokenKind};
use crate::warning::{Warning, Warnings};

fn tokens_of(input: &str) -> Vec<Token> {
    tokenize(input, &mut Warnings::new()).unwrap()
}

fn postfix_texts(input: &str) -> Vec<String> {
    to_postfix(&tokens_of(input))
        .unwrap()
        .iter()
        .map(|t| t.text().to_string())
        .collect()
}

// ============================================================================
// Tokenizer Tests
// ============================================================================

mod tokenizer {
    use super::*;

    #[test]
    fn test_merges_digits_and_keeps_start() {
        assert_eq!(
            tokens_of("12+8*2"),
            vec![
                Token::start(),
                Token::number("12"),
                Token::operator("+"),
                Token::number("8"),
                Token::operator("*"),
                Token::number("2"),
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_start_only() {
        assert_eq!(tokens_of(""), vec![Token::start()]);
    }

    #[test]
    fn test_brackets_never_merge() {
        let kinds: Vec<TokenKind> = tokens_of("((1))")
            .iter()
            .map(Token::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Start,
                TokenKind::OpenBracket,
                TokenKind::OpenBracket,
                TokenKind::Number,
                TokenKind::CloseBracket,
                TokenKind::CloseBracket,
            ]
        );
    }

    #[test]
    fn test_operators_stay_single_symbol() {
        let tokens = tokens_of("2+*3");
        assert_eq!(tokens[2], Token::operator("+"));
        assert_eq!(tokens[3], Token::operator("*"));
    }

    #[test]
    fn test_whitespace_runs_merge() {
        let tokens = tokens_of("1 \t 2");
        assert_eq!(tokens[2], Token::ignored(" \t "));
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_decimal_separators_join_number() {
        let tokens = tokens_of("1,5+2.25");
        assert_eq!(tokens[1], Token::number("1,5"));
        assert_eq!(tokens[3], Token::number("2.25"));
    }

    #[test]
    fn test_unknown_character_warns_and_is_ignored() {
        let mut warnings = Warnings::new();
        let tokens = tokenize("3x+y4", &mut warnings).unwrap();

        assert_eq!(tokens[2], Token::ignored("x"));
        assert_eq!(warnings.get(), Some(&Warning::UnknownCharacter('x')));
    }

    #[test]
    fn test_first_unknown_character_wins() {
        let mut warnings = Warnings::new();
        tokenize("a+b", &mut warnings).unwrap();
        assert_eq!(warnings.take(), Some(Warning::UnknownCharacter('a')));
        assert!(!warnings.is_set());
    }
}

// ============================================================================
// Shunting-Yard Tests
// ============================================================================

mod shunting {
    use super::*;

    #[test]
    fn test_precedence_orders_output() {
        assert_eq!(postfix_texts("12+8*2"), vec!["12", "8", "2", "*", "+"]);
    }

    #[test]
    fn test_left_associative_equal_precedence() {
        assert_eq!(postfix_texts("10-4-3"), vec!["10", "4", "-", "3", "-"]);
        assert_eq!(postfix_texts("8/4*2"), vec!["8", "4", "/", "2", "*"]);
    }

    #[test]
    fn test_brackets_override_precedence() {
        assert_eq!(postfix_texts("(2+3)*4"), vec!["2", "3", "+", "4", "*"]);
    }

    #[test]
    fn test_start_and_ignored_are_skipped() {
        let postfix = to_postfix(&tokens_of(" 1 + 2 ")).unwrap();
        assert!(postfix
            .iter()
            .all(|t| t.is(TokenKind::Number) || t.is(TokenKind::Operator)));
        assert_eq!(postfix.len(), 3);
    }

    #[test]
    fn test_unclosed_bracket() {
        let err = to_postfix(&tokens_of("(1+2")).unwrap_err();
        assert_eq!(err, EngineError::Arity(ArityError::MismatchedParentheses));
    }

    #[test]
    fn test_unopened_bracket() {
        let err = to_postfix(&tokens_of("1+2)")).unwrap_err();
        assert_eq!(err, EngineError::Arity(ArityError::MismatchedParentheses));
    }
}

// ============================================================================
// Postfix Evaluation Tests
// ============================================================================

mod postfix {
    use super::*;

    #[test]
    fn test_operand_order() {
        let postfix = vec![Token::number("10"), Token::number("4"), Token::operator("-")];
        assert_eq!(evaluate(&postfix).unwrap(), 6.0);

        let postfix = vec![Token::number("1"), Token::number("4"), Token::operator("/")];
        assert_eq!(evaluate(&postfix).unwrap(), 0.25);
    }

    #[test]
    fn test_missing_operands() {
        let postfix = vec![Token::number("2"), Token::operator("+")];
        assert_eq!(
            evaluate(&postfix).unwrap_err(),
            EngineError::Arity(ArityError::MissingOperands("+".to_string()))
        );
    }

    #[test]
    fn test_too_many_arguments() {
        let postfix = vec![Token::number("2"), Token::number("3")];
        assert_eq!(
            evaluate(&postfix).unwrap_err(),
            EngineError::Arity(ArityError::TooManyArguments)
        );
    }

    #[test]
    fn test_empty_postfix() {
        assert_eq!(
            evaluate(&[]).unwrap_err(),
            EngineError::Arity(ArityError::EmptyExpression)
        );
    }

    #[test]
    fn test_unknown_operator() {
        let postfix = vec![Token::number("2"), Token::number("3"), Token::operator("^")];
        assert_eq!(
            evaluate(&postfix).unwrap_err(),
            EngineError::UnknownOperator("^".to_string())
        );
    }

    #[test]
    fn test_arity_checked_before_operator_symbol() {
        let postfix = vec![Token::number("2"), Token::operator("^")];
        assert!(matches!(
            evaluate(&postfix),
            Err(EngineError::Arity(ArityError::MissingOperands(_)))
        ));
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        let postfix = vec![Token::number("5"), Token::number("0"), Token::operator("/")];
        assert_eq!(evaluate(&postfix).unwrap(), f64::INFINITY);

        let postfix = vec![Token::number("0"), Token::number("0"), Token::operator("/")];
        assert!(evaluate(&postfix).unwrap().is_nan());
    }

    #[test]
    fn test_comma_reads_as_decimal_point() {
        assert_eq!(evaluate(&[Token::number("2,5")]).unwrap(), 2.5);
    }

    #[test]
    fn test_unreadable_number() {
        assert_eq!(
            evaluate(&[Token::number("1,2,3")]).unwrap_err(),
            EngineError::InvalidNumber("1,2,3".to_string())
        );
    }
}
