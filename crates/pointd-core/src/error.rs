//! Error types for the expression engine

use thiserror::Error;

use crate::token::Token;

/// Main error type for expression evaluation.
///
/// Every variant aborts the current call; the caller decides what value
/// to fall back to.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Two tokens that cannot be merged were joined.
    ///
    /// The tokenizer only joins tokens it has checked first, so this
    /// indicates misuse of [`Token::join`].
    #[error("Cannot join tokens of different types. Tokens: {left} and {right}.")]
    TokenConflict { left: Token, right: Token },

    /// Operands and operators do not line up.
    #[error(transparent)]
    Arity(#[from] ArityError),

    /// An operator symbol outside `+ - * /` reached the evaluator.
    #[error("Unknown operator {0}")]
    UnknownOperator(String),

    /// A number token that does not read as a floating-point value.
    #[error("Invalid number {0}")]
    InvalidNumber(String),
}

/// Structural problems found while reordering or reducing an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArityError {
    #[error("Mismatched parentheses!")]
    MismatchedParentheses,

    /// Operator found fewer than two values to work on.
    #[error("Operator {0} needs more arguments!")]
    MissingOperands(String),

    /// More than one value left once every operator was applied.
    #[error("Too many arguments.")]
    TooManyArguments,

    #[error("Expression is empty.")]
    EmptyExpression,
}

impl EngineError {
    /// Returns the arity error, if this is one.
    pub fn as_arity(&self) -> Option<&ArityError> {
        match self {
            EngineError::Arity(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type alias for expression engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
