//! Postfix reduction

use smallvec::SmallVec;

use crate::error::{ArityError, EngineError, Result};
use crate::token::{Operator, Token, TokenKind};

/// Reduces a postfix token sequence to a single value.
///
/// Every operator is binary: it pops the right operand, then the left,
/// and pushes `lhs OP rhs`. Division by zero is not an error and yields
/// an infinity or NaN.
///
/// # Errors
///
/// - [`ArityError::MissingOperands`] when an operator finds fewer than two values
/// - [`EngineError::UnknownOperator`] for a symbol outside `+ - * /`
/// - [`ArityError::TooManyArguments`] when more than one value remains
/// - [`ArityError::EmptyExpression`] when no value was produced at all
/// - [`EngineError::InvalidNumber`] for unreadable number text
pub fn evaluate(postfix: &[Token]) -> Result<f64> {
    let mut stack: SmallVec<[f64; 16]> = SmallVec::new();

    for token in postfix {
        match token.kind() {
            TokenKind::Number => stack.push(parse_number(token.text())?),
            TokenKind::Start | TokenKind::Ignored => {}
            _ => {
                let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                    return Err(ArityError::MissingOperands(token.text().to_string()).into());
                };
                let operator = Operator::from_symbol(token.text())
                    .ok_or_else(|| EngineError::UnknownOperator(token.text().to_string()))?;
                stack.push(operator.apply(lhs, rhs));
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        [] => Err(ArityError::EmptyExpression.into()),
        _ => Err(ArityError::TooManyArguments.into()),
    }
}

// Both `.` and `,` are read as the decimal point.
fn parse_number(text: &str) -> Result<f64> {
    text.replace(',', ".")
        .parse::<f64>()
        .map_err(|_| EngineError::InvalidNumber(text.to_string()))
}
