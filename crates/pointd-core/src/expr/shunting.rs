//! Shunting-yard conversion from infix to postfix order.
//!
//! Only left-associative binary operators and parentheses exist, so the
//! classic algorithm reduces to a single precedence comparison.

use smallvec::SmallVec;

use crate::error::{ArityError, Result};
use crate::token::{precedence, Token, TokenKind};

/// Reorders infix tokens into postfix order.
///
/// Numbers go straight to the output. An operator first pops every
/// operator on the stack whose precedence is greater than or equal to its
/// own. Start and ignored tokens are skipped, and brackets never reach
/// the output.
///
/// # Errors
///
/// [`ArityError::MismatchedParentheses`] when a `)` finds no `(` on the
/// stack, or a bracket is still on the stack once input runs out.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>> {
    let mut stack: SmallVec<[&Token; 16]> = SmallVec::new();
    let mut output = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token.kind() {
            TokenKind::Number => output.push(token.clone()),
            TokenKind::Operator => {
                let rank = precedence(token.text());
                while let Some(&top) = stack.last() {
                    if !top.is(TokenKind::Operator) || precedence(top.text()) < rank {
                        break;
                    }
                    output.push(top.clone());
                    stack.pop();
                }
                stack.push(token);
            }
            TokenKind::OpenBracket => stack.push(token),
            TokenKind::CloseBracket => loop {
                match stack.pop() {
                    Some(top) if top.is(TokenKind::OpenBracket) => break,
                    Some(top) => output.push(top.clone()),
                    None => return Err(ArityError::MismatchedParentheses.into()),
                }
            },
            TokenKind::Start | TokenKind::Ignored => {}
        }
    }

    while let Some(top) = stack.pop() {
        if top.is_bracket() {
            return Err(ArityError::MismatchedParentheses.into());
        }
        output.push(top.clone());
    }

    Ok(output)
}
