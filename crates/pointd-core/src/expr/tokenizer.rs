//! Character-level tokenizer

use tracing::trace;

use crate::error::Result;
use crate::token::{Token, TokenKind};
use crate::warning::{Warning, Warnings};

/// Splits `input` into classified tokens, merging runs of numbers and
/// whitespace.
///
/// The result always starts with [`Token::start`]. Characters outside the
/// expression alphabet become [`TokenKind::Ignored`] tokens and raise
/// [`Warning::UnknownCharacter`] in `warnings`; tokenizing carries on.
///
/// # Examples
///
/// ```
/// use pointd_core::{tokenize, Token, Warnings};
///
/// let mut warnings = Warnings::new();
/// let tokens = tokenize("12+8", &mut warnings).unwrap();
///
/// assert_eq!(
///     tokens,
///     vec![
///         Token::start(),
///         Token::number("12"),
///         Token::operator("+"),
///         Token::number("8"),
///     ]
/// );
/// ```
pub fn tokenize(input: &str, warnings: &mut Warnings) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut last = Token::start();

    for c in input.chars() {
        let current = match TokenKind::classify(c) {
            Some(kind) => Token::new(kind, c),
            None => {
                warnings.set(Warning::UnknownCharacter(c));
                Token::ignored(c)
            }
        };

        if last.can_join(&current) {
            last = last.join(current)?;
        } else {
            tokens.push(std::mem::replace(&mut last, current));
        }
    }
    tokens.push(last);

    trace!(event = "tokenize", input, token_count = tokens.len());
    Ok(tokens)
}
