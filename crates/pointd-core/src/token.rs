//! Token model shared by the tokenizer, converter and evaluator.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Classification of a slice of expression text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TokenKind {
    /// Synthetic token seeding every token sequence.
    Start,
    /// Digits and decimal separators.
    Number,
    /// One of `+ - * /`.
    Operator,
    OpenBracket,
    CloseBracket,
    /// Whitespace and skipped characters.
    Ignored,
}

impl TokenKind {
    /// Classifies a single input character.
    ///
    /// Returns `None` for characters outside the expression alphabet; the
    /// tokenizer turns those into [`TokenKind::Ignored`] and raises a warning.
    pub fn classify(c: char) -> Option<TokenKind> {
        match c {
            '0'..='9' | '.' | ',' => Some(TokenKind::Number),
            '+' | '-' | '*' | '/' => Some(TokenKind::Operator),
            '(' => Some(TokenKind::OpenBracket),
            ')' => Some(TokenKind::CloseBracket),
            ' ' | '\t' => Some(TokenKind::Ignored),
            _ => None,
        }
    }

    /// Whether adjacent tokens of this kind collapse into one.
    ///
    /// Operators stay single-symbol so `2+*3` is rejected rather than read
    /// as a two-character operator.
    pub const fn is_mergeable(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Ignored)
    }
}

/// A binary, left-associative arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Multiply | Operator::Divide => 3,
            Operator::Add | Operator::Subtract => 2,
        }
    }

    /// Computes `lhs OP rhs` with IEEE semantics; dividing by zero yields
    /// an infinity or NaN.
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

/// Precedence rank of an operator symbol.
///
/// `*` and `/` bind tightest (3), `+` and `-` next (2); anything else
/// ranks 1.
pub fn precedence(symbol: &str) -> u8 {
    Operator::from_symbol(symbol).map_or(1, Operator::precedence)
}

/// An immutable piece of classified expression text.
///
/// # Examples
///
/// ```
/// use pointd_core::{Token, TokenKind};
///
/// let one = Token::number("1");
/// let two = Token::number("2");
/// assert!(one.can_join(&two));
///
/// let twelve = one.join(two).unwrap();
/// assert_eq!(twelve.kind(), TokenKind::Number);
/// assert_eq!(twelve.text(), "12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Text carried by the synthetic start token.
    pub const START_TEXT: &'static str = "=";

    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    pub fn start() -> Self {
        Token::new(TokenKind::Start, Self::START_TEXT)
    }

    pub fn number(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Number, text)
    }

    pub fn operator(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Operator, text)
    }

    pub fn open_bracket() -> Self {
        Token::new(TokenKind::OpenBracket, "(")
    }

    pub fn close_bracket() -> Self {
        Token::new(TokenKind::CloseBracket, ")")
    }

    pub fn ignored(text: impl Into<String>) -> Self {
        Token::new(TokenKind::Ignored, text)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_bracket(&self) -> bool {
        matches!(self.kind, TokenKind::OpenBracket | TokenKind::CloseBracket)
    }

    /// Precedence of an operator token; `None` for every other kind.
    pub fn precedence(&self) -> Option<u8> {
        self.is(TokenKind::Operator).then(|| precedence(&self.text))
    }

    /// Whether `next` can be merged onto the end of this token.
    pub fn can_join(&self, next: &Token) -> bool {
        self.kind == next.kind && self.kind.is_mergeable()
    }

    /// Merges `next` onto this token by concatenating their text.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TokenConflict`] when the kinds differ or the
    /// kind never merges.
    pub fn join(self, next: Token) -> Result<Token> {
        if !self.can_join(&next) {
            return Err(EngineError::TokenConflict {
                left: self,
                right: next,
            });
        }

        let mut text = self.text;
        text.push_str(&next.text);
        Ok(Token {
            kind: self.kind,
            text,
        })
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {})", self.kind, self.text)
    }
}
