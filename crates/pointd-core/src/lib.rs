//! Point'd Core - arithmetic expression engine
//!
//! Players may type expressions such as `150+75` into a points field
//! instead of a bare number. This crate turns such text into a value:
//! - Tokenizer classifying and merging characters
//! - Shunting-yard conversion to postfix order
//! - Postfix evaluation to a single `f64`
//! - A single-slot warning channel for non-fatal problems

pub mod engine;
pub mod error;
pub mod expr;
pub mod token;
pub mod warning;

#[cfg(test)]
mod engine_tests;

pub use engine::{parse, Engine};
pub use error::{ArityError, EngineError, Result};
pub use expr::{evaluate, to_postfix, tokenize};
pub use token::{precedence, Operator, Token, TokenKind};
pub use warning::{Warning, Warnings};
