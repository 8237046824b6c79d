//! Expression pipeline: text to tokens, tokens to postfix order, postfix to a value.
//!
//! Each stage allocates its own working state per call, so nothing leaks
//! from one evaluation into the next.

mod postfix;
mod shunting;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use postfix::evaluate;
pub use shunting::to_postfix;
pub use tokenizer::tokenize;
