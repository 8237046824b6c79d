//! Expression engine session

use tracing::debug;

use crate::error::Result;
use crate::expr::{evaluate, to_postfix, tokenize};
use crate::token::Token;
use crate::warning::{Warning, Warnings};

/// Evaluates arithmetic typed into a points field.
///
/// The engine owns the warning slot for one evaluation session. Working
/// stacks are created per call, so a session can be reused freely; the
/// warning is the only thing that persists until cleared.
///
/// # Examples
///
/// ```
/// use pointd_core::Engine;
///
/// let mut engine = Engine::new();
/// assert_eq!(engine.parse("12+8*2").unwrap(), 28.0);
/// assert_eq!(engine.parse("(2+3)*4").unwrap(), 20.0);
///
/// engine.parse("7 apples").unwrap();
/// assert!(engine.has_warning());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    warnings: Warnings,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizes `input`, recording unknown characters in the warning slot.
    pub fn tokenize(&mut self, input: &str) -> Result<Vec<Token>> {
        tokenize(input, &mut self.warnings)
    }

    /// Tokenizes, converts and evaluates `expression`.
    pub fn parse(&mut self, expression: &str) -> Result<f64> {
        let tokens = self.tokenize(expression)?;
        let postfix = to_postfix(&tokens)?;
        let result = evaluate(&postfix)?;

        debug!(event = "evaluate", expression, result);
        Ok(result)
    }

    pub fn warnings(&self) -> &Warnings {
        &self.warnings
    }

    /// Mutable access so other stages of a session (scoring) can report
    /// into the same slot.
    pub fn warnings_mut(&mut self) -> &mut Warnings {
        &mut self.warnings
    }

    pub fn has_warning(&self) -> bool {
        self.warnings.is_set()
    }

    pub fn warning(&self) -> Option<&Warning> {
        self.warnings.get()
    }

    pub fn clear_warning(&mut self) {
        self.warnings.clear();
    }
}

/// Evaluates `expression` without keeping any warnings.
///
/// # Examples
///
/// ```
/// assert_eq!(pointd_core::parse("12+8*2").unwrap(), 28.0);
/// assert!(pointd_core::parse("(1+2").is_err());
/// ```
pub fn parse(expression: &str) -> Result<f64> {
    Engine::new().parse(expression)
}
