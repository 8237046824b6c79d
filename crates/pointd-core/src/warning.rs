//! Non-fatal warnings raised while evaluating and scoring.

use std::fmt;

use tracing::warn;

/// Something worth telling the player about that did not stop the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
    /// A character outside the expression alphabet was skipped.
    UnknownCharacter(char),
    /// A side claims more major points than the game allows.
    MajorPointsExceedTotal,
    /// A side claims more minor points than the game allows.
    MinorPointsExceedTotal,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnknownCharacter(c) => write!(f, "Unknown character type: {}", c),
            Warning::MajorPointsExceedTotal => f.write_str("More major points than total allows."),
            Warning::MinorPointsExceedTotal => f.write_str("More minor points than total allows."),
        }
    }
}

/// Single-slot warning holder.
///
/// Only the first warning raised is kept until [`Warnings::clear`] is
/// called; later ones are logged and dropped.
///
/// # Examples
///
/// ```
/// use pointd_core::{Warning, Warnings};
///
/// let mut warnings = Warnings::new();
/// warnings.set(Warning::UnknownCharacter('x'));
/// warnings.set(Warning::MajorPointsExceedTotal);
///
/// assert_eq!(warnings.get(), Some(&Warning::UnknownCharacter('x')));
///
/// warnings.clear();
/// assert!(!warnings.is_set());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warnings {
    slot: Option<Warning>,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `warning` unless one is already held.
    pub fn set(&mut self, warning: Warning) {
        warn!(event = "warning", kept = self.slot.is_none(), "{}", warning);
        if self.slot.is_none() {
            self.slot = Some(warning);
        }
    }

    pub fn get(&self) -> Option<&Warning> {
        self.slot.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.slot.is_some()
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    /// Removes and returns the held warning.
    pub fn take(&mut self) -> Option<Warning> {
        self.slot.take()
    }
}
