use std::fmt;

use crate::game::GameState;

/// A state-machine intent that is not legal in the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejected {
    /// The intent has no transition out of `state`.
    IllegalIn { intent: &'static str, state: GameState },
    /// `continue` was requested from the menu with nothing suspended.
    NoSuspendedSession,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejected::IllegalIn { intent, state } => {
                write!(f, "`{intent}` is not allowed while {}", state.as_str())
            }
            Rejected::NoSuspendedSession => write!(f, "no suspended session to continue"),
        }
    }
}

impl std::error::Error for Rejected {}
