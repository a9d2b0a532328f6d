//! Engine error types

use thiserror::Error;

use crate::session::Step;

/// Broad category of a [`MontyError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value outside the accepted domain.
    InvalidInput,
    /// A session transition was invoked in the wrong step.
    ProtocolViolation,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MontyError {
    #[error("door index {index} is out of range (expected 0, 1 or 2)")]
    InvalidDoor { index: usize },

    #[error("arrangement must hide exactly one prize, found {prizes}")]
    InvalidArrangement { prizes: usize },

    #[error("trial count must be positive")]
    ZeroTrials,

    #[error("cannot {action} while {step}")]
    WrongStep { action: &'static str, step: Step },
}

impl MontyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MontyError::InvalidDoor { .. }
            | MontyError::InvalidArrangement { .. }
            | MontyError::ZeroTrials => ErrorKind::InvalidInput,
            MontyError::WrongStep { .. } => ErrorKind::ProtocolViolation,
        }
    }
}
