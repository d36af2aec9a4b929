//! Error handling logic

use thiserror::Error;

/// Errors signalled by the qubit engine.
///
/// Both kinds describe a caller-side input problem: retrying with the same
/// input fails the same way, and no variant is ever replaced by a default value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QubitError {
    /// A vector could not be normalized (zero norm or a non-finite component),
    /// or a state failed a normalization check.
    #[error("Invalid State: {message}")]
    InvalidState {
        /// InvalidState failure message
        message: String,
    },

    /// An operator name outside the closed catalog.
    #[error("Unknown Operator: '{name}' is not in the operator catalog")]
    UnknownOperator {
        /// The rejected name, as supplied by the caller
        name: String,
    },
}

impl QubitError {
    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        QubitError::InvalidState { message: message.into() }
    }

    pub(crate) fn unknown_operator(name: impl Into<String>) -> Self {
        QubitError::UnknownOperator { name: name.into() }
    }
}
