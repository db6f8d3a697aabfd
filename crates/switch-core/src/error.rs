//! Error types for the switchboard core

use thiserror::Error;

use crate::types::Endpoint;

/// Result type for switchboard operations
pub type SwitchResult<T> = Result<T, SwitchError>;

/// Errors that can occur in the switchboard network core
///
/// Every variant except [`SwitchError::ConsistencyViolation`] is recoverable
/// at the command-dispatch boundary: the failing operation leaves the network
/// untouched. `ConsistencyViolation` means the mutual-peer invariant was
/// broken by a core bug and must not be caught and retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwitchError {
    /// Area code does not satisfy the network's code policy
    #[error("invalid area code '{code}': expected exactly {expected_digits} digits")]
    InvalidAreaCode { code: String, expected_digits: u8 },

    /// A switchboard with this area code is already registered
    #[error("switchboard {0} already exists")]
    SwitchboardExists(String),

    /// No switchboard registered under this area code
    #[error("unknown switchboard {0}")]
    SwitchboardNotFound(String),

    /// Line number is empty or contains non-digit characters
    #[error("invalid line number '{number}'")]
    InvalidLineNumber { number: String },

    /// Trunk link rejected (e.g. a switchboard linked to itself)
    #[error("invalid trunk link: {reason}")]
    InvalidTrunk { reason: String },

    /// The (switchboard, number) pair does not resolve to a line
    #[error("unknown line {0}")]
    LineNotFound(Endpoint),

    /// The line is already in a call
    #[error("line {0} is busy")]
    LineBusy(Endpoint),

    /// No chain of trunk links connects the two switchboards
    #[error("no trunk route from {from} to {to}")]
    NoRoute { from: String, to: String },

    /// Hang-up requested on a line that is not in a call
    #[error("line {0} is not connected")]
    NotConnected(Endpoint),

    /// The busy/peer invariant was broken somewhere in the core
    #[error("consistency violation: {message}")]
    ConsistencyViolation { message: String },
}

impl SwitchError {
    /// Create an invalid trunk link error
    pub fn invalid_trunk(reason: impl Into<String>) -> Self {
        Self::InvalidTrunk {
            reason: reason.into(),
        }
    }

    /// Create a consistency violation error
    pub fn consistency(message: impl Into<String>) -> Self {
        Self::ConsistencyViolation {
            message: message.into(),
        }
    }

    /// Whether the dispatcher may report this error and continue
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::ConsistencyViolation { .. })
    }
}
