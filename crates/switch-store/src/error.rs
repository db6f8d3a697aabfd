//! Error types for network persistence

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur saving or loading a network
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV syntax or encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record that parsed as CSV but does not describe a valid switchboard
    ///
    /// Loads fail whole: a malformed record rejects the entire file rather
    /// than producing a partially built network.
    #[error("malformed record {record}: {reason}")]
    MalformedRecord { record: u64, reason: String },
}

impl StoreError {
    /// Create a malformed record error (`record` is 1-based, excluding the header)
    pub fn malformed(record: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record,
            reason: reason.into(),
        }
    }
}
