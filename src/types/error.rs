//! Error types for ledger operations

use serde_json::Value;

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors that can occur while recording events
#[derive(Debug, Clone)]
pub enum LedgerError {
    /// The partition-key attribute was present but not string-valued.
    MalformedPartitionKey { event_id: String, found: Value },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::MalformedPartitionKey { event_id, found } => write!(
                f,
                "malformed partition key on event '{}': expected a string, found {}",
                event_id, found
            ),
        }
    }
}

impl std::error::Error for LedgerError {}
