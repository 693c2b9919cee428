//! Error type shared by the scheduler, the stores and the importers.

/// Study coach error type
#[derive(Debug, thiserror::Error)]
pub enum CoachError {
    /// The catalog has no items, so no session can be selected
    #[error("Insufficient catalog: the question bank is empty")]
    InsufficientCatalog,
    /// An answer references an item id that is not in the catalog
    #[error("Unknown item reference: {0}")]
    UnknownItemReference(String),
    /// Persisted state under `key` failed shape validation
    #[error("Malformed stored state under '{key}': {reason}")]
    MalformedStoredState { key: String, reason: String },
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, CoachError>;
