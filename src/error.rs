//! Error types for calendar reconciliation.

use thiserror::Error;

/// Errors that can occur during a sync run.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Token acquisition failed: {0}")]
    Token(String),

    #[error("Remote calendar error: {0}")]
    Remote(String),

    #[error("Event store error: {0}")]
    Store(String),

    #[error("Editor channel error: {0}")]
    Editor(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;
