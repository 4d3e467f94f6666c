//! Error types for the outline extraction glue.
//!
//! The inference engine itself raises no errors on well-formed input; these
//! types cover the surrounding I/O: loading fragment streams from disk and
//! persisting outline results.

/// Result type alias for outline library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading fragments or writing results.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed fragment stream or result serialization failure
    #[error("Malformed fragment stream: {0}")]
    Json(#[from] serde_json::Error),
}
