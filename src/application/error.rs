//! Application-level errors

use thiserror::Error;

/// Application errors: failures of the editor's collaborators and settings.
///
/// Domain link errors never reach this layer; the session only uses the
/// outline operations that report refusals as `bool`/`Option`.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("{source}")]
    Clipboard {
        #[source]
        source: std::io::Error,
    },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
