//! Error types for tsk
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (empty description, unknown id, unknown backend)
//! - 4: Operation failed (file read/write, malformed database or config)

use thiserror::Error;

use crate::task::TaskId;

/// Exit codes for the tsk CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for tsk operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("task description cannot be empty")]
    EmptyDescription,

    #[error("task {0} not found")]
    TaskNotFound(TaskId),

    #[error("unknown storage backend '{0}' (expected slice|file)")]
    UnknownBackend(String),

    #[error("no command provided")]
    NoCommand,

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // User errors
            Error::EmptyDescription
            | Error::TaskNotFound(_)
            | Error::UnknownBackend(_)
            | Error::NoCommand => exit_codes::USER_ERROR,

            // Operation failures
            Error::Io(_) | Error::Json(_) | Error::TomlParse(_) => exit_codes::OPERATION_FAILED,
        }
    }
}

/// Result type alias for tsk operations
pub type Result<T> = std::result::Result<T, Error>;
