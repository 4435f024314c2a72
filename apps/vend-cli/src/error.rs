//! Error types for the console application.
//!
//! Purchase failures are not errors at this level: the shell prints them and
//! keeps going. Only a broken console stops a session.

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode change receipt: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type ShellResult<T> = Result<T, ShellError>;
