use std::path::PathBuf;

/// Errors from the fallible edges of the crate: reading batch input and
/// writing output. Parsing and scoring themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no input provided")]
    EmptyInput,

    #[error("{path}:{line}: {reason}")]
    InvalidLine { path: PathBuf, line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
