use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by history and resolver operations
///
/// None of these are recovered from internally; the binary prints the message
/// and exits with a non-zero status.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// A required argument was empty or malformed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An ordinal did not address an existing history entry
    #[error("index out of range: no checkout at position {index} (history has {len} entries)")]
    IndexOutOfRange { index: i64, len: usize },

    /// The previous-branch marker was used with an empty history
    #[error("no prior checkout recorded")]
    NoPriorCheckout,

    /// The underlying git invocation failed
    #[error("git command failed: {0}")]
    ExternalCommandFailed(String),

    /// The history file exists but cannot be read, parsed or written
    #[error("checkout history at {} is unavailable: {reason}", .path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    #[error("git not found")]
    GitNotFound,

    #[error("not in active git repo")]
    NotARepository,

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CheckoutError {
    pub fn storage(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        CheckoutError::StorageUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
