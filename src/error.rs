//! Storage Errors
//!
//! Failures at the persistence boundary. Nothing above the store treats these
//! as fatal: the UI logs them and leaves the last rendered state in place.

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    /// No key-value backend could be obtained (e.g. storage disabled)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read key `{key}`: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write key `{key}`: {reason}")]
    Write { key: String, reason: String },

    /// Every task id up to `u32::MAX` is taken
    #[error("no task ids left under `{key}`")]
    IdsExhausted { key: String },

    /// A value is present under the key but is not a task collection
    #[error("corrupt task state under `{key}`")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
