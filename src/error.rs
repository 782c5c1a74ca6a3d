//! Error handling for the chunk streaming core
//!
//! The core performs no I/O, so every error here is either a rejected
//! configuration or a lifecycle invariant caught at the manager boundary.

use crate::world::core::GridCoord;

/// Main error type for the streaming core
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Chunk {0} is already active")]
    DuplicateChunk(GridCoord),

    #[error("Chunk {0} is not active")]
    ChunkNotActive(GridCoord),
}

/// Type alias for Results in the streaming core
pub type StreamResult<T> = Result<T, StreamError>;

impl StreamError {
    /// Shorthand used by config validation
    pub fn invalid_config(
        field: &str,
        value: impl std::fmt::Display,
        reason: &str,
    ) -> Self {
        StreamError::InvalidConfig {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Convert Option to Result with context
pub trait OptionExt<T> {
    fn ok_or_stream<F>(self, f: F) -> StreamResult<T>
    where
        F: FnOnce() -> StreamError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_stream<F>(self, f: F) -> StreamResult<T>
    where
        F: FnOnce() -> StreamError,
    {
        self.ok_or_else(f)
    }
}
