//! Error types for the todo-ui crate

use thiserror::Error;

/// Result type alias for todo-ui operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for todo-ui
#[derive(Error, Debug)]
pub enum Error {
    /// Local storage facility is missing (disabled, sandboxed, or no window).
    /// Equivalent to "no saved data"; the list starts empty.
    #[error("Local storage is not available")]
    StorageUnavailable,

    /// The slot exists but its contents cannot be parsed back into a list
    #[error("Saved todo list is corrupt: {0}")]
    CorruptSlot(String),

    /// A write to the slot was rejected (quota, privacy mode, ...)
    #[error("Failed to write todo list to local storage: {0}")]
    WriteFailed(String),

    /// Delete/edit addressed a position outside the list
    #[error("Position {position} is out of range for a list of {len} items")]
    OutOfRange { position: usize, len: usize },

    /// Empty submission rejected by configuration
    #[error("Empty todo text is not accepted")]
    EmptyText,
}
