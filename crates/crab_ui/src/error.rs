//! # UI Error Types
//!
//! Caller-contract violations surfaced by containers and configuration.

use thiserror::Error;

/// Errors that can occur in the widget layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UiError {
    /// A container was asked to remove a resource it does not hold.
    #[error("resource not found in container: {name} (id {id})")]
    ResourceNotFound {
        /// Raw id of the missing resource.
        id: u64,
        /// Display name of the missing resource.
        name: String,
    },

    /// A child index was past the end of the container.
    #[error("child index {index} out of range for container of {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of children.
        len: usize,
    },

    /// Widget configuration could not be read or parsed.
    #[error("invalid widget configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for widget operations.
pub type UiResult<T> = Result<T, UiError>;
