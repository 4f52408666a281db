//! # Resource Error Types
//!
//! All errors that can occur while loading resource data.

use thiserror::Error;

/// Errors that can occur in the resource system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// Catalog text is not valid TOML or does not match the catalog schema.
    #[error("invalid resource catalog: {0}")]
    InvalidCatalog(String),

    /// Catalog file could not be read.
    #[error("failed to read catalog {path}: {message}")]
    Io {
        /// Path that was being read.
        path: String,
        /// Underlying I/O error message.
        message: String,
    },

    /// Two catalog entries share the same key.
    #[error("duplicate resource key in catalog: {0}")]
    DuplicateKey(String),
}

/// Result type for resource operations.
pub type ResourceResult<T> = Result<T, ResourceError>;
