//! Error types for splitbook-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in splitbook-core
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid column letter designation
    #[error("Invalid column letters: {0}")]
    InvalidColumn(String),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u32),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// A host collaborator call failed; the current split is aborted
    #[error("Host operation failed: {0}")]
    Host(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap a host collaborator failure
    pub fn host<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Host(err.into())
    }
}
