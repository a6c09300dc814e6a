//! Error types for splitbook-memory

use thiserror::Error;

/// Errors raised by the in-memory host
#[derive(Debug, Error)]
pub enum MemoryError {
    /// Sheet not found by name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Duplicate sheet name (case-insensitive)
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),

    /// No cell is selected
    #[error("No cell is selected")]
    NoSelection,
}
