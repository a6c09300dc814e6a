//! # splitbook-memory
//!
//! An in-memory workbook implementing splitbook's host collaborator traits.
//! It is the reference host for tests: everything a split writes (values,
//! formats, sheet names) can be read back and asserted on.

mod error;
mod workbook;

pub use error::MemoryError;
pub use workbook::{MemorySheet, MemoryWorkbook};
