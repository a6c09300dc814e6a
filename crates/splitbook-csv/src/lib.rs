//! # splitbook-csv
//!
//! CSV-backed host pieces for splitbook: a reader that loads a CSV file as a
//! used-range matrix, and a [`SheetWriter`](splitbook_core::SheetWriter)
//! implementation that materializes each group sheet as its own CSV file in
//! a directory. CSV carries no formatting, so formats and auto-fit requests
//! are accepted and dropped.

mod error;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use reader::read_matrix;
pub use writer::CsvDirWriter;
