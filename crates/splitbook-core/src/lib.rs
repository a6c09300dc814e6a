//! # splitbook-core
//!
//! Core logic for splitting one worksheet's used range into per-group sheets.
//!
//! The user marks a header row by selecting a cell in it, optionally picks
//! columns to sum, and runs the split. Every row below the header is assigned
//! to a group keyed by its own value in the marker column; each group becomes
//! a destination sheet carrying the header row, the group's data rows, and a
//! total per selected sum column.
//!
//! This crate is host-agnostic: reading the used range and writing sheets go
//! through the [`RangeSource`] and [`SheetWriter`] traits. See
//! `splitbook-memory` for an in-memory host and `splitbook-csv` for a
//! CSV-file host.
//!
//! ## Example
//!
//! ```rust,ignore
//! use splitbook_core::{split_used_range, Selection};
//!
//! let rows = vec![
//!     vec!["Region".to_string(), "Amount".to_string()],
//!     vec!["East".to_string(), "10".to_string()],
//!     vec!["West".to_string(), "20".to_string()],
//! ];
//! let selection = Selection::new("Region", 0).with_sum_column("Amount", 1);
//! let report = split_used_range(&mut host, &rows, &selection)?;
//! assert_eq!(report.sheets, vec!["East", "West"]);
//! ```

pub mod aggregate;
pub mod column;
pub mod error;
pub mod host;
pub mod key;
pub mod layout;
pub mod partition;
pub mod pipeline;
pub mod selection;

// Re-exports for convenience
pub use aggregate::{sum_column, sums};
pub use column::{column_to_letters, letters_to_column};
pub use error::{Error, Result};
pub use host::{Format, RangeSource, SelectedCell, SheetWriter};
pub use key::{sanitize_key, EMPTY_KEY};
pub use layout::{SheetRange, TableLayout};
pub use partition::{partition, Group, Groups, Partition};
pub use pipeline::{split_used_range, SplitReport};
pub use selection::{Selection, SumColumn};

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Maximum length of a sheet name, and therefore of a group key
pub const MAX_SHEET_NAME_LEN: usize = 31;
