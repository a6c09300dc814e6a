//! Selection state
//!
//! The interactive flow builds a [`Selection`] in three steps: "begin"
//! captures the marker cell that identifies the header row, "add sum column"
//! appends a column whose values are totaled per group, and "run split" hands
//! the finished selection to [`crate::split_used_range`]. A selection is a
//! plain value: resetting means dropping it and building a fresh one, there
//! is no shared mutable session.

use crate::column::letters_to_column;
use crate::error::Result;
use crate::host::RangeSource;

/// One column picked for summing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumColumn {
    /// Display label: the text of the cell the user picked the column with
    pub label: String,
    /// Column index (0-based)
    pub col: u32,
}

impl SumColumn {
    /// Create a new sum column
    pub fn new<S: Into<String>>(label: S, col: u32) -> Self {
        Self {
            label: label.into(),
            col,
        }
    }
}

/// The full selection state for one split run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// The cell text that marks the header row
    pub marker_value: String,
    /// The column (0-based) in which the marker is looked up
    pub marker_col: u32,
    /// Columns to sum per group, in display order
    pub sum_columns: Vec<SumColumn>,
}

impl Selection {
    /// Create a selection with no sum columns
    pub fn new<S: Into<String>>(marker_value: S, marker_col: u32) -> Self {
        Self {
            marker_value: marker_value.into(),
            marker_col,
            sum_columns: Vec::new(),
        }
    }

    /// Capture the marker from the host's currently selected cell
    pub fn capture<R: RangeSource + ?Sized>(source: &R) -> Result<Self> {
        let cell = source.selected_cell()?;
        let col = letters_to_column(&cell.column_letters)?;
        Ok(Self::new(cell.text, col))
    }

    /// Append a sum column (builder form)
    pub fn with_sum_column<S: Into<String>>(mut self, label: S, col: u32) -> Self {
        self.add_sum_column(SumColumn::new(label, col));
        self
    }

    /// Append a sum column
    pub fn add_sum_column(&mut self, sum: SumColumn) {
        self.sum_columns.push(sum);
    }

    /// Append a sum column from the host's currently selected cell
    pub fn add_sum_column_from<R: RangeSource + ?Sized>(&mut self, source: &R) -> Result<()> {
        let cell = source.selected_cell()?;
        let col = letters_to_column(&cell.column_letters)?;
        self.add_sum_column(SumColumn::new(cell.text, col));
        Ok(())
    }

    /// The sum-column labels joined for display ("Amount, Qty")
    pub fn sum_labels(&self) -> String {
        self.sum_columns
            .iter()
            .map(|s| s.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let sel = Selection::new("Region", 0)
            .with_sum_column("Amount", 1)
            .with_sum_column("Qty", 3);

        assert_eq!(sel.marker_value, "Region");
        assert_eq!(sel.marker_col, 0);
        assert_eq!(sel.sum_columns.len(), 2);
        assert_eq!(sel.sum_columns[0], SumColumn::new("Amount", 1));
        assert_eq!(sel.sum_labels(), "Amount, Qty");
    }

    #[test]
    fn test_reset_is_replacement() {
        let sel = Selection::new("Region", 0).with_sum_column("Amount", 1);
        // "Restart" builds a new value; nothing carries over.
        let sel = Selection::new(sel.marker_value.clone(), 2);
        assert!(sel.sum_columns.is_empty());
        assert_eq!(sel.marker_col, 2);
    }
}
