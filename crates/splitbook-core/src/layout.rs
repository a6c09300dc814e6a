//! Output table layout
//!
//! Address arithmetic for one destination sheet: the header goes in row 1
//! across the header's width, data rows follow from row 2, and each sum lands
//! one row below the last data row in its own column.

use std::fmt;

use crate::column::column_to_letters;

/// A rectangular range of cells (rows and columns 0-based, inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetRange {
    /// Top row
    pub start_row: u32,
    /// Left column
    pub start_col: u32,
    /// Bottom row
    pub end_row: u32,
    /// Right column
    pub end_col: u32,
}

impl SheetRange {
    /// Create a range from row/column indices
    pub fn from_indices(start_row: u32, start_col: u32, end_row: u32, end_col: u32) -> Self {
        Self {
            start_row: start_row.min(end_row),
            start_col: start_col.min(end_col),
            end_row: start_row.max(end_row),
            end_col: start_col.max(end_col),
        }
    }

    /// Create a single-cell range
    pub fn single(row: u32, col: u32) -> Self {
        Self::from_indices(row, col, row, col)
    }

    /// Number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end_row - self.start_row + 1
    }

    /// Number of columns in the range
    pub fn col_count(&self) -> u32 {
        self.end_col - self.start_col + 1
    }

    /// Format as an A1-style string ("A2:C5", or "B4" for a single cell)
    pub fn to_a1_string(&self) -> String {
        let start = format!(
            "{}{}",
            column_to_letters(self.start_col),
            self.start_row + 1
        );
        if self.start_row == self.end_row && self.start_col == self.end_col {
            start
        } else {
            format!(
                "{}:{}{}",
                start,
                column_to_letters(self.end_col),
                self.end_row + 1
            )
        }
    }
}

impl fmt::Display for SheetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

/// Where the pieces of one group's output table go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    header_len: usize,
    data_rows: usize,
}

impl TableLayout {
    /// Layout for a group with the given header width and data row count
    pub fn for_group(header_len: usize, data_rows: usize) -> Self {
        Self {
            header_len,
            data_rows,
        }
    }

    /// Header range: row 1, full header width
    pub fn header_range(&self) -> SheetRange {
        let width = self.header_len.max(1) as u32;
        SheetRange::from_indices(0, 0, 0, width - 1)
    }

    /// Data range: rows 2..=(1 + data rows), same column span as the header.
    /// `None` for a header-only group.
    pub fn data_range(&self) -> Option<SheetRange> {
        if self.data_rows == 0 {
            return None;
        }
        let width = self.header_len.max(1) as u32;
        Some(SheetRange::from_indices(
            1,
            0,
            self.data_rows as u32,
            width - 1,
        ))
    }

    /// The single cell a sum for `col` is written to: one row below the last
    /// data row, in the summed column.
    pub fn sum_cell(&self, col: u32) -> SheetRange {
        SheetRange::single(1 + self.data_rows as u32, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_a1_formatting() {
        assert_eq!(SheetRange::from_indices(0, 0, 0, 1).to_a1_string(), "A1:B1");
        assert_eq!(SheetRange::from_indices(1, 0, 3, 2).to_a1_string(), "A2:C4");
        assert_eq!(SheetRange::single(3, 1).to_a1_string(), "B4");
        assert_eq!(SheetRange::from_indices(0, 26, 0, 27).to_a1_string(), "AA1:AB1");
    }

    #[test]
    fn test_normalization() {
        let r = SheetRange::from_indices(5, 3, 1, 0);
        assert_eq!(r.to_a1_string(), "A2:D6");
        assert_eq!(r.row_count(), 5);
        assert_eq!(r.col_count(), 4);
    }

    #[test]
    fn test_group_layout() {
        // Two-column header, two data rows.
        let layout = TableLayout::for_group(2, 2);
        assert_eq!(layout.header_range().to_a1_string(), "A1:B1");
        assert_eq!(layout.data_range().unwrap().to_a1_string(), "A2:B3");
        assert_eq!(layout.sum_cell(1).to_a1_string(), "B4");
    }

    #[test]
    fn test_single_data_row() {
        let layout = TableLayout::for_group(2, 1);
        assert_eq!(layout.data_range().unwrap().to_a1_string(), "A2:B2");
        assert_eq!(layout.sum_cell(1).to_a1_string(), "B3");
    }

    #[test]
    fn test_header_only_group() {
        let layout = TableLayout::for_group(3, 0);
        assert_eq!(layout.header_range().to_a1_string(), "A1:C1");
        assert!(layout.data_range().is_none());
        assert_eq!(layout.sum_cell(0).to_a1_string(), "A2");
    }
}
