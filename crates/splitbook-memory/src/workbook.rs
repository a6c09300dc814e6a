//! In-memory workbook

use std::collections::HashMap;

use splitbook_core::{
    Error, Format, RangeSource, Result, SelectedCell, SheetRange, SheetWriter,
    MAX_SHEET_NAME_LEN,
};

use crate::error::MemoryError;

/// A destination sheet held in memory
#[derive(Debug, Default)]
pub struct MemorySheet {
    /// Sheet name
    name: String,
    /// Cell text keyed by (row, col), both 0-based
    cells: HashMap<(u32, u32), String>,
    /// Format of each written cell
    formats: HashMap<(u32, u32), Format>,
    /// Ranges an auto-fit was requested for
    autofit_ranges: Vec<SheetRange>,
}

impl MemorySheet {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cell text at (row, col), if written
    pub fn cell(&self, row: u32, col: u32) -> Option<&str> {
        self.cells.get(&(row, col)).map(String::as_str)
    }

    /// Format of the cell at (row, col), if written
    pub fn cell_format(&self, row: u32, col: u32) -> Option<&Format> {
        self.formats.get(&(row, col))
    }

    /// Number of written cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Ranges auto-fit was requested for, in request order
    pub fn autofit_ranges(&self) -> &[SheetRange] {
        &self.autofit_ranges
    }

    /// Dense matrix of everything written, trailing cells filled with ""
    pub fn to_matrix(&self) -> Vec<Vec<String>> {
        let Some(max_row) = self.cells.keys().map(|&(r, _)| r).max() else {
            return Vec::new();
        };
        let max_col = self.cells.keys().map(|&(_, c)| c).max().unwrap_or(0);

        (0..=max_row)
            .map(|r| {
                (0..=max_col)
                    .map(|c| self.cell(r, c).unwrap_or("").to_string())
                    .collect()
            })
            .collect()
    }
}

/// An in-memory workbook: a list of sheets plus the simulated user state
/// (active-sheet used range and selected cell) the split reads from.
#[derive(Debug, Default)]
pub struct MemoryWorkbook {
    sheets: Vec<MemorySheet>,
    active_range: Vec<Vec<String>>,
    selected: Option<SelectedCell>,
}

impl MemoryWorkbook {
    /// Create an empty workbook
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the active sheet's used range
    pub fn set_used_range(&mut self, rows: Vec<Vec<String>>) {
        self.active_range = rows;
    }

    /// Simulate the user selecting a cell
    pub fn select_cell<S: Into<String>>(&mut self, text: S, column_letters: S) {
        self.selected = Some(SelectedCell {
            text: text.into(),
            column_letters: column_letters.into(),
        });
    }

    /// Sheet names in creation order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name()).collect()
    }

    /// Look up a sheet by name
    pub fn sheet(&self, name: &str) -> Option<&MemorySheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    fn sheet_mut(&mut self, name: &str) -> Result<&mut MemorySheet> {
        self.sheets
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| Error::host(MemoryError::SheetNotFound(name.to_string())))
    }

    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {MAX_SHEET_NAME_LEN} characters)"
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        if name.contains(INVALID_CHARS) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name contains an invalid character: {name}"
            )));
        }

        // Case-insensitive duplicate check, as Excel enforces
        let name_lower = name.to_lowercase();
        if self.sheets.iter().any(|s| s.name.to_lowercase() == name_lower) {
            return Err(Error::host(MemoryError::DuplicateSheetName(
                name.to_string(),
            )));
        }

        Ok(())
    }
}

impl RangeSource for MemoryWorkbook {
    fn selected_cell(&self) -> Result<SelectedCell> {
        self.selected
            .clone()
            .ok_or_else(|| Error::host(MemoryError::NoSelection))
    }

    fn used_range(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.active_range.clone())
    }
}

impl SheetWriter for MemoryWorkbook {
    fn sheet_exists(&self, name: &str) -> Result<bool> {
        Ok(self.sheets.iter().any(|s| s.name == name))
    }

    fn create_sheet(&mut self, name: &str) -> Result<()> {
        self.validate_sheet_name(name)?;
        self.sheets.push(MemorySheet::new(name));
        Ok(())
    }

    fn clear_sheet(&mut self, name: &str) -> Result<()> {
        let sheet = self.sheet_mut(name)?;
        sheet.cells.clear();
        sheet.formats.clear();
        sheet.autofit_ranges.clear();
        Ok(())
    }

    fn write_range(
        &mut self,
        name: &str,
        range: &SheetRange,
        values: &[Vec<String>],
        format: &Format,
    ) -> Result<()> {
        let (start_row, start_col) = (range.start_row, range.start_col);
        let sheet = self.sheet_mut(name)?;

        for (r, row) in values.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                let pos = (start_row + r as u32, start_col + c as u32);
                sheet.cells.insert(pos, value.clone());
                sheet.formats.insert(pos, format.clone());
            }
        }
        Ok(())
    }

    fn autofit(&mut self, name: &str, range: &SheetRange) -> Result<()> {
        self.sheet_mut(name)?.autofit_ranges.push(*range);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_and_write() {
        let mut wb = MemoryWorkbook::new();
        wb.create_sheet("Data").unwrap();
        assert!(wb.sheet_exists("Data").unwrap());
        assert!(!wb.sheet_exists("Other").unwrap());

        let range = SheetRange::from_indices(0, 0, 0, 1);
        wb.write_range(
            "Data",
            &range,
            &[vec!["a".to_string(), "b".to_string()]],
            &Format::header(),
        )
        .unwrap();

        let sheet = wb.sheet("Data").unwrap();
        assert_eq!(sheet.cell(0, 0), Some("a"));
        assert_eq!(sheet.cell(0, 1), Some("b"));
        assert!(sheet.cell_format(0, 0).unwrap().bold);
    }

    #[test]
    fn test_write_offsets() {
        let mut wb = MemoryWorkbook::new();
        wb.create_sheet("S").unwrap();
        // Values land at the range's start, not at A1.
        wb.write_range(
            "S",
            &SheetRange::single(3, 1),
            &[vec!["40".to_string()]],
            &Format::sum(),
        )
        .unwrap();
        assert_eq!(wb.sheet("S").unwrap().cell(3, 1), Some("40"));
        assert_eq!(wb.sheet("S").unwrap().cell(0, 0), None);
    }

    #[test]
    fn test_invalid_names() {
        let mut wb = MemoryWorkbook::new();
        assert!(wb.create_sheet("").is_err());
        assert!(wb.create_sheet("a:b").is_err());
        assert!(wb.create_sheet(&"x".repeat(32)).is_err());

        wb.create_sheet("Data").unwrap();
        assert!(wb.create_sheet("data").is_err()); // case-insensitive duplicate
    }

    #[test]
    fn test_clear() {
        let mut wb = MemoryWorkbook::new();
        wb.create_sheet("S").unwrap();
        wb.write_range(
            "S",
            &SheetRange::single(0, 0),
            &[vec!["x".to_string()]],
            &Format::body(),
        )
        .unwrap();
        wb.clear_sheet("S").unwrap();
        assert_eq!(wb.sheet("S").unwrap().cell_count(), 0);
    }

    #[test]
    fn test_missing_sheet_is_host_error() {
        let mut wb = MemoryWorkbook::new();
        assert!(wb.clear_sheet("nope").is_err());
    }

    #[test]
    fn test_selection_source() {
        let mut wb = MemoryWorkbook::new();
        assert!(wb.selected_cell().is_err());

        wb.select_cell("Region", "A");
        let cell = wb.selected_cell().unwrap();
        assert_eq!(cell.text, "Region");
        assert_eq!(cell.column_letters, "A");
    }
}
