//! Per-sheet CSV file writer

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use splitbook_core::{Error, Format, Result, SheetRange, SheetWriter};

use crate::error::CsvResult;

/// A [`SheetWriter`] that materializes each sheet as `<dir>/<name>.csv`.
///
/// Writes are buffered per sheet and written to disk by [`flush`], so a
/// sheet's file appears once its cells are complete. Formatting and auto-fit
/// are accepted and ignored.
///
/// [`flush`]: CsvDirWriter::flush
#[derive(Debug)]
pub struct CsvDirWriter {
    dir: PathBuf,
    /// Buffered cells per sheet, keyed by (row, col)
    sheets: HashMap<String, HashMap<(u32, u32), String>>,
    /// Sheet creation order, for deterministic flushing
    order: Vec<String>,
}

impl CsvDirWriter {
    /// Create a writer targeting `dir` (created on flush if missing)
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            sheets: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Sheet names in creation order
    pub fn sheet_names(&self) -> &[String] {
        &self.order
    }

    /// Write every buffered sheet to disk and return the file paths
    pub fn flush(&self) -> CsvResult<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.dir)?;

        let mut paths = Vec::with_capacity(self.order.len());
        for name in &self.order {
            let cells = &self.sheets[name];
            let path = self.dir.join(format!("{name}.csv"));
            let mut writer = csv::Writer::from_path(&path)?;

            for row in Self::to_dense(cells) {
                writer.write_record(&row)?;
            }
            writer.flush()?;
            paths.push(path);
        }

        Ok(paths)
    }

    fn to_dense(cells: &HashMap<(u32, u32), String>) -> Vec<Vec<String>> {
        let Some(max_row) = cells.keys().map(|&(r, _)| r).max() else {
            return Vec::new();
        };
        let max_col = cells.keys().map(|&(_, c)| c).max().unwrap_or(0);

        (0..=max_row)
            .map(|r| {
                (0..=max_col)
                    .map(|c| cells.get(&(r, c)).cloned().unwrap_or_default())
                    .collect()
            })
            .collect()
    }

    fn sheet_mut(&mut self, name: &str) -> Result<&mut HashMap<(u32, u32), String>> {
        self.sheets
            .get_mut(name)
            .ok_or_else(|| Error::host(format!("sheet '{name}' was never created")))
    }
}

impl SheetWriter for CsvDirWriter {
    fn sheet_exists(&self, name: &str) -> Result<bool> {
        Ok(self.sheets.contains_key(name))
    }

    fn create_sheet(&mut self, name: &str) -> Result<()> {
        self.sheets.insert(name.to_string(), HashMap::new());
        self.order.push(name.to_string());
        Ok(())
    }

    fn clear_sheet(&mut self, name: &str) -> Result<()> {
        self.sheet_mut(name)?.clear();
        Ok(())
    }

    fn write_range(
        &mut self,
        name: &str,
        range: &SheetRange,
        values: &[Vec<String>],
        _format: &Format,
    ) -> Result<()> {
        let (start_row, start_col) = (range.start_row, range.start_col);
        let cells = self.sheet_mut(name)?;

        for (r, row) in values.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                cells.insert((start_row + r as u32, start_col + c as u32), value.clone());
            }
        }
        Ok(())
    }

    fn autofit(&mut self, _name: &str, _range: &SheetRange) -> Result<()> {
        Ok(()) // nothing to fit in a CSV file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use splitbook_core::{split_used_range, Selection};

    fn matrix(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_split_to_csv_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = CsvDirWriter::new(dir.path());

        let rows = matrix(&[
            &["Region", "Amount"],
            &["East", "10"],
            &["West", "20"],
            &["East", "30"],
        ]);
        let selection = Selection::new("Region", 0).with_sum_column("Amount", 1);
        let report = split_used_range(&mut writer, &rows, &selection).unwrap();
        assert_eq!(report.sheets, vec!["East", "West"]);

        let paths = writer.flush().unwrap();
        assert_eq!(paths.len(), 2);

        let east = std::fs::read_to_string(dir.path().join("East.csv")).unwrap();
        assert_eq!(east, "Region,Amount\nEast,10\nEast,30\n,40\n");

        let west = std::fs::read_to_string(dir.path().join("West.csv")).unwrap();
        assert_eq!(west, "Region,Amount\nWest,20\n,20\n");
    }

    #[test]
    fn test_clear_drops_buffered_cells() {
        let mut writer = CsvDirWriter::new("unused");
        writer.create_sheet("S").unwrap();
        writer
            .write_range(
                "S",
                &SheetRange::single(0, 0),
                &[vec!["x".to_string()]],
                &Format::body(),
            )
            .unwrap();
        writer.clear_sheet("S").unwrap();

        assert!(writer.sheet_exists("S").unwrap());
        assert!(CsvDirWriter::to_dense(&writer.sheets["S"]).is_empty());
    }

    #[test]
    fn test_write_before_create_fails() {
        let mut writer = CsvDirWriter::new("unused");
        assert!(writer
            .write_range(
                "nope",
                &SheetRange::single(0, 0),
                &[vec!["x".to_string()]],
                &Format::body(),
            )
            .is_err());
    }
}
