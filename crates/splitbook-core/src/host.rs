//! Host collaborator contracts
//!
//! The split pipeline never touches a workbook directly. Reading the current
//! selection and the used range goes through [`RangeSource`]; creating,
//! clearing, and writing destination sheets goes through [`SheetWriter`].
//! Hosts report failures as [`Error::Host`](crate::Error::Host); a failure
//! aborts the current split and already-written sheets are left in place.

use crate::error::Result;
use crate::layout::SheetRange;

/// The currently selected single cell, as exposed by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedCell {
    /// The cell's display text
    pub text: String,
    /// The cell's column letters ("A", "BC")
    pub column_letters: String,
}

/// Cell formatting applied with a range write
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Format {
    /// Background fill color ("#244062"), if any
    pub fill_color: Option<String>,
    /// Font color ("white"), if any
    pub font_color: Option<String>,
    /// Bold text
    pub bold: bool,
    /// Font size in points, if set
    pub font_size: Option<f64>,
}

impl Format {
    /// Formatting for the header row: dark fill, white bold 12pt text
    pub fn header() -> Self {
        Self {
            fill_color: Some("#244062".to_string()),
            font_color: Some("white".to_string()),
            bold: true,
            font_size: Some(12.0),
        }
    }

    /// Formatting for data rows: 12pt text
    pub fn body() -> Self {
        Self {
            font_size: Some(12.0),
            ..Self::default()
        }
    }

    /// Formatting for sum cells: bold 12pt text
    pub fn sum() -> Self {
        Self {
            bold: true,
            font_size: Some(12.0),
            ..Self::default()
        }
    }
}

/// Read side of the host: current selection and the active sheet's used range
pub trait RangeSource {
    /// The currently selected single cell
    fn selected_cell(&self) -> Result<SelectedCell>;

    /// The active sheet's full used region as rows of cell text
    fn used_range(&self) -> Result<Vec<Vec<String>>>;
}

/// Write side of the host: destination sheet management and range writes
pub trait SheetWriter {
    /// Whether a sheet with this name exists
    fn sheet_exists(&self, name: &str) -> Result<bool>;

    /// Create an empty sheet with this name
    fn create_sheet(&mut self, name: &str) -> Result<()>;

    /// Remove all content from an existing sheet
    fn clear_sheet(&mut self, name: &str) -> Result<()>;

    /// Write a block of values into `range` on the named sheet
    fn write_range(
        &mut self,
        name: &str,
        range: &SheetRange,
        values: &[Vec<String>],
        format: &Format,
    ) -> Result<()>;

    /// Auto-fit the columns and rows covered by `range`
    fn autofit(&mut self, name: &str, range: &SheetRange) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_presets() {
        let header = Format::header();
        assert_eq!(header.fill_color.as_deref(), Some("#244062"));
        assert_eq!(header.font_color.as_deref(), Some("white"));
        assert!(header.bold);
        assert_eq!(header.font_size, Some(12.0));

        let body = Format::body();
        assert!(!body.bold);
        assert!(body.fill_color.is_none());
        assert_eq!(body.font_size, Some(12.0));

        assert!(Format::sum().bold);
    }
}
