//! The split pipeline
//!
//! One "run split" action: partition the used range, then materialize each
//! group onto its own sheet through the [`SheetWriter`] collaborator. Runs
//! synchronously and serially; group writes are independent commits, so a
//! host failure aborts the rest of the run but does not roll back sheets
//! already written.

use crate::aggregate::sums;
use crate::error::Result;
use crate::host::{Format, SheetWriter};
use crate::layout::TableLayout;
use crate::partition::partition;
use crate::selection::Selection;

/// What a split run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Destination sheet names, in emission (first-appearance) order
    pub sheets: Vec<String>,
}

/// Split `rows` into per-group sheets according to `selection`.
///
/// The used range is recomputed from scratch on every run; nothing is cached
/// across runs. A selection whose marker value never matches produces an
/// empty report, not an error.
pub fn split_used_range<W: SheetWriter + ?Sized>(
    writer: &mut W,
    rows: &[Vec<String>],
    selection: &Selection,
) -> Result<SplitReport> {
    let part = partition(rows, &selection.marker_value, selection.marker_col);
    if !part.has_header() {
        tracing::info!(
            marker = %selection.marker_value,
            "marker value not found, nothing to split"
        );
        return Ok(SplitReport::default());
    }

    let mut report = SplitReport::default();

    for group in &part.groups {
        let layout = TableLayout::for_group(part.header.len(), group.rows.len());

        if !writer.sheet_exists(&group.key)? {
            writer.create_sheet(&group.key)?;
        }
        writer.clear_sheet(&group.key)?;

        writer.write_range(
            &group.key,
            &layout.header_range(),
            std::slice::from_ref(&part.header),
            &Format::header(),
        )?;

        if let Some(data_range) = layout.data_range() {
            writer.write_range(&group.key, &data_range, &group.rows, &Format::body())?;
        }

        let totals = sums(&group.rows, &selection.sum_columns);
        for (sum_col, total) in selection.sum_columns.iter().zip(totals) {
            writer.write_range(
                &group.key,
                &layout.sum_cell(sum_col.col),
                &[vec![total.to_string()]],
                &Format::sum(),
            )?;
        }

        if let Some(data_range) = layout.data_range() {
            writer.autofit(&group.key, &data_range)?;
        }

        tracing::info!(sheet = %group.key, rows = group.rows.len(), "wrote group sheet");
        report.sheets.push(group.key.clone());
    }

    Ok(report)
}
