//! Per-group column sums
//!
//! A cell is numeric only when its whole text is an unsigned integer made of
//! ASCII digits (`^[0-9]+$`). Negatives, decimals, thousand separators,
//! scientific notation, and non-ASCII digit scripts contribute zero. This is
//! deliberately narrow; widening it would silently change totals.

use lazy_regex::regex_is_match;

use crate::selection::SumColumn;

/// Sum the numeric cells of one column (0-based) across the given rows.
///
/// Rows too short to contain the column contribute zero.
pub fn sum_column(rows: &[Vec<String>], col: u32) -> f64 {
    let col = col as usize;
    let mut total = 0.0;
    for row in rows {
        if let Some(cell) = row.get(col) {
            if regex_is_match!(r"^[0-9]+$", cell) {
                total += cell.parse::<f64>().unwrap_or(0.0);
            }
        }
    }
    total
}

/// Compute one total per sum column, positionally aligned with the selection.
pub fn sums(rows: &[Vec<String>], sum_columns: &[SumColumn]) -> Vec<f64> {
    sum_columns
        .iter()
        .map(|s| sum_column(rows, s.col))
        .collect()
}
