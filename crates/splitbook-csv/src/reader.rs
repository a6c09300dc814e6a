//! CSV matrix reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;

/// Read a CSV file as a used-range matrix.
///
/// Every record is data; no header inference happens here, since the split
/// locates its header row by the marker value. Records may have ragged
/// lengths.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> CsvResult<Vec<Vec<String>>> {
    let file = File::open(path)?;
    read_matrix_from(file)
}

/// Read CSV from any reader as a used-range matrix
pub fn read_matrix_from<R: Read>(reader: R) -> CsvResult<Vec<Vec<String>>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}
