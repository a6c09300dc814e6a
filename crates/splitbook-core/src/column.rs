//! Column address codec
//!
//! Spreadsheet columns are named in bijective base-26: A..Z, AA..AZ, BA.., so
//! there is no digit for zero and "AA" follows "Z". Internally columns are
//! 0-based ordinals (A = 0).

use crate::error::{Error, Result};
use crate::MAX_COLS;

/// Convert a 0-based column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
pub fn column_to_letters(col: u32) -> String {
    let mut result = String::new();
    let mut n = col + 1; // 1-based for calculation

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        result.insert(0, c);
        n /= 26;
    }

    result
}

/// Convert column letters to a 0-based index (A = 0, Z = 25, AA = 26, etc.)
///
/// Lower-case letters are accepted and treated as upper case.
pub fn letters_to_column(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidColumn("empty column letters".into()));
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumn(format!(
                "invalid column letter '{c}' in '{letters}'"
            )));
        }
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        // Bail as soon as the column limit is passed; long inputs would
        // otherwise overflow the accumulator.
        if col > MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col - 1, MAX_COLS - 1));
        }
    }

    Ok(col - 1) // Convert to 0-based
}
