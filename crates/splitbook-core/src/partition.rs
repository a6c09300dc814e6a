//! Used-range partitioner
//!
//! Scans the used range top to bottom. Rows before the header row (the first
//! row whose marker-column cell equals the marker value exactly) are
//! preamble and dropped. Every row after the header is assigned to a group
//! keyed by the sanitized value of its *own* marker-column cell.

use ahash::AHashMap;

use crate::key::sanitize_key;

/// One group of data rows bound for one destination sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Sanitized group key, also the destination sheet name
    pub key: String,
    /// Data rows in original row order
    pub rows: Vec<Vec<String>>,
}

/// Groups in first-appearance order
///
/// Iteration order is explicit: a vector of groups plus a key index, never
/// the incidental order of a hash map.
#[derive(Debug, Default, Clone)]
pub struct Groups {
    groups: Vec<Group>,
    index: AHashMap<String, usize>,
}

impl Groups {
    /// Create an empty group collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row to the group for `key`, creating the group on first use
    pub fn push_row(&mut self, key: &str, row: Vec<String>) {
        let pos = match self.index.get(key) {
            Some(&pos) => pos,
            None => {
                let pos = self.groups.len();
                self.groups.push(Group {
                    key: key.to_string(),
                    rows: Vec::new(),
                });
                self.index.insert(key.to_string(), pos);
                pos
            }
        };
        self.groups[pos].rows.push(row);
    }

    /// Look up a group by key
    pub fn get(&self, key: &str) -> Option<&Group> {
        self.index.get(key).map(|&pos| &self.groups[pos])
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True if no group exists
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate groups in first-appearance order
    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    /// Group keys in first-appearance order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.key.as_str())
    }

    /// Total number of data rows across all groups
    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|g| g.rows.len()).sum()
    }
}

impl<'a> IntoIterator for &'a Groups {
    type Item = &'a Group;
    type IntoIter = std::slice::Iter<'a, Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Result of partitioning a used range
#[derive(Debug, Default, Clone)]
pub struct Partition {
    /// The header row, verbatim; empty when the marker was never found
    pub header: Vec<String>,
    /// Data-row groups in first-appearance order
    pub groups: Groups,
}

impl Partition {
    /// True when the marker value was found in the marker column
    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }
}

/// Partition a used range into a header row and per-key groups.
///
/// `marker_col` is 0-based. Marker matching is exact string equality; group
/// keys go through [`sanitize_key`]. A post-header row too short to contain
/// the marker column is skipped (and logged), not an error. If the marker is
/// never matched the result has an empty header and no groups.
pub fn partition(rows: &[Vec<String>], marker_value: &str, marker_col: u32) -> Partition {
    let col = marker_col as usize;
    let mut result = Partition::default();
    let mut past_marker = false;

    for (row_idx, row) in rows.iter().enumerate() {
        if !past_marker {
            if row.get(col).map(String::as_str) == Some(marker_value) {
                result.header = row.clone();
                past_marker = true;
            }
            continue;
        }

        let Some(raw) = row.get(col) else {
            tracing::warn!(row = row_idx, "row too short for marker column, skipped");
            continue;
        };

        let key = sanitize_key(raw);
        result.groups.push_row(&key, row.clone());
    }

    result
}
