//! Column partitioning for the checkbox grid.
//!
//! Splits a flat option sequence into balanced top-to-bottom columns while
//! reserving the first row of column 0 for the synthetic "Select All" entry.
//! The partitioner reasons purely in option-index space: the reserved slot is
//! accounted for in the arithmetic but never appears in any range, and the
//! renderer is responsible for drawing it ahead of column 0's first option.

use crate::option::CheckOption;

/// Number of rows reserved for the "Select All" entry in column 0.
const SELECT_ALL_SLOTS: usize = 1;

/// Errors from the layout functions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The requested column count was zero.
    #[error("column count must be at least 1")]
    InvalidColumnCount,
}

/// A half-open index interval `[start, end)` into the option sequence,
/// naming which options belong to one display column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRange {
    /// Index of the first option in this column.
    pub start: usize,
    /// One past the index of the last option in this column.
    pub end: usize,
}

impl ColumnRange {
    /// Number of options in this column.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether this column holds no options.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The options belonging to this column.
    ///
    /// Degenerate ranges (empty, inverted, or out of bounds) yield an empty
    /// slice, so renderers can iterate every range without bounds checks.
    pub fn slice<'a>(&self, options: &'a [CheckOption]) -> &'a [CheckOption] {
        if self.start >= self.end || self.start >= options.len() {
            return &[];
        }
        &options[self.start..self.end.min(options.len())]
    }
}

/// Partition `length` options into `columns` balanced columns.
///
/// Returns one [`ColumnRange`] per column. The row capacity is
/// `ceil((length + 1) / columns)`: the option count plus the reserved
/// "Select All" slot, divided evenly with earlier columns absorbing the
/// remainder. Column 0's range is one option short of the row capacity
/// because its first row is the reserved slot; every later column's window
/// shifts left by that one consumed slot.
///
/// `length == 0` still yields `columns` ranges, all empty. A column count of
/// zero is rejected.
pub fn column_ranges(length: usize, columns: usize) -> Result<Vec<ColumnRange>, LayoutError> {
    if columns == 0 {
        return Err(LayoutError::InvalidColumnCount);
    }

    let rows = (length + SELECT_ALL_SLOTS).div_ceil(columns);
    let mut ranges = Vec::with_capacity(columns);
    for i in 0..columns {
        let mut start = rows * i;
        let mut end = rows * (i + 1);
        if end > length {
            end = length;
        }
        if i > 0 {
            start -= SELECT_ALL_SLOTS;
        }
        if i + 1 < columns {
            end = end.saturating_sub(SELECT_ALL_SLOTS);
        }
        ranges.push(ColumnRange { start, end });
    }
    Ok(ranges)
}
