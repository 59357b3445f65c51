//! Slot-grid bookkeeping for cursor navigation.
//!
//! The widget's focusable slots are the synthetic "Select All" entry (slot 0)
//! followed by every option in display order (slot `i + 1` for option `i`).
//! Because the core's column ranges are consecutive in option-index space,
//! linear slot order reads the columns left to right, top to bottom. This
//! module maps slots to `(column, row)` grid positions and back so the
//! cursor can move between columns while keeping its row.

use multicheck_core::{column_ranges, ColumnRange};

/// Grid geometry for a given option count and column count.
#[derive(Debug, Clone)]
pub struct SlotGrid {
    ranges: Vec<ColumnRange>,
    option_count: usize,
}

impl SlotGrid {
    /// Build the grid. A zero column count is treated as 1.
    pub fn new(option_count: usize, columns: usize) -> Self {
        let columns = columns.max(1);
        // Cannot fail: columns >= 1.
        let ranges = column_ranges(option_count, columns).unwrap_or_default();
        Self {
            ranges,
            option_count,
        }
    }

    /// Total number of focusable slots ("Select All" plus every option).
    pub fn slot_count(&self) -> usize {
        self.option_count + 1
    }

    /// Number of display columns.
    pub fn columns(&self) -> usize {
        self.ranges.len()
    }

    /// The option ranges backing each column.
    pub fn ranges(&self) -> &[ColumnRange] {
        &self.ranges
    }

    /// Rendered rows in `column`: its option count, plus the reserved
    /// "Select All" row for column 0.
    pub fn rows_in_column(&self, column: usize) -> usize {
        match self.ranges.get(column) {
            Some(range) => range.len() + usize::from(column == 0),
            None => 0,
        }
    }

    /// Grid position of `slot`, or `None` if the slot is out of bounds or
    /// its option fell into a degenerate range.
    pub fn position(&self, slot: usize) -> Option<(usize, usize)> {
        if slot == 0 {
            return Some((0, 0));
        }
        let index = slot - 1;
        if index >= self.option_count {
            return None;
        }
        for (column, range) in self.ranges.iter().enumerate() {
            if range.is_empty() {
                continue;
            }
            if index >= range.start && index < range.end {
                let row = index - range.start + usize::from(column == 0);
                return Some((column, row));
            }
        }
        None
    }

    /// Slot at a grid position, or `None` if the cell is empty.
    pub fn slot_at(&self, column: usize, row: usize) -> Option<usize> {
        if column == 0 && row == 0 {
            return Some(0);
        }
        let range = self.ranges.get(column)?;
        let offset = row.checked_sub(usize::from(column == 0))?;
        let index = range.start + offset;
        if range.is_empty() || index >= range.end {
            return None;
        }
        Some(index + 1)
    }

    /// Move `slot` one column left or right, keeping the row where possible
    /// and clamping to the target column's last occupied row. Returns the
    /// original slot when there is no occupied neighbor column.
    pub fn step_column(&self, slot: usize, right: bool) -> usize {
        let Some((column, row)) = self.position(slot) else {
            return slot;
        };
        let mut target = column;
        loop {
            target = if right {
                target + 1
            } else {
                match target.checked_sub(1) {
                    Some(t) => t,
                    None => return slot,
                }
            };
            if target >= self.columns() {
                return slot;
            }
            let rows = self.rows_in_column(target);
            if rows == 0 {
                continue;
            }
            let row = row.min(rows - 1);
            if let Some(next) = self.slot_at(target, row) {
                return next;
            }
        }
    }
}
