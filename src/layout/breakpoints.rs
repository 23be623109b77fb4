//! Column-count policy keyed on viewport width.
//!
//! The table is evaluated widest-first and the first threshold the width
//! reaches wins. Widths below every threshold, including zero and negative
//! widths, get a single column.

use thiserror::Error;

/// Largest column count a breakpoint row may ask for.
pub const MAX_COLUMNS: usize = 64;

/// A single `(min_width, columns)` row of the breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    /// Minimum viewport width (inclusive) for this row to apply.
    pub min_width: i64,
    /// Number of columns used when this row applies.
    pub columns: usize,
}

impl Breakpoint {
    /// Create a breakpoint row.
    pub const fn new(min_width: i64, columns: usize) -> Self {
        Self { min_width, columns }
    }
}

/// Errors raised when building a custom breakpoint table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakpointsError {
    /// A row asked for zero columns.
    #[error("Breakpoint at width {min_width} must have at least one column")]
    ZeroColumns {
        /// Width threshold of the offending row.
        min_width: i64,
    },

    /// A row asked for more than [`MAX_COLUMNS`] columns.
    #[error("Breakpoint at width {min_width} asks for {columns} columns (max {max})", max = MAX_COLUMNS)]
    TooManyColumns {
        /// Width threshold of the offending row.
        min_width: i64,
        /// Requested column count.
        columns: usize,
    },

    /// Two rows share the same width threshold.
    #[error("Duplicate breakpoint threshold {min_width}")]
    DuplicateThreshold {
        /// The repeated threshold.
        min_width: i64,
    },
}

/// Breakpoint table mapping viewport widths to column counts.
///
/// Rows are kept sorted widest-first. The implicit fallback row is one
/// column for any width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    rows: Vec<Breakpoint>,
}

impl Breakpoints {
    /// Default table: 1200 → 4, 992 → 3, 768 → 2, otherwise 1.
    pub const DEFAULT_ROWS: [Breakpoint; 3] = [
        Breakpoint::new(1200, 4),
        Breakpoint::new(992, 3),
        Breakpoint::new(768, 2),
    ];

    /// Build a table from rows in any order.
    ///
    /// Rows are sorted widest-first. Each row must ask for between one and
    /// [`MAX_COLUMNS`] columns and thresholds must be unique.
    ///
    /// # Errors
    ///
    /// Returns [`BreakpointsError`] for zero-column or oversized rows and
    /// duplicate thresholds.
    pub fn new(rows: impl IntoIterator<Item = Breakpoint>) -> Result<Self, BreakpointsError> {
        let mut rows: Vec<Breakpoint> = rows.into_iter().collect();

        if let Some(bad) = rows.iter().find(|row| row.columns == 0) {
            return Err(BreakpointsError::ZeroColumns {
                min_width: bad.min_width,
            });
        }

        if let Some(bad) = rows.iter().find(|row| row.columns > MAX_COLUMNS) {
            return Err(BreakpointsError::TooManyColumns {
                min_width: bad.min_width,
                columns: bad.columns,
            });
        }

        rows.sort_by(|a, b| b.min_width.cmp(&a.min_width));

        if let Some(pair) = rows.windows(2).find(|w| w[0].min_width == w[1].min_width) {
            return Err(BreakpointsError::DuplicateThreshold {
                min_width: pair[0].min_width,
            });
        }

        Ok(Self { rows })
    }

    /// Number of columns for the given viewport width.
    ///
    /// Always at least 1.
    pub fn column_count(&self, viewport_width: i64) -> usize {
        self.rows
            .iter()
            .find(|row| viewport_width >= row.min_width)
            .map_or(1, |row| row.columns)
    }

    /// Rows of the table, widest-first.
    pub fn rows(&self) -> &[Breakpoint] {
        &self.rows
    }

    /// Largest column count any width can produce.
    pub fn max_columns(&self) -> usize {
        self.rows.iter().map(|row| row.columns).max().unwrap_or(1).max(1)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_boundaries() {
        let bp = Breakpoints::default();
        assert_eq!(bp.column_count(1200), 4);
        assert_eq!(bp.column_count(1199), 3);
        assert_eq!(bp.column_count(992), 3);
        assert_eq!(bp.column_count(991), 2);
        assert_eq!(bp.column_count(768), 2);
        assert_eq!(bp.column_count(767), 1);
    }

    #[test]
    fn zero_and_negative_widths_get_one_column() {
        let bp = Breakpoints::default();
        assert_eq!(bp.column_count(0), 1);
        assert_eq!(bp.column_count(-1), 1);
        assert_eq!(bp.column_count(i64::MIN), 1);
    }

    #[test]
    fn huge_width_uses_widest_row() {
        let bp = Breakpoints::default();
        assert_eq!(bp.column_count(i64::MAX), 4);
    }

    #[test]
    fn custom_rows_are_sorted_widest_first() {
        let bp = Breakpoints::new([
            Breakpoint::new(500, 2),
            Breakpoint::new(1500, 5),
            Breakpoint::new(1000, 3),
        ])
        .unwrap();

        let thresholds: Vec<i64> = bp.rows().iter().map(|r| r.min_width).collect();
        assert_eq!(thresholds, vec![1500, 1000, 500]);
        assert_eq!(bp.column_count(1499), 3);
        assert_eq!(bp.column_count(1500), 5);
        assert_eq!(bp.column_count(499), 1);
    }

    #[test]
    fn first_matching_row_wins_even_if_narrower_row_has_more_columns() {
        // Unusual table: the narrower threshold asks for more columns.
        let bp = Breakpoints::new([Breakpoint::new(1000, 2), Breakpoint::new(500, 6)]).unwrap();
        assert_eq!(bp.column_count(1000), 2);
        assert_eq!(bp.column_count(999), 6);
        assert_eq!(bp.max_columns(), 6);
    }

    #[test]
    fn zero_column_row_is_rejected() {
        let result = Breakpoints::new([Breakpoint::new(800, 0)]);
        assert_eq!(result, Err(BreakpointsError::ZeroColumns { min_width: 800 }));
    }

    #[test]
    fn oversized_row_is_rejected() {
        let result = Breakpoints::new([Breakpoint::new(0, usize::MAX)]);
        assert_eq!(
            result,
            Err(BreakpointsError::TooManyColumns {
                min_width: 0,
                columns: usize::MAX
            })
        );
    }

    #[test]
    fn max_columns_row_is_accepted() {
        let bp = Breakpoints::new([Breakpoint::new(0, MAX_COLUMNS)]).unwrap();
        assert_eq!(bp.column_count(10), MAX_COLUMNS);
    }

    #[test]
    fn duplicate_threshold_is_rejected() {
        let result = Breakpoints::new([Breakpoint::new(800, 2), Breakpoint::new(800, 3)]);
        assert_eq!(
            result,
            Err(BreakpointsError::DuplicateThreshold { min_width: 800 })
        );
    }

    #[test]
    fn empty_table_is_always_one_column() {
        let bp = Breakpoints::new([]).unwrap();
        assert_eq!(bp.column_count(5000), 1);
        assert_eq!(bp.max_columns(), 1);
    }
}
