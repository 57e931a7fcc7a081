//! Tabular data access.
//!
//! Diagrams read their values through the [`DataModel`] trait: a rows ×
//! columns grid of optional numbers, where `None` means "missing". A pie or
//! radar diagram reads columns of the first row / all rows of a column, a
//! ring diagram reads every row as one ring.

use crate::errors::ChartError;

/// Identifies the data cell a drawing operation originated from.
///
/// Carried on every emitted shape so hosts can map screen geometry back to
/// data (tooltips, hit testing).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId {
    pub row: usize,
    pub column: usize,
}

impl CellId {
    pub fn new(row: usize, column: usize) -> CellId {
        CellId { row, column }
    }
}

/// A 2D source of numeric cell values.
pub trait DataModel {
    fn row_count(&self) -> usize;
    fn column_count(&self) -> usize;

    /// The value at (row, column), or `None` for a missing cell.
    /// Out-of-range indices are treated as missing.
    fn cell_value(&self, row: usize, column: usize) -> Option<f64>;
}

/// Collect one row as a value slice.
pub(crate) fn row_values(model: &dyn DataModel, row: usize) -> Vec<Option<f64>> {
    (0..model.column_count())
        .map(|col| model.cell_value(row, col))
        .collect()
}

/// Collect one column as a value slice.
pub(crate) fn column_values(model: &dyn DataModel, column: usize) -> Vec<Option<f64>> {
    (0..model.row_count())
        .map(|row| model.cell_value(row, column))
        .collect()
}

/// Simple row-major in-memory table.
#[derive(Clone, Debug, Default)]
pub struct TableModel {
    rows: usize,
    columns: usize,
    cells: Vec<Option<f64>>,
}

impl TableModel {
    /// Build from rows of optional values. All rows must have equal length.
    pub fn from_rows(rows: Vec<Vec<Option<f64>>>) -> Result<TableModel, ChartError> {
        let columns = rows.first().map(Vec::len).unwrap_or(0);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(ChartError::RaggedRows {
                    row: i,
                    expected: columns,
                    got: row.len(),
                });
            }
        }
        Ok(TableModel {
            rows: rows.len(),
            columns,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build from rows of plain values.
    pub fn from_values(rows: Vec<Vec<f64>>) -> Result<TableModel, ChartError> {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Some).collect())
                .collect(),
        )
    }

    /// Build from text cells. Cells that do not parse as a number become
    /// missing instead of failing.
    pub fn from_text_rows(rows: &[&[&str]]) -> Result<TableModel, ChartError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|cell| cell.trim().parse().ok()).collect())
                .collect(),
        )
    }

    pub fn set_cell(&mut self, row: usize, column: usize, value: Option<f64>) {
        if row < self.rows && column < self.columns {
            self.cells[row * self.columns + column] = value;
        }
    }
}

impl DataModel for TableModel {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn cell_value(&self, row: usize, column: usize) -> Option<f64> {
        if row < self.rows && column < self.columns {
            self.cells[row * self.columns + column]
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_round_trips() {
        let m = TableModel::from_values(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.row_count(), 2);
        assert_eq!(m.column_count(), 2);
        assert_eq!(m.cell_value(0, 1), Some(2.0));
        assert_eq!(m.cell_value(1, 0), Some(3.0));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = TableModel::from_values(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            ChartError::RaggedRows {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn unparseable_text_becomes_missing() {
        let m = TableModel::from_text_rows(&[&["1.5", "n/a", " 2 "]]).unwrap();
        assert_eq!(m.cell_value(0, 0), Some(1.5));
        assert_eq!(m.cell_value(0, 1), None);
        assert_eq!(m.cell_value(0, 2), Some(2.0));
    }

    #[test]
    fn out_of_range_is_missing() {
        let m = TableModel::from_values(vec![vec![1.0]]).unwrap();
        assert_eq!(m.cell_value(5, 0), None);
        assert_eq!(m.cell_value(0, 5), None);
    }

    #[test]
    fn empty_table() {
        let m = TableModel::from_rows(vec![]).unwrap();
        assert_eq!(m.row_count(), 0);
        assert_eq!(m.column_count(), 0);
    }

    #[test]
    fn row_and_column_helpers() {
        let m = TableModel::from_rows(vec![
            vec![Some(1.0), None],
            vec![Some(3.0), Some(4.0)],
        ])
        .unwrap();
        assert_eq!(row_values(&m, 0), vec![Some(1.0), None]);
        assert_eq!(column_values(&m, 1), vec![None, Some(4.0)]);
    }
}
