//! Domain models for a printer listing.
//!
//! - [`Cell`] - one comma-delimited field, kept exactly as written
//! - [`Row`] - one newline-delimited line, split into cells
//! - [`Table`] - every row of a listing, in file order
//!
//! Nothing here is mutated once built. A new listing means a new [`Table`].

use serde::Serialize;

// =============================================================================
// Cell
// =============================================================================

/// One field of a row: the exact substring between two delimiters.
///
/// No trimming or quote handling happens, so `" 10.0.0.1"` and
/// `"10.0.0.1\r"` stay distinct from `"10.0.0.1"`.
pub type Cell = String;

// =============================================================================
// Row
// =============================================================================

/// An ordered sequence of cells, left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `index`, if the row is that wide.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).map(String::as_str)
    }
}

impl From<Vec<Cell>> for Row {
    fn from(cells: Vec<Cell>) -> Self {
        Self::new(cells)
    }
}

// =============================================================================
// Table
// =============================================================================

/// Every row of a listing, in the order the lines appear in the file.
///
/// Serializes as an array of arrays of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell count of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Row::len).max().unwrap_or(0)
    }

    /// Whether rows have differing cell counts.
    ///
    /// Purely informational; ragged listings render as they are.
    pub fn is_ragged(&self) -> bool {
        let mut lengths = self.rows.iter().map(Row::len);
        match lengths.next() {
            Some(first) => lengths.any(|len| len != first),
            None => false,
        }
    }

    /// Cell at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        Row::new(cells.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_width_and_raggedness() {
        let table = Table::new(vec![row(&["ip", "model"]), row(&["10.0.0.5", "bizhub", "X1"]), row(&[""])]);

        assert_eq!(table.len(), 3);
        assert_eq!(table.width(), 3);
        assert!(table.is_ragged());
        assert_eq!(table.cell(1, 2), Some("X1"));
        assert_eq!(table.cell(2, 1), None);
    }

    #[test]
    fn test_uniform_table_is_not_ragged() {
        let table = Table::new(vec![row(&["a", "b"]), row(&["c", "d"])]);
        assert!(!table.is_ragged());
        assert!(!Table::default().is_ragged());
        assert_eq!(Table::default().width(), 0);
    }

    #[test]
    fn test_serializes_as_nested_arrays() {
        let table = Table::new(vec![row(&["ip", "serial"]), row(&["10.0.0.5", "A1B2"])]);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"[["ip","serial"],["10.0.0.5","A1B2"]]"#);
    }
}
