//! Table model structures.

use serde::{Deserialize, Serialize};

/// A single cell value.
///
/// Cells carry the dynamic type reported by the parsing backend. The only
/// conversion the library performs is [`CellValue::as_text`], which yields
/// the default string form used for CSV fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellValue {
    /// Empty or absent cell
    #[default]
    Empty,
    /// Text value
    Text(String),
    /// Floating-point number
    Number(f64),
    /// Integer number
    Int(i64),
    /// Boolean value
    Bool(bool),
    /// Date/time value in the backend's text form
    DateTime(String),
    /// Duration value in the backend's text form
    Duration(String),
    /// Cell-level error marker (e.g. "#DIV/0!")
    Error(String),
}

impl CellValue {
    /// Check if the cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// The canonical text form of the value; empty cells yield `""`.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::DateTime(s) | CellValue::Duration(s) => s.clone(),
            CellValue::Error(e) => e.clone(),
        }
    }
}

/// A row of cells, left-to-right in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Cells in this row
    #[serde(default)]
    pub cells: Vec<CellValue>,
}

impl Row {
    /// Create a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell to this row.
    pub fn add_cell(&mut self, cell: CellValue) {
        self.cells.push(cell);
    }

    /// Get the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A table: a rectangular grid of cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Table name
    pub name: String,

    /// Rows in source order, top-to-bottom
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Table {
    /// Create a new empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Add a row to this table.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (from the first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Row::len).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the number of non-empty cells.
    pub fn non_empty_cell_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }
}
