//! Document model structures.

use super::Table;
use serde::{Deserialize, Serialize};

/// A sheet within a workbook.
///
/// The parsing backend exposes one used cell range per worksheet, so a
/// sheet carries either a single table (its used range) or none at all
/// when the worksheet has no cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// Sheet index (0-based, workbook order)
    pub index: usize,

    /// Sheet name
    pub name: String,

    /// Tables on this sheet
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Sheet {
    /// Create a new sheet with the given index and name.
    pub fn new(index: usize, name: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            tables: Vec::new(),
        }
    }

    /// Add a table to the sheet.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Get the number of tables.
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Get the first table, if any.
    pub fn first_table(&self) -> Option<&Table> {
        self.tables.first()
    }

    /// Check if the sheet has no tables.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// A parsed workbook: the ordered sequence of its sheets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Sheets in workbook order
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sheet to the document.
    pub fn add_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    /// Get the number of sheets.
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Get the first sheet, if any.
    pub fn first_sheet(&self) -> Option<&Sheet> {
        self.sheets.first()
    }

    /// Get the total number of tables across all sheets.
    pub fn table_count(&self) -> usize {
        self.sheets.iter().map(Sheet::table_count).sum()
    }

    /// Check if the document has no sheets.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
