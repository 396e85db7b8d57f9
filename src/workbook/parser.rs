//! Workbook parser implementation.

use crate::detect;
use crate::error::Result;
use crate::model::{CellValue, Document, Row, Sheet, Table};
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// Parser for spreadsheet workbooks (XLSX, XLS, XLSB, ODS).
pub struct WorkbookParser<RS>
where
    RS: Read + Seek,
{
    workbook: Sheets<RS>,
}

impl WorkbookParser<BufReader<File>> {
    /// Open a workbook file for parsing.
    ///
    /// The file's format is verified (extension plus container magic)
    /// before it is handed to the parsing backend.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        detect::detect_format_from_path(path)?;
        let workbook = open_workbook_auto(path)?;
        Ok(Self { workbook })
    }
}

impl WorkbookParser<Cursor<Vec<u8>>> {
    /// Create a parser from bytes; the backend sniffs the container format.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let workbook = open_workbook_auto_from_rs(Cursor::new(data))?;
        Ok(Self { workbook })
    }
}

impl<RS: Read + Seek> WorkbookParser<RS> {
    /// Parse all sheets into a Document model.
    pub fn parse(&mut self) -> Result<Document> {
        let mut document = Document::new();

        for (index, (name, range)) in self.workbook.worksheets().into_iter().enumerate() {
            let mut sheet = Sheet::new(index, name);
            if !range.is_empty() {
                sheet.add_table(range_to_table(&sheet.name, &range));
            }
            document.add_sheet(sheet);
        }

        Ok(document)
    }
}

/// Build a table from a worksheet's used cell range.
fn range_to_table(name: &str, range: &Range<Data>) -> Table {
    let mut table = Table::new(name);
    for cells in range.rows() {
        let mut row = Row::new();
        for cell in cells {
            row.add_cell(convert_cell(cell));
        }
        table.add_row(row);
    }
    table
}

/// Map a backend cell value onto the model.
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Int(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::DateTime(dt.as_f64().to_string()),
        Data::DateTimeIso(s) => CellValue::DateTime(s.clone()),
        Data::DurationIso(s) => CellValue::Duration(s.clone()),
        Data::Error(e) => CellValue::Error(e.to_string()),
    }
}
