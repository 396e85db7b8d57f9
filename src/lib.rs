//! # unsheet
//!
//! Spreadsheet table extraction to CSV.
//!
//! This library reads XLSX, XLS, XLSB, and ODS workbooks (container
//! parsing is delegated to the `calamine` backend) and converts one
//! table — by default the first table of the first sheet — to CSV with
//! standard quoting rules.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unsheet::{convert_file, ConvertOptions};
//!
//! // Convert the first table of the first sheet to CSV
//! let report = convert_file("data.xlsx", "data.csv", &ConvertOptions::default())?;
//! println!("{} rows x {} columns", report.rows, report.columns);
//!
//! // Or get the CSV text without touching the filesystem
//! let csv = unsheet::to_csv("data.xlsx")?;
//! println!("{}", csv);
//! # Ok::<(), unsheet::Error>(())
//! ```
//!
//! ## Lower-level API
//!
//! ```no_run
//! use unsheet::workbook::WorkbookParser;
//!
//! let mut parser = WorkbookParser::open("data.xlsx")?;
//! let document = parser.parse()?;
//! println!("Sheets: {}", document.sheet_count());
//! # Ok::<(), unsheet::Error>(())
//! ```

pub mod detect;
pub mod error;
pub mod model;
pub mod render;
pub mod workbook;

// Re-exports
pub use detect::{detect_format_from_path, FormatType};
pub use error::{Error, Result};
pub use model::{CellValue, Document, Row, Sheet, Table};
pub use render::CsvOptions;
pub use workbook::WorkbookParser;

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Options for selecting and encoding the converted table.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Sheet to read (0-based, workbook order)
    pub sheet: usize,

    /// Table within the sheet (0-based)
    pub table: usize,

    /// CSV encoding options
    pub csv: CsvOptions,
}

impl ConvertOptions {
    /// Create options with defaults: first sheet, first table, plain CSV.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the sheet to convert.
    pub fn with_sheet(mut self, sheet: usize) -> Self {
        self.sheet = sheet;
        self
    }

    /// Select the table within the sheet.
    pub fn with_table(mut self, table: usize) -> Self {
        self.table = table;
        self
    }

    /// Set the CSV encoding options.
    pub fn with_csv(mut self, csv: CsvOptions) -> Self {
        self.csv = csv;
        self
    }
}

/// Summary of a successful conversion.
#[derive(Debug, Clone)]
pub struct ConvertReport {
    /// Name of the converted sheet
    pub sheet: String,

    /// Name of the converted table
    pub table: String,

    /// Rows written
    pub rows: usize,

    /// Columns per row
    pub columns: usize,
}

/// Parse a workbook file and return its Document model.
///
/// # Example
///
/// ```no_run
/// use unsheet::parse_file;
///
/// let document = parse_file("data.xlsx")?;
/// println!("Sheets: {}", document.sheet_count());
/// # Ok::<(), unsheet::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
    let mut parser = WorkbookParser::open(path)?;
    parser.parse()
}

/// Parse a workbook from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let mut parser = WorkbookParser::from_bytes(data.to_vec())?;
    parser.parse()
}

/// Convert the first table of a workbook's first sheet to a CSV string.
pub fn to_csv(path: impl AsRef<Path>) -> Result<String> {
    to_csv_with_options(path, &ConvertOptions::default())
}

/// Convert one table of a workbook to a CSV string.
pub fn to_csv_with_options(path: impl AsRef<Path>, options: &ConvertOptions) -> Result<String> {
    let document = parse_file(path)?;
    document_to_csv(&document, options)
}

/// Render the selected table of an already-parsed document to CSV text.
pub fn document_to_csv(document: &Document, options: &ConvertOptions) -> Result<String> {
    let (_, table) = select_table(document, options)?;
    render::to_csv(table, &options.csv)
}

/// Convert one table of a workbook file into a CSV file.
///
/// The output file is only created once a sheet and table have been
/// found; sheet/table lookup failures leave a pre-existing file at
/// `output` untouched. The CSV is written to a sibling temporary file
/// and atomically renamed into place, so no truncated output survives
/// a mid-write failure either.
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<ConvertReport> {
    let document = parse_file(input)?;
    convert_document(&document, output, options)
}

/// Convert the selected table of an already-parsed document into a CSV file.
pub fn convert_document(
    document: &Document,
    output: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<ConvertReport> {
    let (sheet, table) = select_table(document, options)?;
    let data = render::to_csv(table, &options.csv)?;
    write_atomic(output.as_ref(), data.as_bytes())?;

    Ok(ConvertReport {
        sheet: sheet.name.clone(),
        table: table.name.clone(),
        rows: table.row_count(),
        columns: table.column_count(),
    })
}

/// Resolve the sheet/table selection against a document.
fn select_table<'a>(
    document: &'a Document,
    options: &ConvertOptions,
) -> Result<(&'a Sheet, &'a Table)> {
    if document.is_empty() {
        return Err(Error::SheetNotFound);
    }
    let sheet = document
        .sheets
        .get(options.sheet)
        .ok_or(Error::SheetOutOfRange {
            index: options.sheet,
            count: document.sheet_count(),
        })?;

    if sheet.is_empty() {
        return Err(Error::TableNotFound(sheet.name.clone()));
    }
    let table = sheet
        .tables
        .get(options.table)
        .ok_or_else(|| Error::TableOutOfRange {
            sheet: sheet.name.clone(),
            index: options.table,
            count: sheet.table_count(),
        })?;

    Ok((sheet, table))
}

/// Write data to a sibling temp file, then rename it over `path`.
fn write_atomic(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(data)?;
    file.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}
