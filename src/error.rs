//! Error types for the unsheet library.

use std::io;
use thiserror::Error;

/// Result type alias for unsheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during spreadsheet conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a recognized spreadsheet format.
    #[error("unknown or unsupported spreadsheet format")]
    UnknownFormat,

    /// The backend failed to parse the workbook.
    #[error("workbook parse error: {0}")]
    Parse(String),

    /// The document contains no sheets.
    #[error("no sheets found in document")]
    SheetNotFound,

    /// A sheet was requested beyond the document's sheet count.
    #[error("sheet index {index} out of range: document has {count} sheet(s)")]
    SheetOutOfRange { index: usize, count: usize },

    /// The selected sheet contains no tables.
    #[error("no tables found in sheet {0:?}")]
    TableNotFound(String),

    /// A table was requested beyond the sheet's table count.
    #[error("table index {index} out of range: sheet {sheet:?} has {count} table(s)")]
    TableOutOfRange {
        sheet: String,
        index: usize,
        count: usize,
    },

    /// Error while encoding CSV output.
    #[error("CSV write error: {0}")]
    Csv(String),

    /// Error while serializing JSON output.
    #[error("JSON serialization error: {0}")]
    Json(String),
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
