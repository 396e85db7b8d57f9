//! Data model for parsed workbooks.
//!
//! A [`Document`] holds the ordered sheets of a workbook; each [`Sheet`]
//! holds the tables found on it; a [`Table`] is a rectangular grid of
//! dynamically typed cell values.

mod document;
mod table;

pub use document::{Document, Sheet};
pub use table::{CellValue, Row, Table};
