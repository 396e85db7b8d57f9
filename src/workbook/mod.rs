//! Workbook parsing.
//!
//! Parsing of the spreadsheet container formats themselves is delegated to
//! the `calamine` backend; this module only walks the sheets it reports and
//! builds the [`crate::model::Document`] tree.

mod parser;

pub use parser::WorkbookParser;
