//! CSV renderer implementation.

use crate::error::{Error, Result};
use crate::model::Table;
use std::io::Write;

use super::options::CsvOptions;

/// Render a table to a CSV string.
///
/// Rows and columns mirror the table exactly; empty cells become empty
/// fields and every other value is written in its default text form.
pub fn to_csv(table: &Table, options: &CsvOptions) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(table, &mut buffer, options)?;
    String::from_utf8(buffer).map_err(|e| Error::Csv(e.to_string()))
}

/// Stream a table as CSV records into a writer.
pub fn write_csv<W: Write>(table: &Table, writer: W, options: &CsvOptions) -> Result<()> {
    let mut csv_writer = options.writer_builder().from_writer(writer);
    for row in &table.rows {
        csv_writer.write_record(row.cells.iter().map(|cell| cell.as_text()))?;
    }
    csv_writer.flush()?;
    Ok(())
}
