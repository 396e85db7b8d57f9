//! JSON renderer implementation.

use crate::error::Result;
use crate::model::Document;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Serialize a parsed document to JSON.
pub fn to_json(document: &Document, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(document)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(document)?,
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CellValue, Row, Sheet, Table};

    fn sample_document() -> Document {
        let mut table = Table::new("Data");
        let mut row = Row::new();
        row.add_cell(CellValue::Text("Hello".to_string()));
        row.add_cell(CellValue::Int(7));
        table.add_row(row);

        let mut sheet = Sheet::new(0, "Data");
        sheet.add_table(table);

        let mut document = Document::new();
        document.add_sheet(sheet);
        document
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample_document(), JsonFormat::Pretty).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"name\": \"Data\""));
        assert!(json.contains("Hello"));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample_document(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"name\":\"Data\""));
    }

    #[test]
    fn test_document_roundtrip() {
        let document = sample_document();
        let json = to_json(&document, JsonFormat::Pretty).unwrap();
        let parsed: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, document);
    }
}
