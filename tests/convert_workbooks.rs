//! End-to-end conversion tests over synthetic XLSX workbooks.
//!
//! Fixtures are assembled in memory with the `zip` crate, so the suite
//! runs without any checked-in binary test files.

use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use unsheet::{convert_file, parse_bytes, ConvertOptions, CsvOptions, Error};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Build an XLSX workbook with the given (sheet name, sheetData XML) pairs.
fn build_workbook(sheets: &[(&str, String)]) -> Vec<u8> {
    let mut buffer = Vec::new();
    let mut zip = ZipWriter::new(Cursor::new(&mut buffer));

    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    let mut content_types = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    );
    for i in 1..=sheets.len() {
        content_types.push_str(&format!(
            r#"
  <Override PartName="/xl/worksheets/sheet{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
    }
    content_types.push_str("\n</Types>");
    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(content_types.as_bytes()).unwrap();

    zip.start_file("_rels/.rels", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#,
    )
    .unwrap();

    let mut workbook = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>"#,
    );
    for (i, (name, _)) in sheets.iter().enumerate() {
        workbook.push_str(&format!(
            r#"
    <sheet name="{name}" sheetId="{id}" r:id="rId{id}"/>"#,
            id = i + 1
        ));
    }
    workbook.push_str("\n  </sheets>\n</workbook>");
    zip.start_file("xl/workbook.xml", options).unwrap();
    zip.write_all(workbook.as_bytes()).unwrap();

    let mut rels = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for i in 1..=sheets.len() {
        rels.push_str(&format!(
            r#"
  <Relationship Id="rId{i}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{i}.xml"/>"#
        ));
    }
    rels.push_str("\n</Relationships>");
    zip.start_file("xl/_rels/workbook.xml.rels", options).unwrap();
    zip.write_all(rels.as_bytes()).unwrap();

    for (i, (_, sheet_data)) in sheets.iter().enumerate() {
        zip.start_file(format!("xl/worksheets/sheet{}.xml", i + 1), options)
            .unwrap();
        let sheet = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData>{sheet_data}</sheetData>
</worksheet>"#
        );
        zip.write_all(sheet.as_bytes()).unwrap();
    }

    zip.finish().unwrap();
    buffer
}

/// sheetData XML for rows of inline strings; empty strings become absent cells.
fn string_rows(rows: &[&[&str]]) -> String {
    let mut xml = String::new();
    for (r, cells) in rows.iter().enumerate() {
        xml.push_str(&format!(r#"<row r="{}">"#, r + 1));
        for (c, value) in cells.iter().enumerate() {
            if value.is_empty() {
                continue;
            }
            xml.push_str(&format!(
                r#"<c r="{}{}" t="inlineStr"><is><t xml:space="preserve">{}</t></is></c>"#,
                column_name(c),
                r + 1,
                xml_escape(value)
            ));
        }
        xml.push_str("</row>");
    }
    xml
}

fn column_name(mut index: usize) -> String {
    let mut name = String::new();
    loop {
        name.insert(0, (b'A' + (index % 26) as u8) as char);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    name
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn write_fixture(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, data).unwrap();
    path
}

fn read_csv(path: &Path) -> Vec<Vec<String>> {
    let text = fs::read_to_string(path).unwrap();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(text.as_bytes());
    reader
        .records()
        .map(|record| record.unwrap().iter().map(String::from).collect())
        .collect()
}

#[test]
fn test_convert_round_trip() {
    let rows: &[&[&str]] = &[&["Name", "Age"], &["Kim", ""], &["Lee, J.", "30"]];
    let data = build_workbook(&[("Sheet1", string_rows(rows))]);

    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "people.xlsx", &data);
    let output = dir.path().join("people.csv");

    let report = convert_file(&input, &output, &ConvertOptions::default()).unwrap();
    assert_eq!(report.sheet, "Sheet1");
    assert_eq!(report.rows, 3);
    assert_eq!(report.columns, 2);

    // Comma-containing field must be quoted on disk...
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("\"Lee, J.\""));

    // ...and recover exactly when re-parsed.
    let parsed = read_csv(&output);
    assert_eq!(
        parsed,
        vec![
            vec!["Name".to_string(), "Age".to_string()],
            vec!["Kim".to_string(), String::new()],
            vec!["Lee, J.".to_string(), "30".to_string()],
        ]
    );
}

#[test]
fn test_quoting_special_characters() {
    let rows: &[&[&str]] = &[&["note", "body"], &["He said \"hi\"", "line1\nline2"]];
    let data = build_workbook(&[("Sheet1", string_rows(rows))]);

    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "notes.xlsx", &data);
    let output = dir.path().join("notes.csv");

    convert_file(&input, &output, &ConvertOptions::default()).unwrap();

    let parsed = read_csv(&output);
    assert_eq!(
        parsed,
        vec![
            vec!["note".to_string(), "body".to_string()],
            vec!["He said \"hi\"".to_string(), "line1\nline2".to_string()],
        ]
    );
}

#[test]
fn test_typed_cells_use_default_text_form() {
    let sheet_data = concat!(
        r#"<row r="1"><c r="A1"><v>30</v></c><c r="B1"><v>42.5</v></c>"#,
        r#"<c r="C1" t="b"><v>1</v></c></row>"#,
    )
    .to_string();
    let data = build_workbook(&[("Sheet1", sheet_data)]);

    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "typed.xlsx", &data);
    let output = dir.path().join("typed.csv");

    convert_file(&input, &output, &ConvertOptions::default()).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text, "30,42.5,true\n");
}

#[test]
fn test_no_sheets_leaves_output_untouched() {
    let data = build_workbook(&[]);

    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "empty.xlsx", &data);
    let output = dir.path().join("out.csv");
    fs::write(&output, "keep me").unwrap();

    let err = convert_file(&input, &output, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, Error::SheetNotFound));
    assert_eq!(err.to_string(), "no sheets found in document");
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");
}

#[test]
fn test_empty_sheet_has_no_tables() {
    let data = build_workbook(&[("Sheet1", String::new())]);

    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "blank.xlsx", &data);
    let output = dir.path().join("out.csv");

    let err = convert_file(&input, &output, &ConvertOptions::default()).unwrap_err();
    match err {
        Error::TableNotFound(name) => assert_eq!(name, "Sheet1"),
        other => panic!("expected TableNotFound, got {:?}", other),
    }
    assert!(!output.exists());
}

#[test]
fn test_missing_input_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.xlsx");
    let output = dir.path().join("out.csv");

    let err = convert_file(&input, &output, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.to_string().contains("I/O error"));
    assert!(!output.exists());
}

#[test]
fn test_rejects_non_spreadsheet_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "fake.xlsx", b"just some text");
    let output = dir.path().join("out.csv");

    let err = convert_file(&input, &output, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, Error::UnknownFormat));
    assert!(!output.exists());
}

#[test]
fn test_select_second_sheet() {
    let first = string_rows(&[&["first"]]);
    let second = string_rows(&[&["second"]]);
    let data = build_workbook(&[("One", first), ("Two", second)]);

    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "multi.xlsx", &data);
    let output = dir.path().join("out.csv");

    let options = ConvertOptions::new().with_sheet(1);
    let report = convert_file(&input, &output, &options).unwrap();
    assert_eq!(report.sheet, "Two");
    assert_eq!(fs::read_to_string(&output).unwrap(), "second\n");

    let err = convert_file(&input, &output, &ConvertOptions::new().with_sheet(5)).unwrap_err();
    assert!(matches!(err, Error::SheetOutOfRange { index: 5, count: 2 }));
}

#[test]
fn test_crlf_and_delimiter_options() {
    let rows: &[&[&str]] = &[&["a", "b"], &["c", "d"]];
    let data = build_workbook(&[("Sheet1", string_rows(rows))]);

    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(&dir, "plain.xlsx", &data);
    let output = dir.path().join("out.csv");

    let options =
        ConvertOptions::new().with_csv(CsvOptions::new().with_delimiter(b';').with_crlf(true));
    convert_file(&input, &output, &options).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "a;b\r\nc;d\r\n");
}

#[test]
fn test_parse_bytes_matches_file_parse() {
    let rows: &[&[&str]] = &[&["x", "y"], &["1", "2"]];
    let data = build_workbook(&[("Sheet1", string_rows(rows))]);

    let document = parse_bytes(&data).unwrap();
    assert_eq!(document.sheet_count(), 1);

    let table = document.first_sheet().unwrap().first_table().unwrap();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column_count(), 2);
}
