//! Format detection for spreadsheet documents.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// OLE2 compound file magic bytes, used by legacy .xls files.
const OLE_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Detected spreadsheet format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    /// Excel workbook (.xlsx, .xlsm)
    Xlsx,
    /// Excel binary workbook (.xlsb)
    Xlsb,
    /// Legacy Excel workbook (.xls)
    Xls,
    /// OpenDocument spreadsheet (.ods)
    Ods,
}

impl FormatType {
    /// Map a lowercase file extension to a format, if supported.
    pub fn from_extension(ext: &str) -> Option<FormatType> {
        match ext {
            "xlsx" | "xlsm" => Some(FormatType::Xlsx),
            "xlsb" => Some(FormatType::Xlsb),
            "xls" => Some(FormatType::Xls),
            "ods" => Some(FormatType::Ods),
            _ => None,
        }
    }

    /// Returns the canonical file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            FormatType::Xlsx => "xlsx",
            FormatType::Xlsb => "xlsb",
            FormatType::Xls => "xls",
            FormatType::Ods => "ods",
        }
    }

    /// Returns a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            FormatType::Xlsx => "Excel Workbook",
            FormatType::Xlsb => "Excel Binary Workbook",
            FormatType::Xls => "Legacy Excel Workbook",
            FormatType::Ods => "OpenDocument Spreadsheet",
        }
    }

    /// Whether the container is a ZIP archive (as opposed to OLE2).
    fn is_zip_based(&self) -> bool {
        !matches!(self, FormatType::Xls)
    }
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the spreadsheet format of a file.
///
/// The extension selects the candidate format and the file header must
/// carry the matching container magic, so a renamed text file is rejected
/// before the parsing backend ever sees it.
///
/// # Example
///
/// ```no_run
/// use unsheet::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("data.xlsx")?;
/// println!("Detected format: {}", format);
/// # Ok::<(), unsheet::Error>(())
/// ```
pub fn detect_format_from_path(path: impl AsRef<Path>) -> Result<FormatType> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    let format = FormatType::from_extension(&ext).ok_or(Error::UnknownFormat)?;

    let file = File::open(path)?;
    let mut header = Vec::with_capacity(OLE_MAGIC.len());
    file.take(OLE_MAGIC.len() as u64).read_to_end(&mut header)?;

    let magic_matches = if format.is_zip_based() {
        is_zip_file(&header)
    } else {
        is_ole_file(&header)
    };

    if magic_matches {
        Ok(format)
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= ZIP_MAGIC.len() && data[..ZIP_MAGIC.len()] == ZIP_MAGIC
}

/// Check if data starts with OLE2 compound file magic bytes.
pub fn is_ole_file(data: &[u8]) -> bool {
    data.len() >= OLE_MAGIC.len() && data[..OLE_MAGIC.len()] == OLE_MAGIC
}
