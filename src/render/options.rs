//! Rendering options configuration.

/// Options for CSV encoding.
///
/// Defaults follow CSV convention: comma delimiter, `\n` record
/// terminator, fields quoted only when they contain the delimiter, a
/// quote, or a line break.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter byte
    pub delimiter: u8,

    /// Terminate records with `\r\n` instead of `\n`
    pub crlf: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            crlf: false,
        }
    }
}

impl CsvOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Terminate records with `\r\n`.
    pub fn with_crlf(mut self, crlf: bool) -> Self {
        self.crlf = crlf;
        self
    }

    pub(crate) fn writer_builder(&self) -> csv::WriterBuilder {
        let mut builder = csv::WriterBuilder::new();
        builder.delimiter(self.delimiter);
        if self.crlf {
            builder.terminator(csv::Terminator::CRLF);
        }
        builder
    }
}
