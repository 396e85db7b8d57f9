//! Output rendering for parsed workbooks.
//!
//! CSV is the conversion target; the JSON renderer dumps the whole
//! Document model for inspection.

mod csv;
mod json;
mod options;

pub use csv::{to_csv, write_csv};
pub use json::{to_json, JsonFormat};
pub use options::CsvOptions;
