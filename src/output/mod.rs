//! Report writers for scan results: column-aligned text tables and pretty
//! JSON (stdout plus file export).

mod json;
mod table;

pub use json::{export_json_file, write_json};
pub use table::{write_language_table, write_table};
