//! Chart output: terminal table, CSV and JSON.

pub mod export;
pub mod table;

pub use export::{default_export_file_name, export_chart_file, export_path, write_csv, write_json};
pub use table::{TableOptions, print_table, render_table};
