//! Duplicate report generation

pub mod report_writer;

pub use report_writer::{build_rows, dump_to_console, write_report, REPORT_CSV_HEADER};
