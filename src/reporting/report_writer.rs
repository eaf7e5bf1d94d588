//! CSV report writing

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::orchestrator::DuplicateEvent;
use crate::error::ScanError;

/// Fixed header of the duplicate report
pub const REPORT_CSV_HEADER: &str = "ORIGINAL, DUPLICATE, COPIED/MOVED_DUPLICATE, ORIGINAL_COPY";

/// Serialize one duplicate event as a report row
///
/// Four comma-separated fields: original path, duplicate path, relocated
/// duplicate path, relocated original-copy path. The fourth field is empty
/// when no original copy was produced.
pub fn format_row(event: &DuplicateEvent) -> String {
    format!(
        "{},{},{},{}",
        event.original.path.display(),
        event.duplicate.path.display(),
        event.relocated_duplicate.display(),
        event
            .relocated_original
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    )
}

/// Rows for a set of events, sorted lexicographically by full row content
///
/// Scan order depends on creation timestamps and so varies across
/// environments; sorting makes the report deterministic for a given set of
/// duplicates.
pub fn build_rows(events: &[DuplicateEvent]) -> Vec<String> {
    let mut rows: Vec<String> = events.iter().map(format_row).collect();
    rows.sort();
    rows
}

/// Write the CSV report for a completed scan
///
/// # Arguments
/// * `output_path` - Report destination; overwritten if present
/// * `events` - Every duplicate event the scan produced
pub fn write_report(output_path: &Path, events: &[DuplicateEvent]) -> Result<(), ScanError> {
    let report_err = |e| ScanError::Report {
        path: output_path.to_path_buf(),
        source: e,
    };

    let mut file = File::create(output_path).map_err(report_err)?;

    writeln!(file, "{}", REPORT_CSV_HEADER).map_err(report_err)?;
    for row in build_rows(events) {
        writeln!(file, "{}", row).map_err(report_err)?;
    }

    Ok(())
}

/// Dump the report rows to standard output
///
/// Fallback used when the report file cannot be written, so the accumulated
/// rows are not lost with it.
pub fn dump_to_console(events: &[DuplicateEvent]) {
    println!("{}", REPORT_CSV_HEADER);
    for row in build_rows(events) {
        println!("{}", row);
    }
}
