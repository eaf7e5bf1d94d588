//! Duplicate Finder Library
//!
//! Scans a directory tree, detects files with identical content via SHA-256,
//! and relocates duplicates into a quarantine tree that mirrors the scanned
//! layout. The earliest-created file of a content-equal set is the original
//! and is never disturbed in place.

pub mod core;
pub mod error;
pub mod reporting;
pub mod scanner;

pub use core::orchestrator;
pub use reporting::report_writer;
pub use scanner::file_scanner;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::config::{DispositionAction, ScanConfig};
    pub use crate::core::disposer::relocate_file;
    pub use crate::core::orchestrator::{run_scan, DuplicateEvent, ScanOutcome};
    pub use crate::core::path_mapper::{map_to_output, Disposition};
    pub use crate::error::{ScanError, ScanOperation, SkippedFile};
    pub use crate::reporting::report_writer::{
        dump_to_console, write_report, REPORT_CSV_HEADER,
    };
    pub use crate::scanner::file_scanner::{collect_files, sort_by_creation, FileRecord};
    pub use crate::scanner::hasher::compute_file_hash;
}
