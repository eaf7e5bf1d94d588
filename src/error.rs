//! Error types for the scan pipeline

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by the scan pipeline.
///
/// `Config` is raised before any file I/O happens; the run never starts with
/// an invalid configuration. `Read` and `Write` cover the per-file pass and
/// are usually downgraded to [`SkippedFile`] records by the orchestrator.
/// `Report` is raised when the CSV artifact cannot be finalized.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write report to {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub fn read(path: &Path, source: io::Error) -> Self {
        ScanError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        ScanError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Operation that was in flight when a file had to be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOperation {
    Walk,
    Hash,
    Relocate,
}

impl ScanOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanOperation::Walk => "walk",
            ScanOperation::Hash => "hash",
            ScanOperation::Relocate => "relocate",
        }
    }
}

/// A file excluded from the run after a per-file failure.
///
/// Skipped files take part in neither original nor duplicate classification;
/// they are surfaced as an aggregate count at the end of the pass.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub operation: ScanOperation,
    pub error: ScanError,
}
