//! Validated scan configuration

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// What to do with a confirmed duplicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispositionAction {
    /// Copy the duplicate into the output tree; the source stays in place
    Copy,
    /// Move the duplicate into the output tree; the source is removed
    Move,
}

impl Default for DispositionAction {
    fn default() -> Self {
        DispositionAction::Copy
    }
}

/// Immutable configuration for one scan run
///
/// Construction validates every path up front, so a scan never starts
/// against a missing or unreadable directory. Both roots are canonicalized;
/// relative paths from the command line resolve the same way everywhere in
/// the pipeline.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub scan_root: PathBuf,
    pub output_root: PathBuf,
    pub action: DispositionAction,
    pub copy_originals: bool,
    pub report_path: Option<PathBuf>,
    pub include_hidden: bool,
}

impl ScanConfig {
    pub fn new(
        scan_root: &Path,
        output_root: &Path,
        action: DispositionAction,
        copy_originals: bool,
        report_path: Option<PathBuf>,
        include_hidden: bool,
    ) -> Result<Self, ScanError> {
        let scan_root = validate_directory(scan_root, "input")?;
        let output_root = validate_directory(output_root, "output")?;

        if let Some(ref report) = report_path {
            validate_report_path(report)?;
        }

        Ok(ScanConfig {
            scan_root,
            output_root,
            action,
            copy_originals,
            report_path,
            include_hidden,
        })
    }
}

fn validate_directory(path: &Path, role: &str) -> Result<PathBuf, ScanError> {
    if !path.is_dir() {
        return Err(ScanError::Config(format!(
            "{} directory {} does not exist or is not a directory",
            role,
            path.display()
        )));
    }

    // Readability probe; a root we cannot list would otherwise surface as an
    // empty scan
    fs::read_dir(path).map_err(|e| {
        ScanError::Config(format!(
            "{} directory {} is not readable: {}",
            role,
            path.display(),
            e
        ))
    })?;

    path.canonicalize().map_err(|e| {
        ScanError::Config(format!(
            "cannot resolve {} directory {}: {}",
            role,
            path.display(),
            e
        ))
    })
}

fn validate_report_path(path: &Path) -> Result<(), ScanError> {
    if path.is_dir() {
        return Err(ScanError::Config(format!(
            "report path {} is a directory",
            path.display()
        )));
    }

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !parent.is_dir() {
        return Err(ScanError::Config(format!(
            "report directory {} does not exist",
            parent.display()
        )));
    }

    Ok(())
}
