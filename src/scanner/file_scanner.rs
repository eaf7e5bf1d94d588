//! File enumeration and creation-time ordering

use std::path::{Path, PathBuf};
use std::time::SystemTime;
use walkdir::{DirEntry, WalkDir};

use crate::error::{ScanError, ScanOperation, SkippedFile};

/// A regular file retained by the tree walk
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    pub created: SystemTime,
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Collect all regular files under a directory
///
/// # Arguments
/// * `root` - Directory to scan; traversal covers every depth
/// * `include_hidden` - Whether dot-prefixed files and directories are scanned
///
/// # Returns
/// The retained files plus any entries skipped over enumeration failures
///
/// Symbolic links and directories are never retained. Hidden directories are
/// pruned whole, so nothing beneath them is considered. The root itself is
/// scanned even when its own name is dot-prefixed. An entry that cannot be
/// enumerated or stat-ed is recorded as skipped; it does not abort the walk.
pub fn collect_files(root: &Path, include_hidden: bool) -> (Vec<FileRecord>, Vec<SkippedFile>) {
    let mut files = Vec::new();
    let mut skipped = Vec::new();

    // sort_by_file_name makes enumeration order deterministic, which is the
    // tie-breaker when creation timestamps collide
    let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();

    for entry in walker
        .into_iter()
        .filter_entry(|e| include_hidden || e.depth() == 0 || !is_hidden(e))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                skipped.push(SkippedFile {
                    path: path.clone(),
                    operation: ScanOperation::Walk,
                    error: ScanError::Read {
                        path,
                        source: err.into(),
                    },
                });
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let created = match file_creation_time(&entry) {
            Ok(time) => time,
            Err(err) => {
                skipped.push(SkippedFile {
                    path: entry.path().to_path_buf(),
                    operation: ScanOperation::Walk,
                    error: ScanError::read(entry.path(), err),
                });
                continue;
            }
        };

        files.push(FileRecord {
            path: entry.into_path(),
            created,
        });
    }

    (files, skipped)
}

// Not every filesystem reports a birth time; last modification is the
// closest portable stand-in.
fn file_creation_time(entry: &DirEntry) -> std::io::Result<SystemTime> {
    let meta = entry.metadata().map_err(std::io::Error::from)?;
    meta.created().or_else(|_| meta.modified())
}

/// Sort files by creation time, earliest first
///
/// The sort is stable: files with equal timestamps keep their enumeration
/// order. The earliest-created file among a content-equal set is the one the
/// scan keeps as the original, so this ordering is correctness-defining, not
/// cosmetic.
pub fn sort_by_creation(files: &mut [FileRecord]) {
    files.sort_by_key(|f| f.created);
}
