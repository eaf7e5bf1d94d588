//! One-pass duplicate scan pipeline
//!
//! Enumerates the scan root, orders files by creation time, hashes them
//! through the rayon pool, then classifies each file against the digest
//! registry in creation-time order: the first file seen with a digest is the
//! original, every later one is a duplicate and gets relocated. Per-file
//! failures are recorded and skipped; they never abort the pass.

use indicatif::{ParallelProgressIterator, ProgressBar};
use rayon::prelude::*;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::core::config::{DispositionAction, ScanConfig};
use crate::core::disposer::relocate_file;
use crate::core::path_mapper::{map_to_output, Disposition};
use crate::error::{ScanError, ScanOperation, SkippedFile};
use crate::scanner::{collect_files, compute_file_hash, sort_by_creation, FileRecord};

/// One detected duplicate and the artifacts produced for it
#[derive(Debug)]
pub struct DuplicateEvent {
    pub original: FileRecord,
    pub duplicate: FileRecord,
    pub relocated_duplicate: PathBuf,
    /// Set only when the run copies originals alongside their duplicates
    pub relocated_original: Option<PathBuf>,
}

/// Aggregate result of one scan run
#[derive(Debug)]
pub struct ScanOutcome {
    pub events: Vec<DuplicateEvent>,
    pub skipped: Vec<SkippedFile>,
    pub files_scanned: usize,
    pub interrupted: bool,
}

/// Run one complete scan over the configured tree
///
/// # Arguments
/// * `config` - Validated, immutable run configuration
/// * `cancel` - Cooperative cancellation flag, checked between files
/// * `progress` - Progress bar driven by the hashing stage; pass
///   `ProgressBar::hidden()` to suppress it
///
/// The cancel flag stops the run between files, never mid-file; an
/// interrupted outcome keeps every event accumulated up to that point.
pub fn run_scan(config: &ScanConfig, cancel: &AtomicBool, progress: ProgressBar) -> ScanOutcome {
    let (mut files, mut skipped) = collect_files(&config.scan_root, config.include_hidden);
    sort_by_creation(&mut files);

    progress.set_length(files.len() as u64);

    // Hash through the worker pool. collect() restores input order, so the
    // registry below sees files in creation-time order even when hashing
    // finishes out of order.
    let digests: Vec<Option<Result<String, ScanError>>> = files
        .par_iter()
        .progress_with(progress.clone())
        .map(|record| {
            if cancel.load(Ordering::SeqCst) {
                return None;
            }
            Some(compute_file_hash(&record.path))
        })
        .collect();
    progress.finish_and_clear();

    let mut registry: HashMap<String, FileRecord> = HashMap::new();
    let mut events = Vec::new();
    let mut interrupted = false;

    for (record, digest) in files.iter().zip(digests) {
        if cancel.load(Ordering::SeqCst) {
            interrupted = true;
            break;
        }

        let Some(digest) = digest else {
            // Hashing was cancelled before it reached this file; everything
            // later in creation order is unhashed too
            interrupted = true;
            break;
        };

        let digest = match digest {
            Ok(digest) => digest,
            Err(error) => {
                eprintln!("Skipping {}: {}", record.path.display(), error);
                skipped.push(SkippedFile {
                    path: record.path.clone(),
                    operation: ScanOperation::Hash,
                    error,
                });
                continue;
            }
        };

        // First file seen with a digest is the original for that content
        let original = match registry.entry(digest) {
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
                continue;
            }
            Entry::Occupied(slot) => slot.get().clone(),
        };

        println!(
            "Duplicate found:\n  ORIGINAL:  {}\n  DUPLICATE: {}",
            original.path.display(),
            record.path.display()
        );

        let relocated_duplicate = match quarantine_duplicate(record, config) {
            Ok(dest) => dest,
            Err(error) => {
                eprintln!(
                    "Skipping relocation of {}: {}",
                    record.path.display(),
                    error
                );
                skipped.push(SkippedFile {
                    path: record.path.clone(),
                    operation: ScanOperation::Relocate,
                    error,
                });
                continue;
            }
        };

        // The original is never disturbed at its source; this is always a
        // copy, regardless of the configured action
        let relocated_original = if config.copy_originals {
            match copy_original(&original, config) {
                Ok(dest) => Some(dest),
                Err(error) => {
                    eprintln!(
                        "Skipping original copy of {}: {}",
                        original.path.display(),
                        error
                    );
                    skipped.push(SkippedFile {
                        path: original.path.clone(),
                        operation: ScanOperation::Relocate,
                        error,
                    });
                    None
                }
            }
        } else {
            None
        };

        events.push(DuplicateEvent {
            original,
            duplicate: record.clone(),
            relocated_duplicate,
            relocated_original,
        });
    }

    ScanOutcome {
        events,
        skipped,
        files_scanned: files.len(),
        interrupted,
    }
}

fn quarantine_duplicate(record: &FileRecord, config: &ScanConfig) -> Result<PathBuf, ScanError> {
    let dest = map_to_output(
        &record.path,
        &config.scan_root,
        &config.output_root,
        Disposition::Duplicate,
    )?;
    relocate_file(&record.path, &dest, config.action)?;
    Ok(dest)
}

fn copy_original(original: &FileRecord, config: &ScanConfig) -> Result<PathBuf, ScanError> {
    let dest = map_to_output(
        &original.path,
        &config.scan_root,
        &config.output_root,
        Disposition::OriginalCopy,
    )?;
    relocate_file(&original.path, &dest, DispositionAction::Copy)?;
    Ok(dest)
}
