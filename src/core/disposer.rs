//! Physical relocation of files into the output tree

use std::fs;
use std::path::Path;

use crate::core::config::DispositionAction;
use crate::error::ScanError;

/// Copy or move a file to a destination, creating parent directories
///
/// # Arguments
/// * `source` - Existing file to relocate
/// * `dest` - Full destination path, including the file name
/// * `action` - Copy leaves the source in place; Move removes it
///
/// A move first attempts an atomic rename and falls back to copy-then-remove
/// when rename is not possible, as across filesystems. Only confirmed
/// duplicates are ever moved; originals are only ever copied.
pub fn relocate_file(
    source: &Path,
    dest: &Path,
    action: DispositionAction,
) -> Result<(), ScanError> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|e| ScanError::write(parent, e))?;
    }

    match action {
        DispositionAction::Copy => {
            fs::copy(source, dest).map_err(|e| ScanError::write(dest, e))?;
        }
        DispositionAction::Move => {
            if fs::rename(source, dest).is_err() {
                fs::copy(source, dest).map_err(|e| ScanError::write(dest, e))?;
                fs::remove_file(source).map_err(|e| ScanError::write(source, e))?;
            }
        }
    }

    Ok(())
}
