//! Quarantine destination path computation

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Role a file plays when it is written into the output tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Duplicate,
    OriginalCopy,
}

impl Disposition {
    /// File-name prefix applied under the output root
    pub fn prefix(&self) -> &'static str {
        match self {
            Disposition::Duplicate => "DELETE_",
            Disposition::OriginalCopy => "ORIGINAL_",
        }
    }
}

/// Compute the destination path for a file under the output root
///
/// # Arguments
/// * `path` - Absolute path of the scanned file
/// * `scan_root` - Root the scan started from; `path` must live beneath it
/// * `output_root` - Root of the quarantine tree
/// * `disposition` - Determines the file-name prefix
///
/// The file's position relative to the scan root is preserved:
/// `scan_root/sub/dir/file.txt` maps to
/// `output_root/sub/dir/DELETE_file.txt` (or `ORIGINAL_file.txt`).
///
/// Pure path arithmetic, no I/O. `strip_prefix` works on path components,
/// so the mapping cannot lose or gain characters at the root boundary the
/// way raw string subtraction can when the root lacks a trailing separator.
pub fn map_to_output(
    path: &Path,
    scan_root: &Path,
    output_root: &Path,
    disposition: Disposition,
) -> Result<PathBuf, ScanError> {
    let relative = path.strip_prefix(scan_root).map_err(|_| {
        ScanError::Config(format!(
            "{} is outside the scan root {}",
            path.display(),
            scan_root.display()
        ))
    })?;

    let file_name = relative.file_name().ok_or_else(|| {
        ScanError::Config(format!("{} has no file name", path.display()))
    })?;

    // OsString concatenation keeps non-UTF-8 file names intact
    let mut prefixed = OsString::from(disposition.prefix());
    prefixed.push(file_name);

    let dest = match relative.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            output_root.join(parent).join(prefixed)
        }
        _ => output_root.join(prefixed),
    };

    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_path_preserved() {
        let dest = map_to_output(
            Path::new("/scan/sub/dir/file.txt"),
            Path::new("/scan"),
            Path::new("/out"),
            Disposition::Duplicate,
        )
        .unwrap();

        assert_eq!(dest, PathBuf::from("/out/sub/dir/DELETE_file.txt"));
    }

    #[test]
    fn test_file_at_root_gets_no_subdirectory() {
        let dest = map_to_output(
            Path::new("/scan/file.txt"),
            Path::new("/scan"),
            Path::new("/out"),
            Disposition::Duplicate,
        )
        .unwrap();

        assert_eq!(dest, PathBuf::from("/out/DELETE_file.txt"));
    }

    #[test]
    fn test_original_copy_prefix() {
        let dest = map_to_output(
            Path::new("/scan/a/b.txt"),
            Path::new("/scan"),
            Path::new("/out"),
            Disposition::OriginalCopy,
        )
        .unwrap();

        assert_eq!(dest, PathBuf::from("/out/a/ORIGINAL_b.txt"));
    }

    #[test]
    fn test_root_with_trailing_separator() {
        let dest = map_to_output(
            Path::new("/scan/sub/file.txt"),
            Path::new("/scan/"),
            Path::new("/out"),
            Disposition::Duplicate,
        )
        .unwrap();

        assert_eq!(dest, PathBuf::from("/out/sub/DELETE_file.txt"));
    }

    #[test]
    fn test_similar_sibling_root_does_not_match() {
        // "/scanner/file.txt" shares a string prefix with "/scan" but is not
        // beneath it
        let result = map_to_output(
            Path::new("/scanner/file.txt"),
            Path::new("/scan"),
            Path::new("/out"),
            Disposition::Duplicate,
        );

        assert!(matches!(result, Err(ScanError::Config(_))));
    }

    #[test]
    fn test_path_outside_root_rejected() {
        let result = map_to_output(
            Path::new("/elsewhere/file.txt"),
            Path::new("/scan"),
            Path::new("/out"),
            Disposition::Duplicate,
        );

        assert!(matches!(result, Err(ScanError::Config(_))));
    }
}
