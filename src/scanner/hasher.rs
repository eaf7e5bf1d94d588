//! Content hashing for duplicate detection

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::ScanError;

/// Compute the SHA-256 digest of a file's full byte content
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// Hex-encoded SHA-256 digest string
///
/// Streams the file through the hasher, so memory use stays bounded for
/// arbitrarily large files. Two files are considered content-identical
/// exactly when their digests match.
pub fn compute_file_hash(path: &Path) -> Result<String, ScanError> {
    let mut file = File::open(path).map_err(|e| ScanError::read(path, e))?;
    let mut hasher = Sha256::new();

    io::copy(&mut file, &mut hasher).map_err(|e| ScanError::read(path, e))?;

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_compute_file_hash() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"test content").unwrap();

        let hash = compute_file_hash(temp_file.path()).unwrap();
        // SHA-256 of "test content"
        assert_eq!(
            hash,
            "6ae8a75555209fd6c44157c0aed8016e763ff435a19cf186f76863140143ff72"
        );
    }

    #[test]
    fn test_hash_is_deterministic() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"same bytes, same digest").unwrap();

        let first = compute_file_hash(temp_file.path()).unwrap();
        let second = compute_file_hash(temp_file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_byte_difference_changes_hash() {
        let mut file_a = NamedTempFile::new().unwrap();
        let mut file_b = NamedTempFile::new().unwrap();
        file_a.write_all(b"content A").unwrap();
        file_b.write_all(b"content B").unwrap();

        let hash_a = compute_file_hash(file_a.path()).unwrap();
        let hash_b = compute_file_hash(file_b.path()).unwrap();
        assert_ne!(hash_a, hash_b);
    }

    #[test]
    fn test_empty_file_hashes() {
        let temp_file = NamedTempFile::new().unwrap();

        let hash = compute_file_hash(temp_file.path()).unwrap();
        // SHA-256 of the empty input
        assert_eq!(
            hash,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let fake_path = PathBuf::from("/tmp/this_file_does_not_exist_xyz123.dat");
        let result = compute_file_hash(&fake_path);
        assert!(matches!(result, Err(ScanError::Read { .. })));
    }
}
