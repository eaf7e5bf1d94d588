//! File enumeration and content hashing

pub mod file_scanner;
pub mod hasher;

pub use file_scanner::{collect_files, sort_by_creation, FileRecord};
pub use hasher::compute_file_hash;
