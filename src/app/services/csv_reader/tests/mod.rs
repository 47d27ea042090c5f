//! Test utilities for measurement reader testing
//!
//! Shared helpers for building temporary CSV fixtures; the per-format test
//! modules hold their own file contents.

use std::io::Write;

use tempfile::NamedTempFile;

mod nivel_tests;

/// Write CSV content to a temporary file for reader tests
pub fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write test data");
    file.flush().expect("Failed to flush test data");
    file
}
