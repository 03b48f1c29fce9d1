//! Shared test utilities for execute and integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Create a temporary file containing the given content.
///
/// Used to create JSON input files for command tests.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}
