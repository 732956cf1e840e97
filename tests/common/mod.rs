//! Shared helpers for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// JSON dataset written to a temporary file that is removed on drop.
pub struct TestDataset {
    file: NamedTempFile,
}

impl TestDataset {
    pub fn new(json: &str) -> Self {
        let mut file = NamedTempFile::new().expect("create temp dataset");
        file.write_all(json.as_bytes()).expect("write temp dataset");
        file.flush().expect("flush temp dataset");
        Self { file }
    }

    /// The sample dataset shipped under `data/`.
    pub fn sample() -> Self {
        Self::new(include_str!("../../data/contracts.json"))
    }

    pub fn path(&self) -> &std::path::Path {
        self.file.path()
    }
}
