//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use appsmith_core::{application::ports::Filesystem, error::AppsmithResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> AppsmithResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> AppsmithResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> AppsmithResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> appsmith_core::error::AppsmithError {
    use appsmith_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use appsmith_core::application::ports::Filesystem as _;

    #[test]
    fn roundtrip_in_tempdir() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();

        let nested = dir.path().join("a/b");
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));

        let file = nested.join("hello.txt");
        fs.write_file(&file, "hi").unwrap();
        assert_eq!(fs.read_file(&file).unwrap(), "hi");
    }

    #[test]
    fn read_missing_file_is_an_error() {
        let fs = LocalFilesystem::new();
        assert!(fs.read_file(Path::new("/definitely/not/here")).is_err());
    }
}
