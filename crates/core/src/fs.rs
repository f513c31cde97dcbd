//! Disk-backed filesystem implementation

use crate::Result;
use crate::traits::FileSystem;
use std::fs;
use std::path::Path;

/// [`FileSystem`] implementation backed by `std::fs`
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, contents: &str) -> Result<()> {
        Ok(fs::write(path, contents)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        Ok(fs::create_dir_all(path)?)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_write_then_read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let fs = OsFileSystem;

        fs.write(&path, "Project: demo").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "Project: demo");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        let fs = OsFileSystem;

        fs.write(&path, "first").unwrap();
        fs.write(&path, "second").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_create_dir_all_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        let fs = OsFileSystem;

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let fs = OsFileSystem;
        let error = fs.read_to_string(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(error, crate::Error::Io(_)));
    }
}
