//! FileSystem port - abstraction over file I/O operations
//!
//! Lets the record repository write deployment records without depending
//! on a concrete implementation (local disk or in-memory mock).

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),
}

impl FsError {
    /// Convert an I/O error, keeping the path it happened on
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io(err),
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::at(Path::new(""), err)
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic replace
/// - mock file systems in tests
pub trait FileSystem {
    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Write content to file, fully replacing any previous content
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Create directory and parents; succeeds if it already exists
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;
}
