//! Validated scan root.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for path validation failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathValidationError {
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
}

/// The directory whose immediate children are the mounts to audit.
///
/// Only constructed after the path was confirmed to be a directory.
#[derive(Debug, Clone)]
pub struct ScanRoot {
    path: PathBuf,
}

impl ScanRoot {
    /// Validate that `path` exists and is a directory.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, PathValidationError> {
        let path = path.as_ref().to_path_buf();
        if !path.is_dir() {
            return Err(PathValidationError::NotADirectory(path));
        }
        Ok(Self { path })
    }

    /// Create a ScanRoot without validation (for testing with fake probes).
    pub fn unchecked(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
