//! Filesystem access used by the walker.

use crate::types::Mode;
use std::fs;
use std::io;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One immediate child of the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountEntry {
    /// File name, lossily decoded; used for ignore matching and messages.
    pub name: String,
    pub path: PathBuf,
}

impl MountEntry {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// The four filesystem operations a mount audit needs.
///
/// Errors keep their `io::ErrorKind` so the walker can tell "not exported"
/// and "permission denied" apart from anything unexpected.
pub trait MountProbe {
    /// Directories directly under `root`, in enumeration order.
    fn mounts(&self, root: &Path) -> io::Result<Vec<MountEntry>>;

    fn stat(&self, path: &Path) -> io::Result<Mode>;

    /// Read every entry of `path`, returning how many there were.
    fn list(&self, path: &Path) -> io::Result<usize>;

    /// Check that `path` can be traversed (searched) without listing it.
    fn traverse(&self, path: &Path) -> io::Result<()>;
}

/// [`MountProbe`] backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl MountProbe for FsProbe {
    fn mounts(&self, root: &Path) -> io::Result<Vec<MountEntry>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(io::Error::from)?;
            // Symlinked mounts count when they resolve to a directory.
            let is_dir = entry.file_type().is_dir()
                || (entry.path_is_symlink() && entry.path().is_dir());
            if is_dir {
                entries.push(MountEntry::new(
                    entry.file_name().to_string_lossy(),
                    entry.path(),
                ));
            }
        }
        Ok(entries)
    }

    fn stat(&self, path: &Path) -> io::Result<Mode> {
        fs::metadata(path).map(|meta| Mode::new(meta.mode()))
    }

    fn list(&self, path: &Path) -> io::Result<usize> {
        let mut count = 0;
        for entry in fs::read_dir(path)? {
            entry?;
            count += 1;
        }
        Ok(count)
    }

    fn traverse(&self, path: &Path) -> io::Result<()> {
        // Resolving `<path>/.` needs search permission on `path` itself, the
        // same check a chdir makes, without touching the working directory.
        fs::metadata(path.join(".")).map(|_| ())
    }
}
