//! Remediation script for exposures a mode change can fix.

use crate::error::{AuditError, IoOperation, Result};
use crate::reporter::Reporter;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

/// Append-only file of `chmod o-rwx <path>` lines.
///
/// The file is reopened in append mode for every line, so nothing is lost if
/// the run is killed part way.
#[derive(Debug, Clone)]
pub struct FixList {
    path: PathBuf,
}

impl FixList {
    /// Remove any fix list left by a previous run.
    pub fn prepare(path: impl Into<PathBuf>, reporter: &mut dyn Reporter) -> Result<Self> {
        let path = path.into();
        if path.is_file() {
            reporter.debug(&format!("Prior fix-list found {} removing", path.display()));
            fs::remove_file(&path)
                .map_err(|e| AuditError::fix_list(&path, IoOperation::Delete, e))?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, target: &Path) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| AuditError::fix_list(&self.path, IoOperation::Write, e))?;
        let mut line = remediation_command(target);
        line.push(b'\n');
        file.write_all(&line)
            .map_err(|e| AuditError::fix_list(&self.path, IoOperation::Write, e))
    }
}

/// `chmod o-rwx <path>`, quoting the path when the shell would split or expand it.
///
/// Built from the raw path bytes so non-UTF-8 names come out unchanged.
pub fn remediation_command(target: &Path) -> Vec<u8> {
    let mut line = b"chmod o-rwx ".to_vec();
    shell_quote(target.as_os_str().as_bytes(), &mut line);
    line
}

fn shell_quote(raw: &[u8], out: &mut Vec<u8>) {
    let safe = !raw.is_empty()
        && raw.iter().all(|&b| {
            b.is_ascii_alphanumeric()
                || matches!(b, b'_' | b'.' | b'/' | b'+' | b':' | b'@' | b'%' | b',' | b'=' | b'-')
        });
    if safe {
        out.extend_from_slice(raw);
        return;
    }
    out.push(b'\'');
    for &b in raw {
        if b == b'\'' {
            out.extend_from_slice(br"'\''");
        } else {
            out.push(b);
        }
    }
    out.push(b'\'');
}
