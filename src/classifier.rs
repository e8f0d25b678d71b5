//! Per-mount exposure classification.
//!
//! A mount is judged from two observations: its mode bits and whether the
//! current process could list it. When the listing is refused, a second
//! probe checks whether the directory can still be traversed, which is the
//! `o+x` without `o+r` pattern: children are reachable by anyone who knows
//! their names.

use crate::reporter::{Record, Severity};
use crate::types::Mode;
use std::fmt;
use std::path::{Path, PathBuf};

/// Outcome of trying to read a directory's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Listable,
    PermissionDenied,
    NotFound,
}

/// Outcome of trying to enter a directory that could not be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Allowed,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Configured in autofs but not exported, or the server is down.
    Unexported,
    /// Neither listable nor enterable.
    Restricted,
    /// Enterable but not listable, and the operator allows that.
    ObscurityAccepted,
    /// Enterable but not listable.
    ObscurityIssue,
    /// Listable and at least one world bit is set.
    WorldExposed,
    /// Listable although no world bit is set (ACL, AFS, ...).
    NonPosixGrant,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Unexported => "unexported",
            Classification::Restricted => "restricted",
            Classification::ObscurityAccepted => "obscurity_accepted",
            Classification::ObscurityIssue => "obscurity_issue",
            Classification::WorldExposed => "world_exposed",
            Classification::NonPosixGrant => "non_posix_grant",
        }
    }

    /// Highest severity recorded for this classification.
    pub fn severity(&self) -> Severity {
        match self {
            Classification::Restricted | Classification::ObscurityAccepted => Severity::Info,
            Classification::Unexported => Severity::Warning,
            Classification::ObscurityIssue
            | Classification::WorldExposed
            | Classification::NonPosixGrant => Severity::Error,
        }
    }

    /// Exposures a plain `chmod o-rwx` removes.
    pub fn is_posix_fixable(&self) -> bool {
        matches!(
            self,
            Classification::ObscurityIssue | Classification::WorldExposed
        )
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decides the classification of one mount.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    allow_obscurity: bool,
}

impl Classifier {
    pub fn new(allow_obscurity: bool) -> Self {
        Self { allow_obscurity }
    }

    /// Classify a mount from its mode and listing outcome.
    ///
    /// `traverse` is only called when the listing was refused. Its error is
    /// passed through untouched.
    pub fn classify<E>(
        &self,
        mode: Mode,
        listing: Listing,
        traverse: impl FnOnce() -> Result<Traversal, E>,
    ) -> Result<Classification, E> {
        let classification = match listing {
            Listing::NotFound => Classification::Unexported,
            Listing::PermissionDenied => match traverse()? {
                Traversal::Denied => Classification::Restricted,
                Traversal::Allowed if self.allow_obscurity => Classification::ObscurityAccepted,
                Traversal::Allowed => Classification::ObscurityIssue,
            },
            Listing::Listable if mode.has_world_access() => Classification::WorldExposed,
            Listing::Listable => Classification::NonPosixGrant,
        };
        Ok(classification)
    }
}

/// A classified mount, ready to be reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub path: PathBuf,
    /// Absent when the stat itself found nothing.
    pub mode: Option<Mode>,
    pub classification: Classification,
}

impl Finding {
    pub fn new(path: impl Into<PathBuf>, mode: Mode, classification: Classification) -> Self {
        Self {
            path: path.into(),
            mode: Some(mode),
            classification,
        }
    }

    pub fn unexported(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: None,
            classification: Classification::Unexported,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mode_label(&self) -> String {
        self.mode
            .map(|m| m.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// The records this finding produces, in emission order.
    pub fn records(&self) -> Vec<Record> {
        let path = self.path.display();
        let mode = self.mode_label();
        match self.classification {
            Classification::Unexported => vec![Record::new(
                Severity::Warning,
                format!("{path} Not exported but in autofs config or server not responding"),
            )],
            Classification::Restricted | Classification::ObscurityAccepted => vec![Record::new(
                Severity::Info,
                format!("{path} Permissions: {mode}"),
            )],
            Classification::ObscurityIssue => vec![
                Record::new(Severity::Info, format!("{path} Permissions: {mode}")),
                Record::new(
                    Severity::Error,
                    format!("{path} can be entered but not listed, Permissions: {mode}"),
                ),
            ],
            Classification::WorldExposed => vec![Record::new(
                Severity::Error,
                format!("{path} Permissions: {mode}"),
            )],
            Classification::NonPosixGrant => vec![Record::new(
                Severity::Error,
                format!(
                    "{path} allowed access without POSIX world permissions: {mode}"
                ),
            )],
        }
    }
}
