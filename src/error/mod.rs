//! Error types for checkperms.
//!
//! Expected mount states (not exported, permission denied) are not errors:
//! the walker turns them into classifications. Everything here ends the run.

mod context;

pub use context::{IoOperation, ProbeOperation};

use crate::config::ConfigError;
use crate::types::PathValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status for an unusable scan root or configuration (`-2`).
pub const EXIT_INVALID_ROOT: u8 = 254;

/// Exit status for an unrecognised failure during the walk (`-1`).
pub const EXIT_UNKNOWN_ERROR: u8 = 255;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error(transparent)]
    InvalidRoot(#[from] PathValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to {operation} {path}: {source}")]
    Probe {
        path: PathBuf,
        operation: ProbeOperation,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to {operation} fix list {path}: {source}")]
    FixList {
        path: PathBuf,
        operation: IoOperation,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}

impl AuditError {
    pub fn probe(
        path: impl Into<PathBuf>,
        operation: ProbeOperation,
        source: std::io::Error,
    ) -> Self {
        Self::Probe {
            path: path.into(),
            operation,
            source,
        }
    }

    pub fn fix_list(
        path: impl Into<PathBuf>,
        operation: IoOperation,
        source: std::io::Error,
    ) -> Self {
        Self::FixList {
            path: path.into(),
            operation,
            source,
        }
    }

    /// Errors raised before any mount is touched.
    pub fn is_preflight(&self) -> bool {
        matches!(self, Self::InvalidRoot(_) | Self::Config(_))
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_preflight() {
            EXIT_INVALID_ROOT
        } else {
            EXIT_UNKNOWN_ERROR
        }
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
