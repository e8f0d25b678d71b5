//! Record severities and the marker-tagged line format.

use std::fmt;

/// Prefix shared by every marker token.
pub const MARKER_PREFIX: &str = "AUTOFS_PERMISSION";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        }
    }

    /// Greppable token that log watchers match on.
    pub fn marker(&self) -> &'static str {
        match self {
            Severity::Debug => "AUTOFS_PERMISSION_DEBUG",
            Severity::Info => "AUTOFS_PERMISSION_INFO",
            Severity::Warning => "AUTOFS_PERMISSION_WARNING",
            Severity::Error => "AUTOFS_PERMISSION_ERROR",
            Severity::Critical => "AUTOFS_PERMISSION_CRITICAL",
        }
    }

    /// Syslog severity (RFC 5424 numeric code).
    pub fn syslog_code(&self) -> u8 {
        match self {
            Severity::Debug => 7,
            Severity::Info => 6,
            Severity::Warning => 4,
            Severity::Error => 3,
            Severity::Critical => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Render one record as `<module> <MARKER>: <message>`.
pub fn format_record(severity: Severity, module: &str, message: &str) -> String {
    format!("{} {}: {}", module, severity.marker(), message)
}
