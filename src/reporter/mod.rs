//! Leveled record emission.
//!
//! The walker and handlers never log directly; they are handed a
//! [`Reporter`] and push records through it. Production runs use
//! [`TracingReporter`], tests use [`RecordingReporter`].

mod memory;
mod severity;
mod sink;

pub use memory::RecordingReporter;
pub use severity::{MARKER_PREFIX, Severity, format_record};
pub use sink::{AUDIT_TARGET, CRITICAL_TARGET, MODULE_NAME, TracingReporter};

use crate::classifier::Finding;

/// A single leveled message, before formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub severity: Severity,
    pub message: String,
}

impl Record {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }
}

pub trait Reporter {
    fn emit(&mut self, severity: Severity, message: &str);

    /// Emit every record a finding renders to, in order.
    fn report(&mut self, finding: &Finding) {
        for record in finding.records() {
            self.emit(record.severity, &record.message);
        }
    }

    fn debug(&mut self, message: &str) {
        self.emit(Severity::Debug, message);
    }

    fn info(&mut self, message: &str) {
        self.emit(Severity::Info, message);
    }

    fn critical(&mut self, message: &str) {
        self.emit(Severity::Critical, message);
    }
}
