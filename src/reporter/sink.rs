use super::{Reporter, Severity, format_record};
use tracing::{debug, error, info, warn};

/// Module name stamped on every record.
pub const MODULE_NAME: &str = "checkperms";

/// Target for all non-critical records.
pub const AUDIT_TARGET: &str = "checkperms::audit";

/// Critical records get their own target so a sink can select only them.
pub const CRITICAL_TARGET: &str = "checkperms::critical";

/// Forwards formatted records to the installed `tracing` subscriber.
#[derive(Debug, Clone)]
pub struct TracingReporter {
    module: String,
}

impl TracingReporter {
    pub fn new() -> Self {
        Self {
            module: MODULE_NAME.to_string(),
        }
    }
}

impl Default for TracingReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TracingReporter {
    fn emit(&mut self, severity: Severity, message: &str) {
        let line = format_record(severity, &self.module, message);
        match severity {
            Severity::Debug => debug!(target: AUDIT_TARGET, "{}", line),
            Severity::Info => info!(target: AUDIT_TARGET, "{}", line),
            Severity::Warning => warn!(target: AUDIT_TARGET, "{}", line),
            Severity::Error => error!(target: AUDIT_TARGET, "{}", line),
            Severity::Critical => error!(target: CRITICAL_TARGET, "{}", line),
        }
    }
}
