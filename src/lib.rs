pub mod classifier;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod fix;
pub mod handlers;
pub mod ignore;
pub mod logging;
pub mod reporter;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use classifier::{Classification, Classifier, Finding, Listing, Traversal};
pub use cli::Cli;
pub use config::{Config, ConfigError, Settings};
pub use discovery::{FsProbe, MountEntry, MountProbe, MountWalker, RunSummary};
pub use error::{AuditError, Result};
pub use fix::FixList;
pub use ignore::IgnoreFilter;
pub use reporter::{RecordingReporter, Reporter, Severity, TracingReporter};
pub use types::{Mode, ScanRoot};
