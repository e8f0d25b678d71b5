//! Subscriber wiring for [`TracingReporter`](crate::reporter::TracingReporter) records.
//!
//! - debug mode: every record goes to stderr, the system log is skipped
//! - normal mode: info and above go to syslog, stderr only shows critical
//!   records
//! - normal mode without a syslog socket: info and above go to stderr

mod syslog;

pub use syslog::{SYSLOG_SOCKET, SyslogLine, SyslogWriter, severity_of};

use crate::error::{AuditError, Result};
use crate::reporter::{CRITICAL_TARGET, MODULE_NAME};
use std::io;
use std::path::Path;
use tracing::Subscriber;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

/// A `fmt` layer that writes each record's message and nothing else.
///
/// Records already carry their module and marker, so timestamps, levels and
/// targets are left to the sink.
pub fn record_layer<S, W>(writer: W, filter: Targets) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .with_writer(writer)
        .without_time()
        .with_level(false)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter)
}

/// Which records reach stderr.
pub fn console_filter(debug: bool, syslog_connected: bool) -> Targets {
    if debug {
        Targets::new().with_default(LevelFilter::DEBUG)
    } else if syslog_connected {
        Targets::new().with_target(CRITICAL_TARGET, LevelFilter::ERROR)
    } else {
        Targets::new().with_default(LevelFilter::INFO)
    }
}

/// Which records reach the system log.
pub fn syslog_filter() -> Targets {
    Targets::new().with_default(LevelFilter::INFO)
}

/// Install the global subscriber.
pub fn init(debug: bool) -> Result<()> {
    init_with_socket(debug, Path::new(SYSLOG_SOCKET))
}

pub fn init_with_socket(debug: bool, socket: &Path) -> Result<()> {
    subscriber(debug, socket)
        .try_init()
        .map_err(|e| AuditError::Logging(e.to_string()))
}

/// Build the subscriber `init` installs, without installing it.
pub fn subscriber(debug: bool, socket: &Path) -> impl Subscriber + Send + Sync + 'static {
    let syslog = if debug {
        None
    } else {
        match SyslogWriter::connect(socket, MODULE_NAME) {
            Ok(writer) => Some(writer),
            Err(e) => {
                eprintln!(
                    "{}: system log {} unavailable ({}), logging to stderr",
                    MODULE_NAME,
                    socket.display(),
                    e
                );
                None
            }
        }
    };

    let console = record_layer(io::stderr, console_filter(debug, syslog.is_some()));
    let syslog = syslog.map(|writer| record_layer(writer, syslog_filter()));

    tracing_subscriber::registry().with(console).with(syslog)
}
