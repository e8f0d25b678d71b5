//! Audit run handler.

use super::HandlerResult;
use crate::Cli;
use crate::classifier::Classifier;
use crate::config::Settings;
use crate::discovery::{FsProbe, MountProbe, MountWalker, RunSummary};
use crate::error::{AuditError, Result};
use crate::fix::FixList;
use crate::reporter::Reporter;
use crate::types::ScanRoot;

/// Resolve settings from the command line and audit the real filesystem.
pub fn handle_audit(cli: &Cli, reporter: &mut dyn Reporter) -> HandlerResult {
    let settings = match Settings::resolve(cli) {
        Ok(settings) => settings,
        Err(e) => return fail(AuditError::from(e), reporter),
    };
    run_audit(&settings, FsProbe, reporter)
}

/// Run one audit and turn the outcome into an exit status.
pub fn run_audit<P: MountProbe>(
    settings: &Settings,
    probe: P,
    reporter: &mut dyn Reporter,
) -> HandlerResult {
    match audit(settings, probe, reporter) {
        Ok(summary) => {
            reporter.info(&summary.to_string());
            HandlerResult::Success
        }
        Err(e) => fail(e, reporter),
    }
}

fn audit<P: MountProbe>(
    settings: &Settings,
    probe: P,
    reporter: &mut dyn Reporter,
) -> Result<RunSummary> {
    let root = ScanRoot::new(&settings.root)?;

    let fix_list = match &settings.fix_list {
        Some(path) => Some(FixList::prepare(path, &mut *reporter)?),
        None => None,
    };

    let summary = MountWalker::new(probe, reporter)
        .with_classifier(Classifier::new(settings.allow_obscurity))
        .with_ignore(settings.ignore.clone())
        .with_fix_list(fix_list)
        .run(&root)?;
    Ok(summary)
}

fn fail(err: AuditError, reporter: &mut dyn Reporter) -> HandlerResult {
    let message = if err.is_preflight() {
        format!("{} exiting", err)
    } else {
        format!("Unknown Error: {}", err)
    };
    reporter.critical(&message);
    HandlerResult::Error(err.exit_code())
}
