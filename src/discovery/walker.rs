//! The per-run mount walk.

use super::probe::{MountEntry, MountProbe};
use super::summary::RunSummary;
use crate::classifier::{Classifier, Finding, Listing, Traversal};
use crate::error::{AuditError, ProbeOperation, Result};
use crate::fix::FixList;
use crate::ignore::IgnoreFilter;
use crate::reporter::Reporter;
use crate::types::ScanRoot;
use std::io::ErrorKind;
use std::path::Path;

/// Walks the immediate children of a scan root, one at a time.
///
/// Each mount is stat'ed, listed and classified before the next one is
/// touched, so automount delays and records stay attributable to a single
/// mount. An unexpected I/O error stops the walk.
pub struct MountWalker<'r, P> {
    probe: P,
    classifier: Classifier,
    ignore: IgnoreFilter,
    fix_list: Option<FixList>,
    reporter: &'r mut dyn Reporter,
}

impl<'r, P: MountProbe> MountWalker<'r, P> {
    pub fn new(probe: P, reporter: &'r mut dyn Reporter) -> Self {
        Self {
            probe,
            classifier: Classifier::default(),
            ignore: IgnoreFilter::default(),
            fix_list: None,
            reporter,
        }
    }

    pub fn with_classifier(mut self, classifier: Classifier) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_ignore(mut self, ignore: IgnoreFilter) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_fix_list(mut self, fix_list: Option<FixList>) -> Self {
        self.fix_list = fix_list;
        self
    }

    pub fn run(&mut self, root: &ScanRoot) -> Result<RunSummary> {
        let entries = self
            .probe
            .mounts(root.path())
            .map_err(|e| AuditError::probe(root.path(), ProbeOperation::Enumerate, e))?;

        let mut summary = RunSummary::new();
        for entry in &entries {
            self.check(entry, &mut summary)?;
        }
        Ok(summary)
    }

    fn check(&mut self, entry: &MountEntry, summary: &mut RunSummary) -> Result<()> {
        self.reporter
            .debug(&format!("Checking: {}", entry.path.display()));

        if self.ignore.skip(&entry.name, &mut *self.reporter) {
            summary.record_ignored();
            return Ok(());
        }

        let finding = self.inspect(&entry.path)?;
        self.reporter.report(&finding);

        if finding.classification.is_posix_fixable()
            && let Some(fix_list) = &self.fix_list
        {
            fix_list.append(finding.path())?;
            summary.record_fix_line();
        }

        summary.record(finding.classification);
        Ok(())
    }

    /// Stat, list and classify one mount.
    ///
    /// The stat is what triggers the automount, so a missing path there means
    /// the same thing as a missing path during the listing.
    pub fn inspect(&mut self, path: &Path) -> Result<Finding> {
        let mode = match self.probe.stat(path) {
            Ok(mode) => mode,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Finding::unexported(path)),
            Err(e) => return Err(AuditError::probe(path, ProbeOperation::Stat, e)),
        };
        self.reporter.debug(&format!(
            "{} mode {:o} ({})",
            path.display(),
            mode.bits(),
            mode
        ));

        let listing = match self.probe.list(path) {
            Ok(count) => {
                self.reporter
                    .debug(&format!("{} listed {} entries", path.display(), count));
                Listing::Listable
            }
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Listing::NotFound,
                ErrorKind::PermissionDenied => Listing::PermissionDenied,
                _ => return Err(AuditError::probe(path, ProbeOperation::List, e)),
            },
        };

        let probe = &self.probe;
        let classification = self.classifier.classify(mode, listing, || {
            match probe.traverse(path) {
                Ok(()) => Ok(Traversal::Allowed),
                Err(e) if e.kind() == ErrorKind::PermissionDenied => Ok(Traversal::Denied),
                Err(e) => Err(AuditError::probe(path, ProbeOperation::Traverse, e)),
            }
        })?;

        Ok(Finding::new(path, mode, classification))
    }
}
