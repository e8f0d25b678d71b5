//! Per-run counters.

use crate::classifier::Classification;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub mounts: usize,
    pub ignored: usize,
    pub unexported: usize,
    pub restricted: usize,
    pub obscurity_accepted: usize,
    pub obscurity_issues: usize,
    pub world_exposed: usize,
    pub non_posix_grants: usize,
    pub fix_lines: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_ignored(&mut self) {
        self.mounts += 1;
        self.ignored += 1;
    }

    pub fn record(&mut self, classification: Classification) {
        self.mounts += 1;
        let counter = match classification {
            Classification::Unexported => &mut self.unexported,
            Classification::Restricted => &mut self.restricted,
            Classification::ObscurityAccepted => &mut self.obscurity_accepted,
            Classification::ObscurityIssue => &mut self.obscurity_issues,
            Classification::WorldExposed => &mut self.world_exposed,
            Classification::NonPosixGrant => &mut self.non_posix_grants,
        };
        *counter += 1;
    }

    pub fn record_fix_line(&mut self) {
        self.fix_lines += 1;
    }

    /// Mounts reported at error severity.
    pub fn exposures(&self) -> usize {
        self.obscurity_issues + self.world_exposed + self.non_posix_grants
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Checked {} mounts ({} ignored): {} exposed ({} world, {} obscurity, {} non-POSIX), {} restricted, {} unexported",
            self.mounts,
            self.ignored,
            self.exposures(),
            self.world_exposed,
            self.obscurity_issues,
            self.non_posix_grants,
            self.restricted + self.obscurity_accepted,
            self.unexported,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut summary = RunSummary::new();
        summary.record(Classification::WorldExposed);
        summary.record(Classification::WorldExposed);
        summary.record(Classification::NonPosixGrant);
        summary.record(Classification::Restricted);
        summary.record(Classification::Unexported);
        summary.record_ignored();

        assert_eq!(summary.mounts, 6);
        assert_eq!(summary.ignored, 1);
        assert_eq!(summary.exposures(), 3);
        assert_eq!(summary.world_exposed, 2);
        assert_eq!(summary.unexported, 1);
    }

    #[test]
    fn test_display() {
        let mut summary = RunSummary::new();
        summary.record(Classification::ObscurityIssue);
        summary.record(Classification::ObscurityAccepted);
        assert_eq!(
            summary.to_string(),
            "Checked 2 mounts (0 ignored): 1 exposed (0 world, 1 obscurity, 0 non-POSIX), 1 restricted, 0 unexported"
        );
    }
}
