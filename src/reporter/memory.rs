use super::{Record, Reporter, Severity};

/// Keeps every record in memory. Used to assert on emitted records.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    records: Vec<Record>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.records
            .iter()
            .filter(|r| r.severity == severity)
            .count()
    }

    /// Records at `severity` whose message mentions `needle`.
    pub fn matching(&self, severity: Severity, needle: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.severity == severity && r.message.contains(needle))
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn emit(&mut self, severity: Severity, message: &str) {
        self.records.push(Record::new(severity, message));
    }
}
