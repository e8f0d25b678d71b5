use crate::reporter::Reporter;
use std::collections::HashSet;

/// Mount names excluded from classification.
///
/// Matching is exact and case-sensitive: no globbing, prefixes or trimming.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    names: HashSet<String>,
}

impl IgnoreFilter {
    /// Build from a comma-separated list such as `"med-genomes,scratch"`.
    pub fn from_spec(spec: Option<&str>) -> Self {
        let mut filter = Self::default();
        if let Some(spec) = spec {
            filter.extend(spec.split(','));
        }
        filter
    }

    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extend(names);
        self
    }

    fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(
            names
                .into_iter()
                .map(Into::into)
                .filter(|name: &String| !name.is_empty()),
        );
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_ignored(&self, mount: &str) -> bool {
        self.names.contains(mount)
    }

    /// Like [`is_ignored`](Self::is_ignored), recording one info record on a match.
    pub fn skip(&self, mount: &str, reporter: &mut dyn Reporter) -> bool {
        if !self.is_ignored(mount) {
            return false;
        }
        reporter.info(&format!("{} in ignore list skipping check", mount));
        true
    }
}
