//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options that can be kept in a config file instead of on the command line.
///
/// ```yaml
/// ignore:
///   - med-genomes
///   - scratch
/// fix_list: /var/lib/checkperms/fix.sh
/// allow_obscurity: false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mount names never classified.
    pub ignore: Vec<String>,
    /// Where to write `chmod` remediation lines.
    pub fix_list: Option<PathBuf>,
    /// Accept directories that can be entered but not listed.
    pub allow_obscurity: bool,
}
