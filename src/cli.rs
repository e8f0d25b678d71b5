use clap::Parser;
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
checkperms warns when automounted directories have world permission bits set of any kind,
or are reachable through some non-POSIX grant such as an ACL.

AUTOFS_PERMISSION_DEBUG     Extra debug information
AUTOFS_PERMISSION_INFO      Information on current state
AUTOFS_PERMISSION_WARNING   Entry defined in autofs but server not exporting
AUTOFS_PERMISSION_ERROR     Mount is reachable by other users
AUTOFS_PERMISSION_CRITICAL  The audit itself failed

INFO records are always sent to the system log, so it is possible to tell when an
export became too permissive. Alerting on ERROR and CRITICAL is left to the log watcher.

Example: checkperms --debug /nfs/turbo";

#[derive(Parser, Debug)]
#[command(
    name = "checkperms",
    version,
    about = "Audit automounted filesystems for world and non-POSIX access",
    long_about = LONG_ABOUT
)]
pub struct Cli {
    /// Directory whose immediate children are the mounts to check
    pub path: PathBuf,

    /// Print debug records to stderr instead of using the system log
    #[arg(short, long)]
    pub debug: bool,

    /// Comma list of mount names to skip, e.g. shared reference data
    #[arg(long, value_name = "MOUNTS")]
    pub ignore: Option<String>,

    /// Write `chmod o-rwx` lines for mounts fixable by POSIX permissions
    #[arg(long, value_name = "FILE")]
    pub fix_list: Option<PathBuf>,

    /// Do not raise an error for directories that can be entered but not listed (o+x, o-r)
    #[arg(long)]
    pub allow_obscurity: bool,

    /// Config file (YAML, JSON or TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
