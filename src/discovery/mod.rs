//! Discovery layer: mount enumeration and the per-mount walk.
//!
//! - `probe`: filesystem seam (enumerate, stat, list, traverse)
//! - `walker`: drives the ignore filter, classifier, reporter and fix list
//! - `summary`: per-run counters

pub mod probe;
pub mod summary;
pub mod walker;

pub use crate::ignore::IgnoreFilter;
pub use probe::{FsProbe, MountEntry, MountProbe};
pub use summary::RunSummary;
pub use walker::MountWalker;
