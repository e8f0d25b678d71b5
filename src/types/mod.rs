//! Type-safe wrapper types for improved compile-time guarantees.

mod mode;
mod paths;

pub use mode::{Mode, WORLD_BITS};
pub use paths::{PathValidationError, ScanRoot};
