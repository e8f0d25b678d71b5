//! CLI command handlers.
//!
//! Kept apart from main.rs so the whole run can be driven from tests with an
//! in-memory reporter and a fake filesystem.

mod scan;

use std::process::ExitCode;

pub use scan::{handle_audit, run_audit};

/// Result type for handler functions that can be tested.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResult {
    Success,
    Error(u8),
}

impl From<HandlerResult> for ExitCode {
    fn from(result: HandlerResult) -> Self {
        match result {
            HandlerResult::Success => ExitCode::SUCCESS,
            HandlerResult::Error(code) => ExitCode::from(code),
        }
    }
}
