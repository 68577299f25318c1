//! CLI operation handlers.
//!
//! - [`approve`]: Marks a pull request's required status checks as passed
//! - [`logging`]: `tracing` subscriber installation
//!
//! Output formatting utilities are in [`output`].

use std::process::ExitCode;

pub mod approve;
pub mod logging;
pub mod output;

/// Exit code for a head branch without branch protection.
const UNPROTECTED_EXIT_CODE: u8 = 1;

/// Process status of a run that did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Statuses were set, there was nothing to set, or it was a dry run.
    Success,
    /// The head branch has no branch protection rule.
    BranchUnprotected,
}

impl RunStatus {
    /// Maps the run status to the process exit code.
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Success => ExitCode::SUCCESS,
            Self::BranchUnprotected => ExitCode::from(UNPROTECTED_EXIT_CODE),
        }
    }
}
