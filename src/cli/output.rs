//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use greenlight::github::ApprovalEvent;
use greenlight::{ApprovalError, ApprovalOutcome};

/// Writes the confirmation line for a single status.
pub fn write_event_to<W: Write>(
    writer: &mut W,
    event: ApprovalEvent<'_>,
) -> Result<(), ApprovalError> {
    let written = match event {
        ApprovalEvent::StatusSet(context) => {
            writeln!(writer, "Set status '{context}' to success.")
        }
        ApprovalEvent::StatusSkipped(context) => {
            writeln!(writer, "Would set status '{context}' to success.")
        }
    };
    written.map_err(|error| io_error(&error))
}

/// Writes the final summary. The missing branch protection diagnostic goes to
/// `diagnostics`; everything else goes to `writer`.
pub fn write_outcome_to<W: Write, D: Write>(
    writer: &mut W,
    diagnostics: &mut D,
    outcome: &ApprovalOutcome,
) -> Result<(), ApprovalError> {
    let written = match outcome {
        ApprovalOutcome::BranchUnprotected { branch } => writeln!(
            diagnostics,
            "No branch protection configured for branch '{branch}'"
        ),
        ApprovalOutcome::NoRequiredChecks { branch } => writeln!(
            writer,
            "No required status checks found for branch '{branch}'."
        ),
        ApprovalOutcome::Approved { .. } => writeln!(
            writer,
            "All required status checks have been marked as passed."
        ),
        ApprovalOutcome::DryRun { head, contexts } => writeln!(
            writer,
            "Dry run: {} required status checks on {} left unchanged.",
            contexts.len(),
            head.sha
        ),
    };
    written.map_err(|error| io_error(&error))
}

/// Converts an I/O error to an [`ApprovalError::Io`].
pub(crate) fn io_error(error: &io::Error) -> ApprovalError {
    ApprovalError::Io {
        message: error.to_string(),
    }
}
