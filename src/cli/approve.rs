//! Required status check approval operation.

use std::io::{self, Write};

use greenlight::{
    ApprovalError, ApprovalOutcome, GreenlightConfig, OctocrabGateway, PersonalAccessToken,
    StatusCheckApproval,
};

use super::RunStatus;
use super::output::{io_error, write_event_to, write_outcome_to};

/// Marks every required status check of the configured pull request as
/// passed.
///
/// # Errors
///
/// Returns [`ApprovalError`] variants for missing configuration, invalid
/// input, or any failed GitHub request.
pub async fn run(config: &GreenlightConfig) -> Result<RunStatus, ApprovalError> {
    let locator = config.pull_request_locator()?;
    let token = PersonalAccessToken::new(config.resolve_token()?)?;

    let gateway = OctocrabGateway::for_token(&token, locator.repository())?;
    let approval = StatusCheckApproval::new(&gateway)
        .with_description(config.description())
        .with_dry_run(config.dry_run);

    tracing::info!(
        repository = %locator.repository(),
        pr = locator.number().get(),
        dry_run = config.dry_run,
        "approving required status checks"
    );

    let outcome = approval
        .approve(&locator, |event| {
            let mut stdout = io::stdout().lock();
            write_event_to(&mut stdout, event)?;
            stdout.flush().map_err(|error| io_error(&error))
        })
        .await?;

    write_outcome_to(&mut io::stdout().lock(), &mut io::stderr().lock(), &outcome)?;

    Ok(match outcome {
        ApprovalOutcome::BranchUnprotected { .. } => RunStatus::BranchUnprotected,
        ApprovalOutcome::NoRequiredChecks { .. }
        | ApprovalOutcome::Approved { .. }
        | ApprovalOutcome::DryRun { .. } => RunStatus::Success,
    })
}
