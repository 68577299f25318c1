//! High-level approval facade used by the CLI.

use super::error::ApprovalError;
use super::gateway::StatusCheckGateway;
use super::locator::{CheckContext, PullRequestLocator};
use super::models::{
    CommitStatusRequest, DEFAULT_STATUS_DESCRIPTION, PullRequestHead, RequiredStatusChecks,
};

/// Progress notification emitted once per required context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalEvent<'context> {
    /// A `success` status was written for the context.
    StatusSet(&'context CheckContext),
    /// Dry run: the status would have been written.
    StatusSkipped(&'context CheckContext),
}

/// Result of an approval run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApprovalOutcome {
    /// The head branch has no branch protection rule.
    BranchUnprotected {
        /// Head branch name.
        branch: String,
    },
    /// Branch protection exists but requires no status checks.
    NoRequiredChecks {
        /// Head branch name.
        branch: String,
    },
    /// Every required context was marked as passed.
    Approved {
        /// Pull request head the statuses were written against.
        head: PullRequestHead,
        /// Contexts marked as passed, in the order they were written.
        contexts: Vec<CheckContext>,
    },
    /// Dry run: nothing was written.
    DryRun {
        /// Pull request head that would have been approved.
        head: PullRequestHead,
        /// Contexts that would have been marked as passed.
        contexts: Vec<CheckContext>,
    },
}

/// Marks the required status checks of a pull request as passed.
pub struct StatusCheckApproval<'client, Gateway>
where
    Gateway: StatusCheckGateway,
{
    client: &'client Gateway,
    description: String,
    dry_run: bool,
}

impl<'client, Gateway> StatusCheckApproval<'client, Gateway>
where
    Gateway: StatusCheckGateway,
{
    /// Create a new approval facade using the provided gateway.
    #[must_use]
    pub fn new(client: &'client Gateway) -> Self {
        Self {
            client,
            description: DEFAULT_STATUS_DESCRIPTION.to_owned(),
            dry_run: false,
        }
    }

    /// Overrides the description attached to each status.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Reads everything but skips the status writes when `dry_run` is set.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Approve every required status check on the pull request's head commit.
    ///
    /// Statuses are written one at a time in the order GitHub lists the
    /// contexts, and `on_event` is called after each write. The first failure
    /// stops the run; statuses written before it remain in place.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway or from `on_event`.
    pub async fn approve<F>(
        &self,
        locator: &PullRequestLocator,
        mut on_event: F,
    ) -> Result<ApprovalOutcome, ApprovalError>
    where
        F: FnMut(ApprovalEvent<'_>) -> Result<(), ApprovalError>,
    {
        let head = self.client.pull_request_head(locator).await?;
        tracing::debug!(branch = %head.branch, sha = %head.sha, "resolved pull request head");

        let required = self
            .client
            .required_status_checks(locator.repository(), &head.branch)
            .await?;

        let contexts = match required {
            RequiredStatusChecks::Unprotected => {
                tracing::info!(branch = %head.branch, "branch has no protection rule");
                return Ok(ApprovalOutcome::BranchUnprotected {
                    branch: head.branch,
                });
            }
            RequiredStatusChecks::Contexts(contexts) if contexts.is_empty() => {
                return Ok(ApprovalOutcome::NoRequiredChecks {
                    branch: head.branch,
                });
            }
            RequiredStatusChecks::Contexts(contexts) => contexts,
        };

        if self.dry_run {
            for context in &contexts {
                on_event(ApprovalEvent::StatusSkipped(context))?;
            }
            return Ok(ApprovalOutcome::DryRun { head, contexts });
        }

        for context in &contexts {
            let request = CommitStatusRequest::success(context, &self.description);
            self.client
                .set_commit_status(locator.repository(), &head.sha, &request)
                .await?;
            tracing::info!(%context, sha = %head.sha, "status set to success");
            on_event(ApprovalEvent::StatusSet(context))?;
        }

        Ok(ApprovalOutcome::Approved { head, contexts })
    }
}
