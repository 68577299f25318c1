//! Gateways for reading pull requests and writing commit statuses.
//!
//! The trait-based design enables mocking in tests while the Octocrab
//! implementation handles real HTTP requests.

mod error_mapping;
mod http_utils;
mod status_checks;


pub use status_checks::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::ApprovalError;
use crate::github::locator::{CommitSha, PullRequestLocator, RepositoryLocator};
use crate::github::models::{
    CommitStatus, CommitStatusRequest, PullRequestHead, RequiredStatusChecks,
};

/// Gateway covering the three GitHub calls needed to approve checks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusCheckGateway: Send + Sync {
    /// Fetch the head branch and head commit of the pull request.
    async fn pull_request_head(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestHead, ApprovalError>;

    /// Fetch the required status check contexts configured for `branch`.
    ///
    /// A branch without protection yields [`RequiredStatusChecks::Unprotected`]
    /// rather than an error.
    async fn required_status_checks(
        &self,
        repository: &RepositoryLocator,
        branch: &str,
    ) -> Result<RequiredStatusChecks, ApprovalError>;

    /// Create a commit status on `sha`.
    async fn set_commit_status(
        &self,
        repository: &RepositoryLocator,
        sha: &CommitSha,
        status: &CommitStatusRequest,
    ) -> Result<CommitStatus, ApprovalError>;
}
