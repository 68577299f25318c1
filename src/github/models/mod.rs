//! Data models for pull request heads, required checks, and commit statuses.
//!
//! Types prefixed with `Api` are internal deserialisation targets that convert
//! into public domain types.

use serde::{Deserialize, Serialize};

use super::locator::{CheckContext, CommitSha};

#[cfg(feature = "test-support")]
pub mod test_support;

/// Description attached to every status unless overridden.
pub const DEFAULT_STATUS_DESCRIPTION: &str = "Marked as passed by automation.";

/// Head of a pull request: the source branch and its latest commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestHead {
    /// Head branch name.
    pub branch: String,
    /// Head commit SHA.
    pub sha: CommitSha,
}

/// Required status checks configured for a branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequiredStatusChecks {
    /// The branch has no protection rule.
    Unprotected,
    /// Contexts that must pass before merge, possibly empty.
    Contexts(Vec<CheckContext>),
}

/// Commit status state. Only `success` is ever written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitState {
    /// The check passed.
    Success,
}

/// Body of a create-commit-status request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitStatusRequest {
    /// Status state.
    pub state: CommitState,
    /// Context the status is reported under.
    pub context: String,
    /// Short human-readable description.
    pub description: String,
}

impl CommitStatusRequest {
    /// Builds a `success` status for the given context.
    #[must_use]
    pub fn success(context: &CheckContext, description: &str) -> Self {
        Self {
            state: CommitState::Success,
            context: context.as_str().to_owned(),
            description: description.to_owned(),
        }
    }
}

/// Commit status as echoed back by GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitStatus {
    /// Status identifier.
    pub id: Option<u64>,
    /// Reported state string.
    pub state: Option<String>,
    /// Context name.
    pub context: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) head: ApiHead,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiHead {
    #[serde(rename = "ref")]
    pub(super) branch: String,
    pub(super) sha: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiRequiredStatusChecks {
    #[serde(default)]
    pub(super) contexts: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiCommitStatus {
    pub(super) id: Option<u64>,
    pub(super) state: Option<String>,
    pub(super) context: Option<String>,
}

impl From<ApiPullRequest> for PullRequestHead {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            branch: value.head.branch,
            sha: CommitSha::new(value.head.sha),
        }
    }
}

impl From<ApiRequiredStatusChecks> for RequiredStatusChecks {
    fn from(value: ApiRequiredStatusChecks) -> Self {
        Self::Contexts(value.contexts.into_iter().map(CheckContext::new).collect())
    }
}

impl From<ApiCommitStatus> for CommitStatus {
    fn from(value: ApiCommitStatus) -> Self {
        Self {
            id: value.id,
            state: value.state,
            context: value.context,
        }
    }
}
