//! Greenlight library crate for approving required status checks.
//!
//! The library wraps Octocrab to read a pull request's head commit, look up
//! the required status check contexts configured by branch protection on the
//! head branch, and post a `success` commit status for each context. Errors
//! are mapped into friendly variants that the CLI can display directly.

pub mod config;
pub mod github;

pub use config::GreenlightConfig;
pub use github::{
    ApprovalError, ApprovalOutcome, CheckContext, CommitSha, OctocrabGateway,
    PersonalAccessToken, PullRequestHead, PullRequestLocator, RepositoryLocator,
    RequiredStatusChecks, StatusCheckApproval, StatusCheckGateway,
};
