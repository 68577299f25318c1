//! GitHub status check approval.
//!
//! This module wraps Octocrab to read a pull request's head, look up the
//! required status check contexts on the head branch, and mark each one as
//! passed. Errors are mapped into user-friendly variants so that callers can
//! surface precise failures without exposing Octocrab internals.

pub mod approval;
pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use approval::{ApprovalEvent, ApprovalOutcome, StatusCheckApproval};
pub use error::ApprovalError;
pub use gateway::{OctocrabGateway, StatusCheckGateway};
pub use locator::{
    CheckContext, CommitSha, PersonalAccessToken, PullRequestLocator, PullRequestNumber,
    RepositoryLocator, RepositoryName, RepositoryOwner,
};
pub use models::{
    CommitState, CommitStatus, CommitStatusRequest, PullRequestHead, RequiredStatusChecks,
};

#[cfg(test)]
pub use gateway::MockStatusCheckGateway;
