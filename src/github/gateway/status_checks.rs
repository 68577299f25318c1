//! Octocrab implementation of the status check gateway.

use async_trait::async_trait;
use http::header::ACCEPT;
use http::{Method, Request, StatusCode, Uri};
use octocrab::Octocrab;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::github::error::ApprovalError;
use crate::github::locator::{
    CommitSha, PersonalAccessToken, PullRequestLocator, RepositoryLocator,
};
use crate::github::models::{
    ApiCommitStatus, ApiPullRequest, ApiRequiredStatusChecks, CommitStatus, CommitStatusRequest,
    PullRequestHead, RequiredStatusChecks,
};

use super::StatusCheckGateway;
use super::error_mapping::{map_http_error, map_octocrab_error};
use super::http_utils::{
    BRANCH_PROTECTION_PREVIEW_MEDIA_TYPE, V3_MEDIA_TYPE, extract_github_message,
};

/// Raw outcome of a request: status and body text.
struct RawResponse {
    status: StatusCode,
    body: String,
}

impl RawResponse {
    fn decode<T: DeserializeOwned>(&self, operation: &str) -> Result<T, ApprovalError> {
        serde_json::from_str(&self.body).map_err(|error| ApprovalError::Api {
            message: format!("{operation} response deserialisation failed: {error}"),
        })
    }

    fn into_error(self, operation: &str) -> ApprovalError {
        map_http_error(operation, self.status, extract_github_message(&self.body))
    }
}

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a gateway authenticated with `token` against the repository's
    /// API base.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::InvalidUrl` when the API base is not a valid
    /// URI or `ApprovalError::Api` when Octocrab rejects the configuration.
    pub fn for_token(
        token: &PersonalAccessToken,
        repository: &RepositoryLocator,
    ) -> Result<Self, ApprovalError> {
        let base_uri = repository
            .api_base()
            .as_str()
            .parse::<Uri>()
            .map_err(|error| ApprovalError::InvalidUrl(error.to_string()))?;

        let client = Octocrab::builder()
            .personal_token(token.as_ref())
            .base_uri(base_uri)
            .map_err(|error| ApprovalError::Api {
                message: format!("build client failed: {error}"),
            })?
            .build()
            .map_err(|error| map_octocrab_error("build client", &error))?;

        Ok(Self::new(client))
    }

    /// Sends one request with an explicit `Accept` media type and returns
    /// the status and body without interpreting either.
    async fn send<B>(
        &self,
        operation: &str,
        method: Method,
        path: &str,
        media_type: &'static str,
        body: Option<&B>,
    ) -> Result<RawResponse, ApprovalError>
    where
        B: Serialize + ?Sized,
    {
        let uri: Uri = path
            .parse::<Uri>()
            .map_err(|error| ApprovalError::InvalidUrl(error.to_string()))?;

        tracing::debug!(operation, %method, path, media_type, "sending GitHub request");
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(ACCEPT, media_type);
        let request = self
            .client
            .build_request(builder, body)
            .map_err(|error| map_octocrab_error(operation, &error))?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|error| map_octocrab_error(operation, &error))?;

        let status = response.status();
        let text = self
            .client
            .body_to_string(response)
            .await
            .map_err(|error| ApprovalError::Api {
                message: format!("{operation} response decode failed: {error}"),
            })?;

        tracing::debug!(operation, %status, "received GitHub response");
        Ok(RawResponse { status, body: text })
    }
}

#[async_trait]
impl StatusCheckGateway for OctocrabGateway {
    async fn pull_request_head(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<PullRequestHead, ApprovalError> {
        const OPERATION: &str = "pull request";

        let response = self
            .send(
                OPERATION,
                Method::GET,
                &locator.pull_request_path(),
                V3_MEDIA_TYPE,
                None::<&()>,
            )
            .await?;

        if !response.status.is_success() {
            return Err(response.into_error(OPERATION));
        }

        response
            .decode::<ApiPullRequest>(OPERATION)
            .map(PullRequestHead::from)
    }

    async fn required_status_checks(
        &self,
        repository: &RepositoryLocator,
        branch: &str,
    ) -> Result<RequiredStatusChecks, ApprovalError> {
        const OPERATION: &str = "required status checks";

        let response = self
            .send(
                OPERATION,
                Method::GET,
                &repository.required_status_checks_path(branch),
                BRANCH_PROTECTION_PREVIEW_MEDIA_TYPE,
                None::<&()>,
            )
            .await?;

        match response.status {
            StatusCode::NOT_FOUND => Ok(RequiredStatusChecks::Unprotected),
            status if status.is_success() => response
                .decode::<ApiRequiredStatusChecks>(OPERATION)
                .map(RequiredStatusChecks::from),
            _ => Err(response.into_error(OPERATION)),
        }
    }

    async fn set_commit_status(
        &self,
        repository: &RepositoryLocator,
        sha: &CommitSha,
        status: &CommitStatusRequest,
    ) -> Result<CommitStatus, ApprovalError> {
        const OPERATION: &str = "create commit status";

        let response = self
            .send(
                OPERATION,
                Method::POST,
                &repository.statuses_path(sha),
                V3_MEDIA_TYPE,
                Some(status),
            )
            .await?;

        if !response.status.is_success() {
            return Err(response.into_error(OPERATION));
        }

        response
            .decode::<ApiCommitStatus>(OPERATION)
            .map(CommitStatus::from)
    }
}
