//! Identity wrappers and API path derivation for status check approval.

use std::fmt;

use url::Url;

use super::error::ApprovalError;

/// Public GitHub API base used when no override is configured.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str, slug: &str) -> Result<Self, ApprovalError> {
        if value.is_empty() {
            return Err(ApprovalError::InvalidRepository(slug.to_owned()));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str, slug: &str) -> Result<Self, ApprovalError> {
        if value.is_empty() {
            return Err(ApprovalError::InvalidRepository(slug.to_owned()));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    /// Validates that the number is positive.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::InvalidPullRequestNumber` for zero.
    pub const fn new(value: u64) -> Result<Self, ApprovalError> {
        if value == 0 {
            return Err(ApprovalError::InvalidPullRequestNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ApprovalError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ApprovalError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

/// Head commit SHA of a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSha(String);

impl CommitSha {
    /// Wraps a commit SHA as reported by GitHub.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the SHA.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CommitSha {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Name under which a commit status is reported (e.g. `build`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckContext(String);

impl CheckContext {
    /// Wraps a status check context name.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the context name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CheckContext {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

fn parse_api_base(input: &str) -> Result<Url, ApprovalError> {
    let parsed = Url::parse(input).map_err(|error| ApprovalError::InvalidUrl(error.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(ApprovalError::InvalidUrl(
            "URL must include a host".to_owned(),
        ));
    }
    Ok(parsed)
}

/// Repository identified by an `owner/name` slug plus the API base to call.
///
/// # Example
///
/// ```
/// use greenlight::RepositoryLocator;
///
/// let locator = RepositoryLocator::parse("octo/repo", "https://api.github.com")
///     .expect("should parse repository slug");
/// assert_eq!(locator.owner().as_str(), "octo");
/// assert_eq!(locator.repository().as_str(), "repo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Parses an `owner/name` slug against the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApprovalError::InvalidRepository` when the slug does not
    /// contain exactly one `/` separating two non-empty parts, and
    /// `ApprovalError::InvalidUrl` when the API base cannot be parsed.
    pub fn parse(slug: &str, api_base: &str) -> Result<Self, ApprovalError> {
        let mut parts = slug.split('/');
        let (Some(owner_part), Some(name_part), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ApprovalError::InvalidRepository(slug.to_owned()));
        };

        let owner = RepositoryOwner::new(owner_part, slug)?;
        let repository = RepositoryName::new(name_part, slug)?;
        let api_base_url = parse_api_base(api_base)?;

        Ok(Self {
            api_base: api_base_url,
            owner,
            repository,
        })
    }

    /// API base URL requests are sent to.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    fn repository_path(&self) -> String {
        format!(
            "/repos/{}/{}",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }

    pub(crate) fn required_status_checks_path(&self, branch: &str) -> String {
        format!(
            "{}/branches/{branch}/protection/required_status_checks",
            self.repository_path()
        )
    }

    pub(crate) fn statuses_path(&self, sha: &CommitSha) -> String {
        format!("{}/statuses/{}", self.repository_path(), sha.as_str())
    }
}

impl fmt::Display for RepositoryLocator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}/{}",
            self.owner.as_str(),
            self.repository.as_str()
        )
    }
}

/// Pull request within a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestLocator {
    repository: RepositoryLocator,
    number: PullRequestNumber,
}

impl PullRequestLocator {
    /// Combines a repository with a pull request number.
    #[must_use]
    pub const fn new(repository: RepositoryLocator, number: PullRequestNumber) -> Self {
        Self { repository, number }
    }

    /// Parses a repository slug, pull request number, and API base in one go.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`RepositoryLocator::parse`] and
    /// `ApprovalError::InvalidPullRequestNumber` for zero.
    pub fn parse(slug: &str, number: u64, api_base: &str) -> Result<Self, ApprovalError> {
        let repository = RepositoryLocator::parse(slug, api_base)?;
        let pr_number = PullRequestNumber::new(number)?;
        Ok(Self::new(repository, pr_number))
    }

    /// Repository the pull request belongs to.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryLocator {
        &self.repository
    }

    /// Pull request number.
    #[must_use]
    pub const fn number(&self) -> PullRequestNumber {
        self.number
    }

    pub(crate) fn pull_request_path(&self) -> String {
        format!(
            "{}/pulls/{}",
            self.repository.repository_path(),
            self.number.get()
        )
    }
}
