//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.greenlight.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `GREENLIGHT_REPO`, `GREENLIGHT_PR`,
//!    `GREENLIGHT_TOKEN`, or legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--repo`/`-r`, `--pr`/`-p`, and
//!    `--token`/`-t`
//!
//! # Configuration File
//!
//! ```toml
//! repo = "org/app"
//! api_base = "https://ghe.example.com/api/v3"
//! description = "Marked as passed by release tooling."
//! log_level = "info"
//! ```

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::ApprovalError;
use crate::github::locator::{DEFAULT_API_BASE, PullRequestLocator};
use crate::github::models::DEFAULT_STATUS_DESCRIPTION;

/// Log filter used when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use greenlight::GreenlightConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = GreenlightConfig::load().expect("failed to load configuration");
/// let locator = config.pull_request_locator().expect("repo and PR required");
/// let token = config.resolve_token().expect("token required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "GREENLIGHT",
    discovery(
        dotfile_name = ".greenlight.toml",
        config_file_name = "greenlight.toml",
        app_name = "greenlight"
    )
)]
pub struct GreenlightConfig {
    /// Repository in `owner/name` form.
    ///
    /// Can be provided via:
    /// - CLI: `--repo <OWNER/NAME>` or `-r <OWNER/NAME>`
    /// - Environment: `GREENLIGHT_REPO`
    /// - Config file: `repo = "..."`
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Pull request number.
    ///
    /// Can be provided via:
    /// - CLI: `--pr <NUMBER>` or `-p <NUMBER>`
    /// - Environment: `GREENLIGHT_PR`
    #[ortho_config(cli_short = 'p')]
    pub pr: Option<u64>,

    /// Token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `GREENLIGHT_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// GitHub API base URL. Defaults to `https://api.github.com`; GitHub
    /// Enterprise installations use `https://<host>/api/v3`.
    #[ortho_config()]
    pub api_base: Option<String>,

    /// Description attached to each status.
    #[ortho_config()]
    pub description: Option<String>,

    /// Reads pull request and branch protection data without writing any
    /// statuses.
    ///
    /// Can be provided via:
    /// - CLI: `--dry-run`
    /// - Config file: `dry_run = true`
    #[ortho_config()]
    pub dry_run: bool,

    /// `tracing` filter directive for diagnostics on stderr (e.g. `debug`).
    #[ortho_config()]
    pub log_level: Option<String>,
}

impl GreenlightConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, ApprovalError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(ApprovalError::MissingToken)
    }

    /// Returns the repository slug or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::MissingRepository`] when no repo is configured.
    pub fn require_repo(&self) -> Result<&str, ApprovalError> {
        self.repo
            .as_deref()
            .ok_or(ApprovalError::MissingRepository)
    }

    /// Returns the pull request number or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ApprovalError::MissingPullRequestNumber`] when no number is
    /// configured.
    pub const fn require_pr(&self) -> Result<u64, ApprovalError> {
        match self.pr {
            Some(number) => Ok(number),
            None => Err(ApprovalError::MissingPullRequestNumber),
        }
    }

    /// API base URL, falling back to the public GitHub API.
    #[must_use]
    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Status description, falling back to the default text.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or(DEFAULT_STATUS_DESCRIPTION)
    }

    /// Log filter directive, falling back to `warn`.
    #[must_use]
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Builds the pull request locator from `repo`, `pr`, and `api_base`.
    ///
    /// # Errors
    ///
    /// Returns the missing-value errors of [`Self::require_repo`] and
    /// [`Self::require_pr`], or the parse errors of
    /// [`PullRequestLocator::parse`].
    pub fn pull_request_locator(&self) -> Result<PullRequestLocator, ApprovalError> {
        let repo = self.require_repo()?;
        let number = self.require_pr()?;
        PullRequestLocator::parse(repo, number, self.api_base())
    }
}

#[cfg(test)]
mod tests;
