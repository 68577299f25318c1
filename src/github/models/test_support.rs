//! Test helpers for building GitHub API response bodies.
//!
//! These fixtures mirror the subset of GitHub's JSON that the gateway reads,
//! so behavioural and CLI tests can seed mock servers consistently.
//!
//! # Examples
//!
//! ```
//! use greenlight::github::models::test_support::{pull_request_body, required_checks_body};
//!
//! let pr = pull_request_body(42, "feature-x", "abc123");
//! assert_eq!(pr["head"]["sha"], "abc123");
//!
//! let checks = required_checks_body(&["build", "lint"]);
//! assert_eq!(checks["contexts"][1], "lint");
//! ```

use serde_json::{Value, json};

/// Builds a pull request body with the given head branch and SHA.
#[must_use]
pub fn pull_request_body(number: u64, branch: &str, sha: &str) -> Value {
    json!({
        "number": number,
        "state": "open",
        "title": format!("Pull request {number}"),
        "head": {
            "ref": branch,
            "sha": sha,
            "label": format!("owner:{branch}")
        },
        "base": { "ref": "main", "sha": "0000000" }
    })
}

/// Builds a required status checks body listing `contexts`.
#[must_use]
pub fn required_checks_body(contexts: &[&str]) -> Value {
    json!({
        "strict": true,
        "contexts": contexts
    })
}

/// Builds the body GitHub returns after creating a commit status.
#[must_use]
pub fn commit_status_body(id: u64, context: &str) -> Value {
    json!({
        "id": id,
        "state": "success",
        "context": context,
        "description": "Marked as passed by automation."
    })
}

/// Builds a GitHub error body with the given message.
#[must_use]
pub fn error_body(message: &str) -> Value {
    json!({
        "message": message,
        "documentation_url": "https://docs.github.com/rest"
    })
}
