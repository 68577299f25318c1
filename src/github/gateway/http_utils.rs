//! Shared HTTP utilities for gateway implementations.

/// Media type for the stable v3 REST API.
pub(super) const V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Preview media type required by the branch protection endpoints.
pub(super) const BRANCH_PROTECTION_PREVIEW_MEDIA_TYPE: &str =
    "application/vnd.github.luke-cage-preview+json";

pub(super) fn extract_github_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}
