//! CLI integration tests for output and exit codes.
//!
//! These tests spawn the Greenlight binary as a subprocess against a Wiremock
//! server standing in for the GitHub API.

use std::process::{Command, Output};

use greenlight::github::models::test_support::{
    commit_status_body, error_body, pull_request_body, required_checks_body,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROTECTION_PATH: &str =
    "/repos/org/app/branches/feature-x/protection/required_status_checks";
const STATUSES_PATH: &str = "/repos/org/app/statuses/abc123";

async fn run_greenlight(server: &MockServer, extra_args: &[&str]) -> Output {
    let mut args = vec![
        "--repo".to_owned(),
        "org/app".to_owned(),
        "--pr".to_owned(),
        "42".to_owned(),
        "--token".to_owned(),
        "ghp_example".to_owned(),
        "--api-base".to_owned(),
        server.uri(),
    ];
    args.extend(extra_args.iter().map(|arg| (*arg).to_owned()));
    run_binary(args).await
}

async fn run_binary(args: Vec<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_greenlight"))
            .args(&args)
            // Keep the run hermetic even if the developer has these set.
            .env_remove("GREENLIGHT_REPO")
            .env_remove("GREENLIGHT_PR")
            .env_remove("GREENLIGHT_TOKEN")
            .env_remove("GREENLIGHT_API_BASE")
            .env_remove("GREENLIGHT_DESCRIPTION")
            .env_remove("GREENLIGHT_LOG_LEVEL")
            .env_remove("GITHUB_TOKEN")
            .output()
            .unwrap_or_else(|error| panic!("failed to execute binary: {error}"))
    })
    .await
    .unwrap_or_else(|error| panic!("binary task panicked: {error}"))
}

async fn mount_pull_request(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/repos/org/app/pulls/42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(pull_request_body(42, "feature-x", "abc123")),
        )
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_required_checks(server: &MockServer, contexts: &[&str]) {
    Mock::given(method("GET"))
        .and(path(PROTECTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(required_checks_body(contexts)))
        .expect(1)
        .mount(server)
        .await;
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[tokio::test]
async fn approves_each_required_check_and_exits_zero() {
    let server = MockServer::start().await;
    mount_pull_request(&server).await;
    mount_required_checks(&server, &["build", "lint"]).await;
    for context in ["build", "lint"] {
        Mock::given(method("POST"))
            .and(path(STATUSES_PATH))
            .and(body_partial_json(json!({ "state": "success", "context": context })))
            .respond_with(ResponseTemplate::new(201).set_body_json(commit_status_body(1, context)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let output = run_greenlight(&server, &[]).await;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "Set status 'build' to success.\n\
         Set status 'lint' to success.\n\
         All required status checks have been marked as passed.\n",
        "stdout mismatch"
    );
}

#[tokio::test]
async fn no_required_checks_exits_zero_without_posting() {
    let server = MockServer::start().await;
    mount_pull_request(&server).await;
    mount_required_checks(&server, &[]).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_greenlight(&server, &[]).await;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "No required status checks found for branch 'feature-x'.\n",
        "stdout mismatch"
    );
}

#[tokio::test]
async fn missing_branch_protection_exits_one_without_posting() {
    let server = MockServer::start().await;
    mount_pull_request(&server).await;
    Mock::given(method("GET"))
        .and(path(PROTECTION_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_body("Branch not protected")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_greenlight(&server, &[]).await;

    assert_eq!(output.status.code(), Some(1), "expected exit code 1");
    assert_eq!(
        stderr_of(&output),
        "No branch protection configured for branch 'feature-x'\n",
        "stderr should carry only the diagnostic line"
    );
    assert!(stdout_of(&output).is_empty(), "stdout should be empty");
}

#[tokio::test]
async fn pull_request_failure_exits_two_before_other_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/org/app/pulls/42"))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_body("Not Found")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(PROTECTION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(required_checks_body(&["build"])))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_greenlight(&server, &[]).await;

    assert_eq!(output.status.code(), Some(2), "expected exit code 2");
    assert!(
        stderr_of(&output).contains("GitHub API error: pull request failed with status 404"),
        "stderr: {}",
        stderr_of(&output)
    );
}

#[tokio::test]
async fn status_failure_stops_remaining_checks() {
    let server = MockServer::start().await;
    mount_pull_request(&server).await;
    mount_required_checks(&server, &["build", "lint", "test"]).await;
    Mock::given(method("POST"))
        .and(path(STATUSES_PATH))
        .and(body_partial_json(json!({ "context": "build" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(commit_status_body(1, "build")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(STATUSES_PATH))
        .and(body_partial_json(json!({ "context": "lint" })))
        .respond_with(ResponseTemplate::new(422).set_body_json(error_body("Validation Failed")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(STATUSES_PATH))
        .and(body_partial_json(json!({ "context": "test" })))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_greenlight(&server, &[]).await;

    assert_eq!(output.status.code(), Some(2), "expected exit code 2");
    assert_eq!(
        stdout_of(&output),
        "Set status 'build' to success.\n",
        "only the first status should be confirmed"
    );
    assert!(
        stderr_of(&output).contains("Validation Failed"),
        "stderr: {}",
        stderr_of(&output)
    );
}

#[tokio::test]
async fn dry_run_reads_but_never_posts() {
    let server = MockServer::start().await;
    mount_pull_request(&server).await;
    mount_required_checks(&server, &["build", "lint"]).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let output = run_greenlight(&server, &["--dry-run"]).await;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output),
        "Would set status 'build' to success.\n\
         Would set status 'lint' to success.\n\
         Dry run: 2 required status checks on abc123 left unchanged.\n",
        "stdout mismatch"
    );
}

#[tokio::test]
async fn custom_description_is_posted() {
    let server = MockServer::start().await;
    mount_pull_request(&server).await;
    mount_required_checks(&server, &["build"]).await;
    Mock::given(method("POST"))
        .and(path(STATUSES_PATH))
        .and(body_partial_json(json!({ "description": "Forced by release" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(commit_status_body(1, "build")))
        .expect(1)
        .mount(&server)
        .await;

    let output = run_greenlight(&server, &["--description", "Forced by release"]).await;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
}

#[tokio::test]
async fn missing_repository_exits_two_without_network() {
    let output = run_binary(vec![
        "--pr".to_owned(),
        "42".to_owned(),
        "--token".to_owned(),
        "ghp_example".to_owned(),
        "--api-base".to_owned(),
        "http://127.0.0.1:9".to_owned(),
    ])
    .await;

    assert_eq!(output.status.code(), Some(2), "expected exit code 2");
    assert!(
        stderr_of(&output).contains("repository is required"),
        "stderr: {}",
        stderr_of(&output)
    );
}

#[tokio::test]
async fn malformed_repository_exits_two() {
    let output = run_binary(vec![
        "--repo".to_owned(),
        "org-app".to_owned(),
        "--pr".to_owned(),
        "42".to_owned(),
        "--token".to_owned(),
        "ghp_example".to_owned(),
    ])
    .await;

    assert_eq!(output.status.code(), Some(2), "expected exit code 2");
    assert!(
        stderr_of(&output).contains("'owner/name' format"),
        "stderr: {}",
        stderr_of(&output)
    );
}
