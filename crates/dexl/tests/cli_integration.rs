//! CLI integration tests for the dexl command-line interface.
//!
//! Parsing and help tests need no network. Lookup tests run against a
//! local mock API.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get a command for the dexl binary with a clean environment.
fn dexl() -> Command {
    let mut cmd = Command::cargo_bin("dexl").unwrap();
    cmd.env_remove("DEXL_TOKEN").env_remove("DEXL_BASE_URL");
    cmd
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_lists_subcommands() {
    dexl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("post-stats"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("health"))
        .stdout(predicate::str::contains("bot"))
        .stdout(predicate::str::contains("server"))
        .stdout(predicate::str::contains("template"))
        .stdout(predicate::str::contains("user"));
}

#[test]
fn test_version_displays() {
    dexl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dexl"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Argument Validation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_bot_requires_id() {
    dexl()
        .arg("bot")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<ID>"));
}

#[test]
fn test_post_stats_rejects_non_numeric_guilds() {
    dexl()
        .args(["post-stats", "123", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_post_stats_without_token_fails() {
    dexl()
        .args(["--base-url", "http://127.0.0.1:1/v2/", "post-stats", "123", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("token is missing"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Mock API
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_bot_prints_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/bot/42"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"bot": {"name": "Example"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    dexl()
        .args(["--compact", "--base-url"])
        .arg(format!("{}/v2", server.uri()))
        .args(["bot", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"bot":{"name":"Example"}}"#));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_post_stats_with_token_env() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/bot/123/stats"))
        .and(header("authorization", "secret"))
        .and(body_json(json!({"guildCount": 50, "shardCount": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"error": false})))
        .expect(1)
        .mount(&server)
        .await;

    dexl()
        .env("DEXL_TOKEN", "secret")
        .env("DEXL_BASE_URL", format!("{}/v2/", server.uri()))
        .args(["post-stats", "123", "50", "--shards", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Posted stats for 123"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_post_stats_rejected_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"error": true, "message": "bad"})),
        )
        .mount(&server)
        .await;

    dexl()
        .args(["--token", "secret", "--base-url"])
        .arg(format!("{}/v2/", server.uri()))
        .args(["post-stats", "123", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to post stats"));
}
