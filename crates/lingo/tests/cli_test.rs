//! Integration tests for the `lingo` CLI binary.
//!
//! Argument parsing, completions, config handling and exit codes run
//! without a network; the API round-trips run against a wiremock server.
#![allow(clippy::unwrap_used)]

use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

const NO_CONFIG: &str = "/tmp/lingo-cli-test-nonexistent/config.toml";
const UNREACHABLE: &str = "http://127.0.0.1:1";

/// Build a command for the `lingo` binary with env isolation.
///
/// Clears every `LINGO_*` variable and points the config file at a
/// nonexistent path so tests never read the user's real configuration.
fn lingo_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("lingo");
    cmd.env("HOME", "/tmp/lingo-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/lingo-cli-test-nonexistent")
        .env("LINGO_CONFIG", NO_CONFIG)
        .env_remove("LINGO_PROFILE")
        .env_remove("LINGO_API_URL")
        .env_remove("LINGO_TOKEN")
        .env_remove("LINGO_OUTPUT")
        .env_remove("LINGO_INSECURE")
        .env_remove("LINGO_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

fn lingo_with_config(config: &Path) -> assert_cmd::Command {
    let mut cmd = lingo_cmd();
    cmd.env("LINGO_CONFIG", config);
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Run a prepared command off the async runtime the mock server lives on.
async fn run(mut cmd: assert_cmd::Command) -> std::process::Output {
    tokio::task::spawn_blocking(move || cmd.output().unwrap())
        .await
        .unwrap()
}

fn projects_page(next: &str) -> serde_json::Value {
    json!({
        "data": [{
            "id": "o:acme:p:web",
            "type": "projects",
            "attributes": {
                "name": "Web App",
                "slug": "web",
                "type": "file",
                "private": true,
                "archived": false
            },
            "relationships": {
                "organization": { "data": { "id": "o:acme", "type": "organizations" } }
            }
        }],
        "links": { "self": "", "next": next, "previous": "" }
    })
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = lingo_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    lingo_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("Transifex")
            .and(predicate::str::contains("projects"))
            .and(predicate::str::contains("translations"))
            .and(predicate::str::contains("memberships")),
    );
}

#[test]
fn test_version_flag() {
    lingo_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lingo"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    lingo_cmd().arg("frobnicate").assert().code(2);
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    lingo_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    lingo_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lingo"));
}

#[test]
fn test_completions_fish() {
    lingo_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Exit codes without a server ─────────────────────────────────────

#[test]
fn test_missing_token_exits_auth() {
    let output = lingo_cmd()
        .args(["projects", "list", "--organization", "o:acme"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(combined_output(&output).contains("No API token"));
}

#[test]
fn test_missing_organization_is_usage_error() {
    let output = lingo_cmd()
        .args(["projects", "list", "--token", "t", "--api-url", UNREACHABLE])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("organization"));
}

#[test]
fn test_out_of_range_limit_is_usage_error() {
    lingo_cmd()
        .args(["strings", "list", "--resource", "o:a:p:b:r:c", "--limit", "5"])
        .args(["--token", "t", "--api-url", UNREACHABLE])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_priority_is_usage_error() {
    lingo_cmd()
        .args(["comments", "list", "--organization", "o:acme", "--priority", "urgent"])
        .args(["--token", "t", "--api-url", UNREACHABLE])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_profile_is_usage_error() {
    let output = lingo_cmd()
        .args(["--profile", "ghost", "organizations", "list"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("ghost"));
}

#[test]
fn test_connection_refused_exits_connection() {
    lingo_cmd()
        .args(["organizations", "list", "--token", "t", "--api-url", UNREACHABLE])
        .assert()
        .code(7);
}

// ── Config commands ─────────────────────────────────────────────────

#[test]
fn test_config_path_honours_override() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.toml");
    lingo_with_config(&file)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_then_show_redacts_token() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.toml");

    lingo_with_config(&file)
        .args(["config", "init", "--name", "work", "--with-token", "1/secret"])
        .args(["--organization", "o:acme"])
        .assert()
        .success();

    let written = std::fs::read_to_string(&file).unwrap();
    assert!(written.contains("[profiles.work]"));
    assert!(written.contains("o:acme"));

    lingo_with_config(&file)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("o:acme").and(predicate::str::contains("1/secret").not()),
        );
}

// ── Against a mock API ──────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_projects_list_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param("filter[organization]", "o:acme"))
        .and(header("authorization", "Bearer t0ken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(projects_page("")))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = lingo_cmd();
    cmd.args(["projects", "list", "--organization", "o:acme", "-o", "json"])
        .args(["--token", "t0ken", "--api-url", &server.uri()]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["data"][0]["id"], "o:acme:p:web");
    assert_eq!(parsed["data"][0]["attributes"]["name"], "Web App");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_all_follows_cursor_and_profile_supplies_org() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param("page[cursor]", "c2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "o:acme:p:api", "type": "projects", "attributes": { "name": "API" } }],
            "links": { "next": null }
        })))
        .expect(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param("filter[organization]", "o:acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(projects_page(
            "/projects?filter[organization]=o:acme&page[cursor]=c2",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config.toml");
    std::fs::write(
        &file,
        format!(
            "default_profile = \"work\"\n\n[profiles.work]\napi_url = \"{}\"\ntoken = \"t\"\norganization = \"o:acme\"\n",
            server.uri()
        ),
    )
    .unwrap();

    let mut cmd = lingo_with_config(&file);
    cmd.args(["projects", "list", "--all", "-o", "json-compact"]);
    let output = run(cmd).await;

    assert!(output.status.success(), "{}", combined_output(&output));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<&str> = parsed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["o:acme:p:web", "o:acme:p:api"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_table_output_and_cursor_hint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(projects_page(
            "https://rest.api.transifex.com/projects?page[cursor]=next-1",
        )))
        .mount(&server)
        .await;

    let mut cmd = lingo_cmd();
    cmd.args(["projects", "list", "--organization", "o:acme"])
        .args(["--token", "t", "--api-url", &server.uri()]);
    let output = run(cmd).await;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Web App"));
    assert!(stdout.contains("ID"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--cursor next-1"), "{stderr}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_not_found_exits_4() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/o:acme:p:gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{ "status": "404", "code": "not_found", "detail": "Project not found" }]
        })))
        .mount(&server)
        .await;

    let mut cmd = lingo_cmd();
    cmd.args(["projects", "get", "o:acme:p:gone"])
        .args(["--token", "t", "--api-url", &server.uri()]);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("Project not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unauthorized_exits_3() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/organizations"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{ "status": "401", "code": "unauthorized", "title": "Unauthorized" }]
        })))
        .mount(&server)
        .await;

    let mut cmd = lingo_cmd();
    cmd.args(["organizations", "list", "--token", "bad", "--api-url", &server.uri()]);
    let output = run(cmd).await;

    assert_eq!(output.status.code(), Some(3));
}
