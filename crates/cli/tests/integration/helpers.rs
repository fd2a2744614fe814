//! Test helper utilities for CLI integration tests.

#![allow(deprecated)] // Command::cargo_bin deprecation

use assert_cmd::Command;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Environment variables the CLI reads; cleared so the caller's shell can't leak in.
const CLI_ENV: [&str; 5] = [
    "KENTICO_PROJECT_ID",
    "KENTICO_PREVIEW_KEY",
    "KENTICO_DELIVER_URL",
    "KENTICO_PREVIEW_URL",
    "RUST_LOG",
];

/// Start a mock Deliver server.
pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a CLI command without mock server or project (for validation tests).
pub fn deliver_cmd() -> Command {
    let mut cmd = Command::cargo_bin("deliver").unwrap();
    for var in CLI_ENV {
        cmd.env_remove(var);
    }
    cmd
}

/// Create a CLI command for project `123` using the default endpoints.
pub fn deliver_cmd_with_project() -> Command {
    let mut cmd = deliver_cmd();
    cmd.env("KENTICO_PROJECT_ID", "123");
    cmd
}

/// Create a CLI command for project `123` pointing to a mock server.
///
/// Preview content is served from `/preview`.
pub fn deliver_cmd_with_mock(mock: &MockServer) -> Command {
    let mut cmd = deliver_cmd_with_project();
    cmd.env("KENTICO_DELIVER_URL", mock.uri());
    cmd.env("KENTICO_PREVIEW_URL", format!("{}/preview", mock.uri()));
    cmd
}

/// Load a fixture file as a string.
pub fn load_fixture(name: &str) -> String {
    let path = format!(
        "{}/tests/fixtures/{}.json",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", path))
}

/// Mock any GET request with a fixture response.
pub async fn mock_items_response(server: &MockServer, fixture_name: &str) {
    let body = load_fixture(fixture_name);
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

/// Mock an HTTP error response.
pub async fn mock_http_error(server: &MockServer, status_code: u16) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status_code).set_body_string("Internal Server Error"))
        .mount(server)
        .await;
}
