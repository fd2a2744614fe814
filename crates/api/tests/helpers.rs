//! Test helper utilities for API crate integration tests.

use kentico_deliver_api::{ClientConfig, DeliverClient};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Project id used by every mocked client.
pub const PROJECT_ID: &str = "123";

/// Preview key used by every mocked preview client.
pub const PREVIEW_KEY: &str = "preview-key";

/// Start a mock Deliver server.
pub async fn start_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a ClientConfig pointing to a mock server.
///
/// Published content is served from `/`, preview content from `/preview`.
pub fn client_config_with_mock(mock: &MockServer) -> ClientConfig {
    ClientConfig::new(PROJECT_ID)
        .with_published_url(mock.uri())
        .with_preview_url(format!("{}/preview", mock.uri()))
}

/// Create a published-only client pointing to a mock server.
pub fn client_with_mock(mock: &MockServer) -> DeliverClient {
    DeliverClient::with_config(client_config_with_mock(mock)).unwrap()
}

/// Create a client with a preview key pointing to a mock server.
pub fn preview_client_with_mock(mock: &MockServer) -> DeliverClient {
    DeliverClient::with_config(client_config_with_mock(mock).with_preview_key(PREVIEW_KEY))
        .unwrap()
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

/// Mock a success response whose body is not JSON.
pub async fn mock_invalid_json(server: &MockServer) {
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(server)
        .await;
}

/// All requests the mock server has seen so far.
pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled by default")
}
