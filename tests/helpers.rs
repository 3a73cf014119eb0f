// Shared test helpers for mock endpoints and run configuration.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use web_status_checker::{Config, LogLevel};

/// Returns an address on localhost with nothing listening, so connecting is refused.
#[allow(dead_code)] // Not every test file uses every helper
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe port");
    let port = listener
        .local_addr()
        .expect("Failed to read probe port")
        .port();
    drop(listener);
    format!("http://127.0.0.1:{port}/")
}

/// Mounts a GET endpoint at `route` answering `status` after `delay`.
#[allow(dead_code)]
pub async fn mount_endpoint(server: &MockServer, route: &str, status: u16, delay: Duration) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_delay(delay))
        .mount(server)
        .await;
}

/// Builds a quiet config that checks exactly `urls`.
#[allow(dead_code)]
pub fn config_for(urls: Vec<String>) -> Config {
    Config {
        urls,
        log_level: LogLevel::Error,
        ..Default::default()
    }
}
