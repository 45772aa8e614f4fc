/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for proxyhat-client tests

#![allow(dead_code)]

use proxyhat_client::{ClientConfig, ProxyhatClient};
use serde_json::{Value, json};
use wiremock::{MockServer, ResponseTemplate};

pub const TEST_API_KEY: &str = "test-api-key";

/// Start a mock server and a client pointed at it
pub async fn setup_test() -> (MockServer, ProxyhatClient) {
    let server = MockServer::start().await;
    let client = client_for(&server);
    (server, client)
}

pub fn client_for(server: &MockServer) -> ProxyhatClient {
    let config = ClientConfig::default().with_base_url(server.uri());
    ProxyhatClient::with_config(TEST_API_KEY, config).expect("client init")
}

/// 200 response wrapping `value` in a `payload` envelope
pub fn payload(value: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "payload": value }))
}

/// 200 response wrapping `value` in a `data` envelope
pub fn data(value: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": value }))
}
