//! Integration tests for configuration loading
//!
//! Tests the end-to-end path from a config file to a working client.

use std::io::Write;

use promohub_domain::SessionBackend;
use promohub_infra::{config, ClientContext};
use serde_json::json;
use tempfile::Builder;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_load_config_from_toml_file_applies_defaults() {
    let toml_content = r#"
[api]
base_url = "https://api.promohub.example"
timeout_secs = 15
"#;

    let mut temp_file = Builder::new().suffix(".toml").tempfile().expect("Failed to create temp file");
    temp_file.write_all(toml_content.as_bytes()).expect("Failed to write to temp file");

    let config = config::load_from_file(Some(temp_file.path().to_path_buf())).unwrap();

    assert_eq!(config.api.base_url, "https://api.promohub.example");
    assert_eq!(config.api.timeout_secs, Some(15));
    assert_eq!(config.api.proxy_target, None);
    assert_eq!(config.session.backend, SessionBackend::File);
    assert_eq!(config.session.storage_key, "promohub.session");
    assert_eq!(config.logging.filter, "info");
    assert!(!config.logging.json);
}

#[test]
fn test_invalid_backend_in_file_is_rejected() {
    let json_content = r#"{ "api": { "base_url": "http://x" }, "session": { "backend": "cloud" } }"#;

    let mut temp_file = Builder::new().suffix(".json").tempfile().expect("Failed to create temp file");
    temp_file.write_all(json_content.as_bytes()).expect("Failed to write to temp file");

    let err = config::load_from_file(Some(temp_file.path().to_path_buf())).unwrap_err();
    assert!(err.to_string().contains("Invalid JSON format"));
}

#[tokio::test]
async fn test_client_built_from_json_file_reaches_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/promotions/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"id": 3, "title": "Half price", "discountType": "PERCENTAGE", "discountValue": 50.0}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let json_content = json!({
        "api": { "base_url": server.uri() },
        "session": { "backend": "memory" },
        "logging": { "filter": "promohub=debug", "json": true }
    });
    let mut temp_file = Builder::new().suffix(".json").tempfile().expect("Failed to create temp file");
    temp_file.write_all(json_content.to_string().as_bytes()).expect("Failed to write to temp file");

    let config = config::load_from_file(Some(temp_file.path().to_path_buf())).unwrap();
    assert_eq!(config.session.backend, SessionBackend::Memory);
    assert!(config.logging.json);

    let context = ClientContext::from_config(&config).unwrap();
    let promotion = context.api.get_promotion(3).await.unwrap();
    assert_eq!(promotion.title, "Half price");
    assert!(!context.api.is_authenticated());
}
