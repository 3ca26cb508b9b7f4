//! Integration tests for the HTTP client functionality.
//!
//! These tests verify client configuration, request building, dispatch over
//! a wiremock server, response wrapping and error handling.

use retailcrm_api::clients::{ApiResponse, CallParameters, HttpClient, HttpMethod, HttpRequest};
use retailcrm_api::{ApiKey, HttpError, InvalidHttpRequestError};
use serde_json::json;
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(base_uri: &str) -> HttpClient {
    HttpClient::new(base_uri, "/api/v5", ApiKey::new("test-key").unwrap(), None)
}

// ============================================================================
// Integration Tests
// ============================================================================

#[tokio::test]
async fn test_get_dispatch_builds_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/orders"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":true}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, "orders")
        .param("limit", 50)
        .filter_fragment("filter[status]=new")
        .ids_fragment("ids[]=1")
        .build()
        .unwrap();

    let (code, body) = client.dispatch(&request).await.unwrap();
    assert_eq!(code, 200);
    assert_eq!(body, r#"{"success":true}"#);

    let received = server.received_requests().await.unwrap();
    assert_eq!(
        received[0].url.query(),
        Some("apiKey=test-key&limit=50&filter[status]=new&ids[]=1")
    );
}

#[tokio::test]
async fn test_post_dispatch_sends_form_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v5/orders/create"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let mut params = CallParameters::new();
    params.insert("order", r#"{"a":1}"#);
    let request = HttpRequest::builder(HttpMethod::Post, "orders/create")
        .params(params)
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 201);

    let received = server.received_requests().await.unwrap();
    assert_eq!(
        String::from_utf8_lossy(&received[0].body),
        "apiKey=test-key&order=%7B%22a%22%3A1%7D"
    );
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/reference/sites"))
        .and(header_exists("User-Agent"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, "reference/sites")
        .build()
        .unwrap();
    let response = client.request(request).await.unwrap();

    assert!(response.is_successful());
    assert!(client.default_headers()["User-Agent"].contains("RetailCRM API Library v"));
}

#[tokio::test]
async fn test_empty_url_fails_without_network_activity() {
    let client = create_test_client("");
    let request = HttpRequest::builder(HttpMethod::Get, "orders")
        .build()
        .unwrap();

    let result = client.request(request).await;
    assert!(matches!(result, Err(HttpError::EmptyUrl)));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let client = create_test_client("http://127.0.0.1:1");
    let request = HttpRequest::builder(HttpMethod::Get, "orders")
        .build()
        .unwrap();

    let result = client.request(request).await;
    assert!(matches!(result, Err(HttpError::Network(_))));
}

#[tokio::test]
async fn test_invalid_json_is_parse_error_with_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, "orders")
        .build()
        .unwrap();

    match client.request(request).await {
        Err(HttpError::Parse(e)) => {
            assert_eq!(e.code, 200);
            assert_eq!(e.body, "{not valid json}");
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_status_is_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v5/orders"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"success": false, "errorMsg": "Down"})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, "orders")
        .build()
        .unwrap();

    let response = client.request(request).await.unwrap();
    assert_eq!(response.code, 503);
    assert!(!response.is_successful());
}

#[test]
fn test_fragments_rejected_on_post() {
    let result = HttpRequest::builder(HttpMethod::Post, "orders/create")
        .ids_fragment("ids[]=1")
        .build();

    assert!(matches!(
        result,
        Err(InvalidHttpRequestError::UnexpectedFragment { .. })
    ));
}

#[test]
fn test_envelope_wrapping() {
    let response = ApiResponse::wrap(200, "").unwrap();
    assert_eq!(response.body, json!([]));

    let response = ApiResponse::wrap(460, r#"{"errorMsg":"Limit"}"#).unwrap();
    assert!(!response.is_successful());
    assert_eq!(response.get("errorMsg"), Some(&json!("Limit")));
}

#[test]
fn test_multiple_clients_are_independent() {
    let first = HttpClient::new(
        "https://one.retailcrm.ru",
        "/api/v5",
        ApiKey::new("key-1").unwrap(),
        None,
    );
    let second = HttpClient::new(
        "https://two.retailcrm.ru",
        "/api/v3",
        ApiKey::new("key-2").unwrap(),
        None,
    );

    let request = HttpRequest::builder(HttpMethod::Get, "orders")
        .build()
        .unwrap();

    assert_eq!(first.url_for("orders"), "https://one.retailcrm.ru/api/v5/orders");
    assert_eq!(second.url_for("orders"), "https://two.retailcrm.ru/api/v3/orders");
    assert_eq!(first.signed_params(&request).get("apiKey"), Some("key-1"));
    assert_eq!(second.signed_params(&request).get("apiKey"), Some("key-2"));
}
