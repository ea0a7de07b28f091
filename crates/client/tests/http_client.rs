//! Integration tests for the HTTP client core against a stub API.

use assert_matches::assert_matches;
use kiglist_client::http::{ApiError, HttpClient, RequestOptions};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ---------------------------------------------------------------------------
// Test: success responses are decoded and requests carry the JSON header
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_sends_json_content_type_and_decodes_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kigers"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "p1" }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri());
    let body: Value = client.fetch("/kigers", RequestOptions::get()).await.unwrap();

    assert_eq!(body, json!([{ "id": "p1" }]));
}

#[tokio::test]
async fn post_sends_serialized_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/kiger"))
        .and(body_json(json!({ "name": "Mika" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri());
    let options = RequestOptions::json(Method::POST, &json!({ "name": "Mika" })).unwrap();
    let body: Value = client.fetch("/kiger", options).await.unwrap();

    assert_eq!(body["message"], "ok");
}

#[tokio::test]
async fn caller_headers_override_defaults() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kigers"))
        .and(header("content-type", "text/plain"))
        .and(header("x-trace", "abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    headers.insert("x-trace", HeaderValue::from_static("abc"));
    let options = RequestOptions {
        headers,
        ..RequestOptions::get()
    };

    let client = HttpClient::new(server.uri());
    let body: Vec<Value> = client.fetch("/kigers", options).await.unwrap();
    assert!(body.is_empty());
}

// ---------------------------------------------------------------------------
// Test: authenticated variant attaches the bearer token
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_with_auth_adds_bearer_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/admin/pending/kigers"))
        .and(header("authorization", "Bearer secret-token"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri());
    let body: Vec<Value> = client
        .fetch_with_auth("/admin/pending/kigers", "secret-token", RequestOptions::get())
        .await
        .unwrap();
    assert!(body.is_empty());
}

// ---------------------------------------------------------------------------
// Test: non-2xx responses become status errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_with_body_uses_body_text_as_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/kiger/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Kiger not found"))
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri());
    let err = client
        .fetch::<Value>("/kiger/missing", RequestOptions::get())
        .await
        .unwrap_err();

    assert_matches!(err, ApiError::Status { status: 404, .. });
    assert_eq!(err.to_string(), "Kiger not found");
}

#[tokio::test]
async fn error_with_empty_body_names_the_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/makers"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri());
    let err = client
        .fetch::<Value>("/makers", RequestOptions::get())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(err.to_string().contains("503"), "got: {err}");
}

#[tokio::test]
async fn malformed_success_body_is_a_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/characters"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = HttpClient::new(server.uri());
    let err = client
        .fetch::<Vec<Value>>("/characters", RequestOptions::get())
        .await
        .unwrap_err();

    assert_matches!(err, ApiError::Request(_));
}
