#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use kiglist_core::locale::LocaleSet;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kiglist_web::config::WebConfig;
use kiglist_web::router::build_app_router;
use kiglist_web::state::AppState;

pub const SITE_URL: &str = "https://kiglist.com";

/// Build a test `WebConfig` pointing at a stub API.
pub fn test_config(api_base_url: &str) -> WebConfig {
    WebConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upstream_timeout_secs: 5,
        api_base_url: api_base_url.to_string(),
        site_url: SITE_URL.to_string(),
        locales: LocaleSet::default(),
    }
}

/// Build the full application router (same middleware stack as production)
/// against the stub API at `api_base_url`.
pub fn build_test_app(api_base_url: &str) -> Router {
    build_app_router(AppState::new(test_config(api_base_url)))
}

/// Issue a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Stub API fixtures
// ---------------------------------------------------------------------------

pub fn kiger_json() -> Value {
    json!({
        "id": "p1",
        "name": "Mika",
        "bio": "Kigurumi performer",
        "profileImage": "https://img/p1.png",
        "isActive": true,
        "socialMedia": { "twitter": "https://x.com/mika", "instagram": null },
        "createdAt": "2024-01-01",
        "updatedAt": "2024-02-01"
    })
}

pub fn character_json() -> Value {
    json!({
        "id": 2,
        "name": "Aqua",
        "originalName": "アクア",
        "type": "anime",
        "officialImage": "https://img/2.png",
        "source": { "title": "Konosuba", "company": "Kadokawa", "releaseYear": 2016 }
    })
}

pub fn maker_json() -> Value {
    json!({
        "id": 3,
        "name": "Studio Kig",
        "originalName": "スタジオ",
        "Avatar": "https://img/3.png",
        "socialMedia": null
    })
}

/// Mount `GET {route}` answering 200 with `body`.
pub async fn stub_ok(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount `GET {route}` answering with `status` and an empty body.
pub async fn stub_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Stub all three listings with one entity each.
pub async fn stub_listings(server: &MockServer) {
    stub_ok(server, "/kigers", json!([kiger_json()])).await;
    stub_ok(server, "/characters", json!([character_json()])).await;
    stub_ok(server, "/makers", json!([maker_json()])).await;
}
