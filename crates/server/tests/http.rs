//! HTTP behavior tests, driving the router in-process

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use numconv_config::Settings;
use numconv_server::{create_router, AppState};
use serde_json::Value;
use tower::ServiceExt;

fn app() -> Router {
    create_router(AppState::new(Settings::default()))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(&app(), empty_request("GET", "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["max_value"], 999_999_999_999_999u64);
}

#[tokio::test]
async fn test_convert_post() {
    let request = json_request("POST", "/api/convert", serde_json::json!({ "input": "15 lakhs" }));
    let (status, body) = send(&app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], 1_500_000);
    assert_eq!(body["original"], "1,500,000");
    assert_eq!(body["words"], "one million five hundred thousand");
    assert_eq!(body["indian"], "fifteen lakh");
    assert_eq!(body["lakhs"], "15.00 lakhs");
    assert_eq!(body["crores"], "< 1 crore");
    assert_eq!(body["millions"], "1.50 million");
    assert_eq!(body["billions"], "< 1 billion");
}

#[tokio::test]
async fn test_convert_get_with_capitalize() {
    let uri = "/api/convert?input=40%20million&capitalize=true";
    let (status, body) = send(&app(), empty_request("GET", uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["words"], "Forty Million");
    assert_eq!(body["indian"], "Four Crore");
    assert_eq!(body["crores"], "4.00 crores");
}

#[tokio::test]
async fn test_convert_failure_carries_hint() {
    let request = json_request("POST", "/api/convert", serde_json::json!({ "input": "5 zorp" }));
    let (status, body) = send(&app(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "conversion_failed");
    assert_eq!(body["reason"], "unknown_unit");
    assert_eq!(
        body["hint"],
        "Please enter a valid number (e.g., 1000000, 15 lakhs, 40 million)"
    );
}

#[tokio::test]
async fn test_missing_query_input_is_empty() {
    let (status, body) = send(&app(), empty_request("GET", "/api/convert")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["reason"], "empty");
}

#[tokio::test]
async fn test_session_keeps_last_good_result() {
    let app = app();

    let (status, body) = send(&app, empty_request("POST", "/api/sessions")).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["session_id"].as_str().unwrap().to_string();

    let input_uri = format!("/api/sessions/{}/input", id);
    let convert_uri = format!("/api/sessions/{}/convert", id);
    let session_uri = format!("/api/sessions/{}", id);

    let (status, _) = send(
        &app,
        json_request("PUT", &input_uri, serde_json::json!({ "input": "2.5 million" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, empty_request("POST", &convert_uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], 2_500_000);

    let (_, _) = send(
        &app,
        json_request("PUT", &input_uri, serde_json::json!({ "input": "abc" })),
    )
    .await;
    let (status, body) = send(&app, empty_request("POST", &convert_uri)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["hint"].is_string());

    let (status, body) = send(&app, empty_request("GET", &session_uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"], "abc");
    assert_eq!(body["result"]["value"], 2_500_000);
    assert_eq!(body["result"]["original"], "2,500,000");
}

#[tokio::test]
async fn test_session_input_is_sanitized() {
    let app = app();
    let (_, body) = send(&app, empty_request("POST", "/api/sessions")).await;
    let id = body["session_id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        json_request(
            "PUT",
            &format!("/api/sessions/{}/input", id),
            serde_json::json!({ "input": "15$ lakhs!" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"], "15 lakhs");
    assert!(body["result"].is_null());
}

#[tokio::test]
async fn test_session_lifecycle() {
    let app = app();
    let (_, body) = send(&app, empty_request("POST", "/api/sessions")).await;
    let id = body["session_id"].as_str().unwrap().to_string();

    let (_, body) = send(&app, empty_request("GET", "/api/sessions")).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["sessions"][0], id.as_str());

    let (status, _) = send(&app, empty_request("DELETE", &format!("/api/sessions/{}", id))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, empty_request("GET", &format!("/api/sessions/{}", id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "session_not_found");
}

#[tokio::test]
async fn test_session_limit() {
    let mut settings = Settings::default();
    settings.sessions.max_sessions = 1;
    let app = create_router(AppState::new(settings));

    let (status, _) = send(&app, empty_request("POST", "/api/sessions")).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, body) = send(&app, empty_request("POST", "/api/sessions")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "session_limit");
}

#[tokio::test]
async fn test_metrics_disabled_without_recorder() {
    let response = app()
        .oneshot(empty_request("GET", "/metrics"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/convert")
        .header("content-type", "application/json")
        .body(Body::from("{\"input\": "))
        .unwrap();
    let (status, body) = send(&app(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");
    assert!(body["message"].as_str().unwrap().starts_with("Invalid request"));
}

#[tokio::test]
async fn test_missing_input_field_is_json_error() {
    let request = json_request("POST", "/api/convert", serde_json::json!({ "text": "5" }));
    let (status, body) = send(&app(), request).await;

    assert!(status.is_client_error());
    assert_eq!(body["error"], "invalid_request");
}

#[tokio::test]
async fn test_bad_query_flag_is_json_error() {
    let uri = "/api/convert?input=5&capitalize=maybe";
    let (status, body) = send(&app(), empty_request("GET", uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");
}

#[tokio::test]
async fn test_reload_config_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(Settings::default()).with_config_dir(dir.path());
    let app = create_router(state);

    std::fs::write(
        dir.path().join("default.yaml"),
        "converter:\n  max_value: 1000000\n",
    )
    .unwrap();
    let (status, body) = send(&app, empty_request("POST", "/admin/reload-config")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["max_value"], 1_000_000);

    let request = json_request("POST", "/api/convert", serde_json::json!({ "input": "2 million" }));
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["reason"], "out_of_range");

    std::fs::write(dir.path().join("default.yaml"), "converter:\n  max_value: 0\n").unwrap();
    let (status, body) = send(&app, empty_request("POST", "/admin/reload-config")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal");

    // The previous limit still applies
    let request = json_request("POST", "/api/convert", serde_json::json!({ "input": "10 lakh" }));
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["value"], 1_000_000);
}
