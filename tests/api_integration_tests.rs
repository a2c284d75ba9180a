use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::Service;

use json_reply::api::routes::create_router;

// Helper to send request and parse JSON response
async fn send_request(
    app: &mut axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.call(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let parsed: Value = serde_json::from_slice(&bytes).unwrap_or(json!({}));

    (status, parsed)
}

#[tokio::test]
async fn test_get_profile_returns_payload() {
    let mut app = create_router();
    let (status, body) = send_request(&mut app, "GET", "/profile", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Example Name");
}

#[tokio::test]
async fn test_post_profile_echoes_valid_body() {
    let mut app = create_router();
    let (status, body) =
        send_request(&mut app, "POST", "/profile", Some(json!({"name": "Ada"}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ada");
}

#[tokio::test]
async fn test_post_profile_blank_name_yields_field_errors() {
    let mut app = create_router();
    let (status, body) =
        send_request(&mut app, "POST", "/profile", Some(json!({"name": ""}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
    assert_eq!(body["message"], "Invalid Request");
    assert_eq!(body["errors"], json!({"name": ["name is required"]}));
    assert_eq!(body["path"], "/profile");
}

#[tokio::test]
async fn test_post_profile_malformed_body() {
    let mut app = create_router();
    let request = Request::builder()
        .method("POST")
        .uri("/profile")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["code"], 400);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("badly-formed JSON"));
    assert_eq!(body["errors"], json!({}));
    assert_eq!(body["path"], "/profile");
    assert!(body.get("timestamp").is_some());
}

#[tokio::test]
async fn test_post_profile_empty_body() {
    let mut app = create_router();
    let request = Request::builder()
        .method("POST")
        .uri("/profile")
        .header("content-type", "application/json")
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "Request body must not be empty");
}

#[tokio::test]
async fn test_delete_profile_no_content() {
    let mut app = create_router();
    let request = Request::builder()
        .method("DELETE")
        .uri("/profile")
        .body(Body::empty())
        .unwrap();

    let response = app.call(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn test_unknown_route_gets_error_envelope() {
    let mut app = create_router();
    let (status, body) = send_request(&mut app, "GET", "/missing?q=1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "resource not found");
    assert_eq!(body["path"], "/missing?q=1");
}
