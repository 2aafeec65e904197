mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::json;
use tower::ServiceExt;

use common::{create_test_app, read_json};

fn capture(token: &str, url: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/referral/capture")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "url": url }).to_string()))
        .unwrap()
}

fn referral(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn capture_strips_ref_and_keeps_other_params() {
    let app = create_test_app(vec![]);

    let response = app
        .router
        .oneshot(capture(
            &app.user_token,
            "https://app.example.com/cabinet?ref=ABC123&utm_source=tg#main",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["data"]["captured"], true);
    assert_eq!(body["data"]["code"], "ABC123");
    assert_eq!(
        body["data"]["cleaned_url"],
        "https://app.example.com/cabinet?utm_source=tg#main"
    );
}

#[tokio::test]
async fn capture_without_ref_is_a_no_op() {
    let app = create_test_app(vec![]);

    let response = app
        .router
        .oneshot(capture(
            &app.user_token,
            "https://app.example.com/cabinet?utm_source=tg",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["data"]["captured"], false);
    assert_eq!(body["data"]["code"], serde_json::Value::Null);
}

#[tokio::test]
async fn captured_code_is_consumed_at_most_once() {
    let app = create_test_app(vec![]);

    let response = app
        .router
        .clone()
        .oneshot(capture(
            &app.user_token,
            "https://app.example.com/?ref=FRIEND-1",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Pending does not remove the code.
    let response = app
        .router
        .clone()
        .oneshot(referral("GET", "/api/referral/pending", &app.user_token))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body["data"]["code"], "FRIEND-1");

    // First consume returns it, the second finds nothing.
    let response = app
        .router
        .clone()
        .oneshot(referral("POST", "/api/referral/consume", &app.user_token))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body["data"]["code"], "FRIEND-1");

    let response = app
        .router
        .oneshot(referral("POST", "/api/referral/consume", &app.user_token))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body["data"]["code"], serde_json::Value::Null);
}

#[tokio::test]
async fn codes_are_scoped_to_the_visitor() {
    let app = create_test_app(vec![]);

    let response = app
        .router
        .clone()
        .oneshot(capture(
            &app.user_token,
            "https://app.example.com/?ref=MINE-9",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .router
        .oneshot(referral("GET", "/api/referral/pending", &app.admin_token))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body["data"]["code"], serde_json::Value::Null);
}

#[tokio::test]
async fn referral_routes_require_a_token() {
    let app = create_test_app(vec![]);

    let request = Request::builder()
        .method("GET")
        .uri("/api/referral/pending")
        .body(Body::empty())
        .unwrap();

    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
