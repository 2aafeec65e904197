mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::json;
use tower::ServiceExt;

use common::{create_test_app, read_json, seeded_withdrawal};

fn authed(method: &str, uri: &str, token: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .header(header::CONTENT_TYPE, "application/json");
    match body {
        Some(value) => builder.body(Body::from(value.to_string())).unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

#[tokio::test]
async fn balance_returns_the_callers_account() {
    let app = create_test_app(vec![]);

    let response = app
        .router
        .oneshot(authed("GET", "/api/withdrawals/balance", &app.user_token, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["data"]["user_id"], 2);
    assert_eq!(body["data"]["balance_kopeks"], 250_000);
}

#[tokio::test]
async fn creating_a_withdrawal_returns_the_pending_record() {
    let app = create_test_app(vec![]);

    let response = app
        .router
        .clone()
        .oneshot(authed(
            "POST",
            "/api/withdrawals",
            &app.user_token,
            Some(json!({
                "amount_kopeks": 50_000,
                "payment_details": "4276 1234 5678 9000"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["user_id"], 2);

    // The new request shows up in the caller's history.
    let response = app
        .router
        .oneshot(authed("GET", "/api/withdrawals", &app.user_token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_create_payload_is_a_bad_request() {
    let app = create_test_app(vec![]);

    let response = app
        .router
        .oneshot(authed(
            "POST",
            "/api/withdrawals",
            &app.user_token,
            Some(json!({
                "amount_kopeks": 0,
                "payment_details": "1234"
            })),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["status"], "validation_error");
}

#[tokio::test]
async fn history_only_shows_the_callers_withdrawals() {
    let app = create_test_app(vec![seeded_withdrawal()]);

    let response = app
        .router
        .oneshot(authed("GET", "/api/withdrawals", &app.admin_token, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    // The seeded record belongs to user 2, not to the admin (user 1).
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn branding_is_public_and_carries_accent_styles() {
    let app = create_test_app(vec![]);

    let request = Request::builder()
        .method("GET")
        .uri("/api/branding")
        .body(Body::empty())
        .unwrap();

    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["data"]["service_name"], "Test VPN");
    assert_eq!(body["data"]["accent_rgb"], json!([34, 211, 238]));
    assert!(
        body["data"]["card_style"]["background"]
            .as_str()
            .unwrap()
            .starts_with("linear-gradient(135deg,")
    );
}

#[tokio::test]
async fn health_answers_without_a_token() {
    let app = create_test_app(vec![]);

    let request = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
