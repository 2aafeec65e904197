use crate::{
    middleware::{AuthUser, jwt},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use shared::domain::{
    request::CaptureReferralRequest,
    response::{
        ApiResponse,
        referral::{CaptureReferralResponse, ReferralCodeResponse},
    },
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/referral/capture",
    tag = "Referral",
    security(
        ("bearer_auth" = [])
    ),
    request_body = CaptureReferralRequest,
    responses(
        (status = 200, description = "Capture outcome with the cleaned URL", body = ApiResponse<CaptureReferralResponse>),
        (status = 401, description = "Unauthorized access", body = String),
    )
)]
pub async fn capture_referral(
    State(data): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CaptureReferralRequest>,
) -> impl IntoResponse {
    let visitor_id = user.user_id.to_string();
    let captured = data
        .di_container
        .referral_service
        .capture_from_url(&visitor_id, &body.url);

    let response = ApiResponse {
        status: "success".to_string(),
        message: "Referral capture processed".to_string(),
        data: CaptureReferralResponse::from(captured),
    };

    (StatusCode::OK, Json(json!(response)))
}

#[utoipa::path(
    get,
    path = "/api/referral/pending",
    tag = "Referral",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Pending referral code if one is stored and unexpired", body = ApiResponse<ReferralCodeResponse>),
        (status = 401, description = "Unauthorized access", body = String),
    )
)]
pub async fn pending_referral(
    State(data): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> impl IntoResponse {
    let visitor_id = user.user_id.to_string();
    let code = data.di_container.referral_service.pending(&visitor_id);

    let response = ApiResponse {
        status: "success".to_string(),
        message: "Pending referral code retrieved".to_string(),
        data: ReferralCodeResponse { code },
    };

    (StatusCode::OK, Json(json!(response)))
}

#[utoipa::path(
    post,
    path = "/api/referral/consume",
    tag = "Referral",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Referral code handed out and removed", body = ApiResponse<ReferralCodeResponse>),
        (status = 401, description = "Unauthorized access", body = String),
    )
)]
pub async fn consume_referral(
    State(data): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> impl IntoResponse {
    let visitor_id = user.user_id.to_string();
    let code = data.di_container.referral_service.consume(&visitor_id);

    let response = ApiResponse {
        status: "success".to_string(),
        message: "Referral code consumed".to_string(),
        data: ReferralCodeResponse { code },
    };

    (StatusCode::OK, Json(json!(response)))
}

pub fn referral_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/referral/capture", post(capture_referral))
        .route("/api/referral/pending", get(pending_referral))
        .route("/api/referral/consume", post(consume_referral))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), jwt::auth))
        .with_state(app_state.clone())
}
