use crate::{
    handler::error_status,
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
    request::CreateWithdrawalRequest,
    response::{ApiResponse, balance::BalanceResponse, withdrawal::WithdrawalResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/withdrawals/balance",
    tag = "Withdrawal",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Current balance of the caller", body = ApiResponse<BalanceResponse>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 502, description = "Upstream API error", body = String),
    )
)]
pub async fn get_balance(
    State(data): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data
        .di_container
        .withdrawal_service
        .get_balance(user.user_id)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((error_status(&e), Json(json!(e)))),
    }
}

#[utoipa::path(
    post,
    path = "/api/withdrawals",
    tag = "Withdrawal",
    security(
        ("bearer_auth" = [])
    ),
    request_body = CreateWithdrawalRequest,
    responses(
        (status = 201, description = "Withdrawal request created successfully", body = ApiResponse<WithdrawalResponse>),
        (status = 400, description = "Invalid payload", body = String),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 502, description = "Upstream API error", body = String),
    )
)]
pub async fn create_withdrawal(
    State(data): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(body): Json<CreateWithdrawalRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data
        .di_container
        .withdrawal_service
        .create_withdrawal(user.user_id, &body)
        .await
    {
        Ok(response) => Ok((StatusCode::CREATED, Json(json!(response)))),
        Err(e) => Err((error_status(&e), Json(json!(e)))),
    }
}

#[utoipa::path(
    get,
    path = "/api/withdrawals",
    tag = "Withdrawal",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Withdrawal history of the caller", body = ApiResponse<Vec<WithdrawalResponse>>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 502, description = "Upstream API error", body = String),
    )
)]
pub async fn get_my_withdrawals(
    State(data): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data
        .di_container
        .withdrawal_service
        .get_user_withdrawals(user.user_id)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((error_status(&e), Json(json!(e)))),
    }
}

pub fn withdrawal_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/withdrawals/balance", get(get_balance))
        .route("/api/withdrawals", post(create_withdrawal))
        .route("/api/withdrawals", get(get_my_withdrawals))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), jwt::auth))
        .with_state(app_state.clone())
}
