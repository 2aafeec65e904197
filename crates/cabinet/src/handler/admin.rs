use crate::{
    handler::error_status,
    middleware::jwt,
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use shared::domain::{
    request::{FindAllWithdrawalsRequest, RejectWithdrawalRequest},
    response::{
        ApiResponse, ApiResponsePagination,
        withdrawal::{WithdrawalDetailResponse, WithdrawalResponse},
    },
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/admin/withdrawals",
    tag = "Admin",
    security(
        ("bearer_auth" = [])
    ),
    params(FindAllWithdrawalsRequest),
    responses(
        (status = 200, description = "Paginated withdrawal list", body = ApiResponsePagination<Vec<WithdrawalResponse>>),
        (status = 400, description = "Unknown status filter", body = String),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 403, description = "Admin role required", body = String),
        (status = 502, description = "Upstream API error", body = String),
    )
)]
pub async fn get_withdrawals(
    State(data): State<Arc<AppState>>,
    Query(params): Query<FindAllWithdrawalsRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data
        .di_container
        .withdrawal_service
        .get_withdrawals(&params)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((error_status(&e), Json(json!(e)))),
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/withdrawals/{id}",
    tag = "Admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Withdrawal detail with presentation hints", body = ApiResponse<WithdrawalDetailResponse>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 403, description = "Admin role required", body = String),
        (status = 404, description = "Withdrawal not found", body = String),
        (status = 502, description = "Upstream API error", body = String),
    )
)]
pub async fn get_withdrawal(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data.di_container.withdrawal_service.get_withdrawal(id).await {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((error_status(&e), Json(json!(e)))),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/withdrawals/{id}/approve",
    tag = "Admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Withdrawal approved", body = ApiResponse<WithdrawalDetailResponse>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 403, description = "Admin role required", body = String),
        (status = 404, description = "Withdrawal not found", body = String),
        (status = 502, description = "Upstream API error", body = String),
    )
)]
pub async fn approve_withdrawal(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data
        .di_container
        .withdrawal_service
        .approve_withdrawal(id)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((error_status(&e), Json(json!(e)))),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/withdrawals/{id}/reject",
    tag = "Admin",
    security(
        ("bearer_auth" = [])
    ),
    request_body = RejectWithdrawalRequest,
    responses(
        (status = 200, description = "Withdrawal rejected", body = ApiResponse<WithdrawalDetailResponse>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 403, description = "Admin role required", body = String),
        (status = 404, description = "Withdrawal not found", body = String),
        (status = 502, description = "Upstream API error", body = String),
    )
)]
pub async fn reject_withdrawal(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(body): Json<RejectWithdrawalRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data
        .di_container
        .withdrawal_service
        .reject_withdrawal(id, body.comment.as_deref())
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((error_status(&e), Json(json!(e)))),
    }
}

#[utoipa::path(
    post,
    path = "/api/admin/withdrawals/{id}/complete",
    tag = "Admin",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Withdrawal marked as paid out", body = ApiResponse<WithdrawalDetailResponse>),
        (status = 401, description = "Unauthorized access", body = String),
        (status = 403, description = "Admin role required", body = String),
        (status = 404, description = "Withdrawal not found", body = String),
        (status = 502, description = "Upstream API error", body = String),
    )
)]
pub async fn complete_withdrawal(
    State(data): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data
        .di_container
        .withdrawal_service
        .complete_withdrawal(id)
        .await
    {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((error_status(&e), Json(json!(e)))),
    }
}

pub fn admin_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/admin/withdrawals", get(get_withdrawals))
        .route("/api/admin/withdrawals/{id}", get(get_withdrawal))
        .route(
            "/api/admin/withdrawals/{id}/approve",
            post(approve_withdrawal),
        )
        .route(
            "/api/admin/withdrawals/{id}/reject",
            post(reject_withdrawal),
        )
        .route(
            "/api/admin/withdrawals/{id}/complete",
            post(complete_withdrawal),
        )
        .route_layer(middleware::from_fn(jwt::require_admin))
        .route_layer(middleware::from_fn_with_state(app_state.clone(), jwt::auth))
        .with_state(app_state.clone())
}
