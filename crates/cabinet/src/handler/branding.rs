use crate::{handler::error_status, state::AppState};
use axum::{
    Json, extract::State, http::StatusCode, response::IntoResponse, routing::get,
};
use serde_json::json;
use shared::domain::response::{ApiResponse, branding::BrandingResponse};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/branding",
    tag = "Branding",
    responses(
        (status = 200, description = "Branding with precomputed accent styles", body = ApiResponse<BrandingResponse>),
        (status = 502, description = "Upstream API error", body = String),
    )
)]
pub async fn get_branding(
    State(data): State<Arc<AppState>>,
) -> Result<impl IntoResponse, (StatusCode, Json<serde_json::Value>)> {
    match data.di_container.branding_service.get_branding().await {
        Ok(response) => Ok((StatusCode::OK, Json(json!(response)))),
        Err(e) => Err((error_status(&e), Json(json!(e)))),
    }
}

pub fn branding_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/branding", get(get_branding))
        .with_state(app_state)
}
