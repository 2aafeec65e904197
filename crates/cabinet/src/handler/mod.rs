mod admin;
mod branding;
mod referral;
mod withdrawal;

use crate::state::AppState;
use anyhow::Result;
use axum::Json;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::json;
use shared::domain::response::ErrorResponse;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::SecurityScheme;
use utoipa::{Modify, OpenApi};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::admin::admin_routes;
pub use self::branding::branding_routes;
pub use self::referral::referral_routes;
pub use self::withdrawal::withdrawal_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        withdrawal::get_balance,
        withdrawal::create_withdrawal,
        withdrawal::get_my_withdrawals,
        admin::get_withdrawals,
        admin::get_withdrawal,
        admin::approve_withdrawal,
        admin::reject_withdrawal,
        admin::complete_withdrawal,
        referral::capture_referral,
        referral::pending_referral,
        referral::consume_referral,
        branding::get_branding
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Withdrawal", description = "Balance and withdrawal endpoints for the signed-in user"),
        (name = "Admin", description = "Withdrawal moderation endpoints"),
        (name = "Referral", description = "Referral code capture endpoints"),
        (name = "Branding", description = "Public branding endpoint")
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

/// Maps the service error taxonomy onto HTTP status codes.
pub fn error_status(error: &ErrorResponse) -> StatusCode {
    match error.status.as_str() {
        "not_found" => StatusCode::NOT_FOUND,
        "validation_error" => StatusCode::BAD_REQUEST,
        "unauthorized" => StatusCode::UNAUTHORIZED,
        "forbidden" => StatusCode::FORBIDDEN,
        "upstream_error" => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> axum::Router {
        let shared_state = Arc::new(app_state);

        let mut router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/health", get(health_handler))
            .with_state(shared_state.clone());

        router = router.merge(withdrawal_routes(shared_state.clone()));
        router = router.merge(admin_routes(shared_state.clone()));
        router = router.merge(referral_routes(shared_state.clone()));
        router = router.merge(branding_routes(shared_state.clone()));

        let router = router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024))
            .layer(TraceLayer::new_for_http());

        let (router, api) = router.split_for_parts();

        router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("Server running on http://{}", listener.local_addr()?);
        println!("API Documentation available at:");
        println!("- Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app).await?;
        Ok(())
    }
}
