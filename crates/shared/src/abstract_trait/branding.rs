use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::response::{ApiResponse, ErrorResponse, branding::BrandingResponse},
    model::branding::BrandingConfig,
    utils::AppError,
};

pub type DynBrandingApi = Arc<dyn BrandingApiTrait + Send + Sync>;
pub type DynBrandingService = Arc<dyn BrandingServiceTrait + Send + Sync>;

#[async_trait]
pub trait BrandingApiTrait {
    async fn get_branding(&self) -> Result<BrandingConfig, AppError>;
}

#[async_trait]
pub trait BrandingServiceTrait {
    async fn get_branding(&self) -> Result<ApiResponse<BrandingResponse>, ErrorResponse>;
}
