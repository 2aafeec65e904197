use async_trait::async_trait;

use crate::{abstract_trait::BrandingApiTrait, model::branding::BrandingConfig, utils::AppError};

use super::parse_response;

#[derive(Debug, Clone)]
pub struct BrandingApi {
    http: reqwest::Client,
    base_url: String,
}

impl BrandingApi {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl BrandingApiTrait for BrandingApi {
    async fn get_branding(&self) -> Result<BrandingConfig, AppError> {
        let response = self
            .http
            .get(format!("{}/branding", self.base_url))
            .send()
            .await?;
        parse_response(response, "Branding").await
    }
}
