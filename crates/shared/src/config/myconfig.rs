use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_api_url: String,
    pub jwt_secret: String,
    pub redis_url: String,
    pub port: u16,
    pub default_language: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        let backend_api_url = std::env::var("BACKEND_API_URL")
            .context("Missing environment variable: BACKEND_API_URL")?;

        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;

        let redis_url =
            std::env::var("REDIS_URL").context("Missing environment variable: REDIS_URL")?;

        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let default_language =
            std::env::var("DEFAULT_LANGUAGE").unwrap_or_else(|_| "ru".to_string());

        Ok(Self {
            backend_api_url,
            jwt_secret,
            redis_url,
            port,
            default_language,
        })
    }
}
