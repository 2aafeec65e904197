use std::sync::Arc;

use crate::{config::Claims, utils::AppError};

pub type DynJwtService = Arc<dyn JwtServiceTrait + Send + Sync>;

pub trait JwtServiceTrait {
    fn generate_token(&self, user_id: i64, role: &str) -> Result<String, AppError>;
    fn verify_token(&self, token: &str) -> Result<Claims, AppError>;
}
