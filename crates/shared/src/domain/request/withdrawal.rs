use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Serialize, Deserialize, Clone, Debug, IntoParams)]
pub struct FindAllWithdrawalsRequest {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    /// Status slug filter; validated against the five real states.
    #[serde(default)]
    pub status: Option<String>,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateWithdrawalRequest {
    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount_kopeks: i64,

    #[validate(length(min = 5, message = "Payment details must be at least 5 characters"))]
    pub payment_details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RejectWithdrawalRequest {
    pub comment: Option<String>,
}
