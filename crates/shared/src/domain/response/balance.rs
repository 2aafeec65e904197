use crate::model::balance::Balance;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BalanceResponse {
    pub user_id: i64,
    pub balance_kopeks: i64,
}

impl From<Balance> for BalanceResponse {
    fn from(value: Balance) -> Self {
        BalanceResponse {
            user_id: value.user_id,
            balance_kopeks: value.balance_kopeks,
        }
    }
}
