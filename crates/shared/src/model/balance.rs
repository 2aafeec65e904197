use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    pub user_id: i64,
    pub balance_kopeks: i64,
}
