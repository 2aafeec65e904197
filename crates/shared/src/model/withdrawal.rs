use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Withdrawal lifecycle as owned by the upstream API. Created as
/// `Pending`; an admin moves it to `Approved` or `Rejected`, and an
/// `Approved` request to `Completed`. `Cancelled` is reachable from
/// `Pending` by the requester. `Rejected`, `Completed` and `Cancelled`
/// are terminal.
///
/// `Unknown` absorbs any status string a newer upstream may emit;
/// classification must never fail on unexpected server data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl WithdrawalStatus {
    pub fn as_slug(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pending => "pending",
            WithdrawalStatus::Approved => "approved",
            WithdrawalStatus::Rejected => "rejected",
            WithdrawalStatus::Completed => "completed",
            WithdrawalStatus::Cancelled => "cancelled",
            WithdrawalStatus::Unknown => "unknown",
        }
    }

    /// Strict parse for list filters: only the five real states match.
    pub fn from_slug(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(WithdrawalStatus::Pending),
            "approved" => Some(WithdrawalStatus::Approved),
            "rejected" => Some(WithdrawalStatus::Rejected),
            "completed" => Some(WithdrawalStatus::Completed),
            "cancelled" => Some(WithdrawalStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_slug())
    }
}

/// Server-computed risk classification. Independent axis from
/// `risk_score`: the upstream derives neither from the other in any way
/// visible to us, so we render both as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

impl RiskLevel {
    pub fn as_slug(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
            RiskLevel::Unknown => "unknown",
        }
    }
}

/// Read model of an upstream withdrawal record. Amounts are in kopeks
/// (minor currency units). `processed_at` stays unset until the request
/// leaves `Pending`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Withdrawal {
    pub id: i64,
    pub user_id: i64,
    pub status: WithdrawalStatus,
    pub amount_kopeks: i64,
    pub risk_score: i64,
    pub risk_level: RiskLevel,
    pub payment_details: String,
    pub admin_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
}
