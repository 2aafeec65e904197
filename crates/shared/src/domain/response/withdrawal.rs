use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    model::withdrawal::{RiskLevel, Withdrawal, WithdrawalStatus},
    present::{
        RiskPalette, StatusBadge, available_actions, risk_bar_width, risk_color,
        risk_level_color, status_badge,
    },
    utils::format_datetime,
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WithdrawalResponse {
    pub id: i64,
    pub user_id: i64,
    pub status: WithdrawalStatus,
    pub amount_kopeks: i64,
    pub risk_score: i64,
    pub risk_level: RiskLevel,
    pub payment_details: String,
    pub admin_comment: Option<String>,
    #[schema(format = "date-time")]
    pub created_at: DateTime<Utc>,
    #[schema(format = "date-time")]
    pub processed_at: Option<DateTime<Utc>>,
}

impl From<Withdrawal> for WithdrawalResponse {
    fn from(value: Withdrawal) -> Self {
        WithdrawalResponse {
            id: value.id,
            user_id: value.user_id,
            status: value.status,
            amount_kopeks: value.amount_kopeks,
            risk_score: value.risk_score,
            risk_level: value.risk_level,
            payment_details: value.payment_details,
            admin_comment: value.admin_comment,
            created_at: value.created_at,
            processed_at: value.processed_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusBadgeResponse {
    pub label_key: String,
    pub text_class: String,
    pub background_class: String,
}

impl From<StatusBadge> for StatusBadgeResponse {
    fn from(value: StatusBadge) -> Self {
        StatusBadgeResponse {
            label_key: value.label_key.to_string(),
            text_class: value.text_class.to_string(),
            background_class: value.background_class.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RiskPaletteResponse {
    pub text_class: String,
    pub background_class: String,
    pub bar_class: String,
}

impl From<RiskPalette> for RiskPaletteResponse {
    fn from(value: RiskPalette) -> Self {
        RiskPaletteResponse {
            text_class: value.text_class.to_string(),
            background_class: value.background_class.to_string(),
            bar_class: value.bar_class.to_string(),
        }
    }
}

/// Admin detail view: the raw record plus everything the screen needs
/// pre-classified, so the frontend renders without its own rules.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WithdrawalDetailResponse {
    pub withdrawal: WithdrawalResponse,
    pub badge: StatusBadgeResponse,
    pub risk: RiskPaletteResponse,
    pub risk_bar_width: u8,
    pub risk_level_colors: RiskPaletteResponse,
    pub actions: Vec<String>,
    pub created_at_label: String,
    pub processed_at_label: String,
}

impl WithdrawalDetailResponse {
    pub fn build(withdrawal: Withdrawal, lang: &str) -> Self {
        let badge = status_badge(withdrawal.status).into();
        let risk = risk_color(withdrawal.risk_score).into();
        let risk_level_colors = risk_level_color(withdrawal.risk_level).into();
        let actions = available_actions(withdrawal.status)
            .iter()
            .map(|action| action.as_slug().to_string())
            .collect();
        let created_at_label = format_datetime(Some(withdrawal.created_at), lang);
        let processed_at_label = format_datetime(withdrawal.processed_at, lang);

        WithdrawalDetailResponse {
            risk_bar_width: risk_bar_width(withdrawal.risk_score),
            withdrawal: WithdrawalResponse::from(withdrawal),
            badge,
            risk,
            risk_level_colors,
            actions,
            created_at_label,
            processed_at_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(status: WithdrawalStatus, risk_score: i64) -> Withdrawal {
        Withdrawal {
            id: 7,
            user_id: 1,
            status,
            amount_kopeks: 150_000,
            risk_score,
            risk_level: RiskLevel::Low,
            payment_details: "4276 1234 5678 9000".into(),
            admin_comment: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            processed_at: None,
        }
    }

    #[test]
    fn pending_high_score_detail_shows_error_band_and_both_actions() {
        let detail = WithdrawalDetailResponse::build(sample(WithdrawalStatus::Pending, 72), "ru");
        assert_eq!(detail.badge.label_key, "withdrawals.status.pending");
        assert_eq!(detail.risk.text_class, "text-red-400");
        assert_eq!(detail.risk_bar_width, 72);
        assert_eq!(detail.actions, vec!["approve", "reject"]);
        assert_eq!(detail.created_at_label, "15.01.2024 10:30");
        assert_eq!(detail.processed_at_label, "-");
    }

    #[test]
    fn approved_detail_offers_only_complete() {
        let detail = WithdrawalDetailResponse::build(sample(WithdrawalStatus::Approved, 72), "ru");
        assert_eq!(detail.actions, vec!["complete"]);
    }

    #[test]
    fn level_colors_do_not_follow_the_score() {
        // Low level with a high score: both rendered as given.
        let detail = WithdrawalDetailResponse::build(sample(WithdrawalStatus::Pending, 72), "en");
        assert_eq!(detail.risk.text_class, "text-red-400");
        assert_eq!(detail.risk_level_colors.text_class, "text-green-400");
    }
}
