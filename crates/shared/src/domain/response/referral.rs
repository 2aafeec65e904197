use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::referral::CapturedReferral;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CaptureReferralResponse {
    pub captured: bool,
    pub code: Option<String>,
    pub cleaned_url: Option<String>,
}

impl From<Option<CapturedReferral>> for CaptureReferralResponse {
    fn from(value: Option<CapturedReferral>) -> Self {
        match value {
            Some(captured) => CaptureReferralResponse {
                captured: true,
                code: Some(captured.code),
                cleaned_url: Some(captured.cleaned_url),
            },
            None => CaptureReferralResponse {
                captured: false,
                code: None,
                cleaned_url: None,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReferralCodeResponse {
    pub code: Option<String>,
}
