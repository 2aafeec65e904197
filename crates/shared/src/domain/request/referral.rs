use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The landing URL exactly as the webview saw it, `ref` parameter and
/// all.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CaptureReferralRequest {
    pub url: String,
}
