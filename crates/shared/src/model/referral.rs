use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored under `referral:pending:{visitor_id}`. The read path always
/// re-checks `expires_at`, so a stale entry that outlives its store TTL
/// is still never handed out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferralEntry {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful capture: the code that was persisted and the
/// landing URL with the `ref` parameter removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedReferral {
    pub code: String,
    pub cleaned_url: String,
}
