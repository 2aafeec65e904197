use std::sync::Arc;

use crate::model::referral::CapturedReferral;

pub type DynReferralService = Arc<dyn ReferralServiceTrait + Send + Sync>;

/// Referral attribution is non-critical: every operation is best effort
/// and none of them returns an error.
pub trait ReferralServiceTrait {
    /// Captures a `ref` query parameter from a landing URL. On success
    /// returns the code and the URL with `ref` stripped (other query
    /// parameters and the fragment untouched).
    fn capture_from_url(&self, visitor_id: &str, raw_url: &str) -> Option<CapturedReferral>;

    /// Returns the stored code if unexpired; clears an expired entry as
    /// a side effect.
    fn pending(&self, visitor_id: &str) -> Option<String>;

    /// `pending` plus unconditional deletion: at-most-once consumption.
    fn consume(&self, visitor_id: &str) -> Option<String>;
}
