use std::sync::LazyLock;
use std::time::Duration;

use chrono::Duration as ChronoDuration;
use regex::Regex;
use tracing::{debug, info};
use url::Url;

use crate::{
    abstract_trait::{DynClock, DynKeyValueStore, ReferralServiceTrait},
    model::referral::{CapturedReferral, ReferralEntry},
};

/// A captured code stays redeemable for one day.
pub const REFERRAL_TTL_HOURS: i64 = 24;

static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").unwrap());

fn storage_key(visitor_id: &str) -> String {
    format!("referral:pending:{visitor_id}")
}

#[derive(Clone)]
pub struct ReferralService {
    store: DynKeyValueStore,
    clock: DynClock,
}

impl std::fmt::Debug for ReferralService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferralService").finish()
    }
}

impl ReferralService {
    pub fn new(store: DynKeyValueStore, clock: DynClock) -> Self {
        Self { store, clock }
    }

    /// Reads the entry and re-validates its expiry. Expired entries are
    /// cleared, and even if the delete silently fails the expiry check
    /// keeps the code from ever being returned again.
    fn read_valid(&self, visitor_id: &str) -> Option<ReferralEntry> {
        let key = storage_key(visitor_id);
        let raw = self.store.get(&key)?;

        let entry: ReferralEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(_) => {
                self.store.delete(&key);
                return None;
            }
        };

        if entry.expires_at <= self.clock.now() {
            debug!("Referral code for visitor {visitor_id} expired, clearing");
            self.store.delete(&key);
            return None;
        }

        Some(entry)
    }
}

impl ReferralServiceTrait for ReferralService {
    fn capture_from_url(&self, visitor_id: &str, raw_url: &str) -> Option<CapturedReferral> {
        let mut parsed = Url::parse(raw_url).ok()?;

        let pairs: Vec<(String, String)> = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        let code = pairs
            .iter()
            .find(|(key, _)| key == "ref")
            .map(|(_, value)| value.clone())
            .filter(|value| CODE_PATTERN.is_match(value))?;

        let remaining: Vec<(String, String)> =
            pairs.into_iter().filter(|(key, _)| key != "ref").collect();

        if remaining.is_empty() {
            parsed.set_query(None);
        } else {
            parsed
                .query_pairs_mut()
                .clear()
                .extend_pairs(remaining.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        let entry = ReferralEntry {
            code: code.clone(),
            expires_at: self.clock.now() + ChronoDuration::hours(REFERRAL_TTL_HOURS),
        };

        // Storage is best effort: the serialized entry carries its own
        // expiry, and a write failure just loses the attribution.
        if let Ok(raw) = serde_json::to_string(&entry) {
            let ttl = Duration::from_secs((REFERRAL_TTL_HOURS * 3600) as u64);
            self.store.set(&storage_key(visitor_id), &raw, Some(ttl));
        }

        info!("Captured referral code for visitor {visitor_id}");

        Some(CapturedReferral {
            code,
            cleaned_url: parsed.to_string(),
        })
    }

    fn pending(&self, visitor_id: &str) -> Option<String> {
        self.read_valid(visitor_id).map(|entry| entry.code)
    }

    fn consume(&self, visitor_id: &str) -> Option<String> {
        let entry = self.read_valid(visitor_id);
        if entry.is_some() {
            self.store.delete(&storage_key(visitor_id));
        }
        entry.map(|entry| entry.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{ClockTrait, KeyValueStoreTrait},
        cache::MemoryStore,
    };
    use chrono::{DateTime, TimeZone, Utc};
    use std::sync::{Arc, Mutex};

    struct ManualClock {
        now: Mutex<DateTime<Utc>>,
    }

    impl ManualClock {
        fn at(now: DateTime<Utc>) -> Arc<Self> {
            Arc::new(Self {
                now: Mutex::new(now),
            })
        }

        fn advance(&self, delta: ChronoDuration) {
            let mut now = self.now.lock().unwrap();
            *now += delta;
        }
    }

    impl ClockTrait for ManualClock {
        fn now(&self) -> DateTime<Utc> {
            *self.now.lock().unwrap()
        }
    }

    fn setup() -> (ReferralService, Arc<ManualClock>, Arc<MemoryStore>) {
        let clock = ManualClock::at(Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap());
        let store = Arc::new(MemoryStore::new());
        let service = ReferralService::new(store.clone(), clock.clone());
        (service, clock, store)
    }

    #[test]
    fn capture_strips_ref_and_preserves_other_params() {
        let (service, _, _) = setup();

        let captured = service
            .capture_from_url("v1", "https://app.example.com/?ref=ABC123&x=1")
            .unwrap();
        assert_eq!(captured.code, "ABC123");
        assert_eq!(captured.cleaned_url, "https://app.example.com/?x=1");
    }

    #[test]
    fn capture_preserves_param_order_and_fragment() {
        let (service, _, _) = setup();

        let captured = service
            .capture_from_url("v1", "https://app.example.com/?a=1&ref=CODE&b=2#section")
            .unwrap();
        assert_eq!(
            captured.cleaned_url,
            "https://app.example.com/?a=1&b=2#section"
        );
    }

    #[test]
    fn capture_with_only_ref_drops_the_query_entirely() {
        let (service, _, _) = setup();

        let captured = service
            .capture_from_url("v1", "https://app.example.com/?ref=ONLY")
            .unwrap();
        assert_eq!(captured.cleaned_url, "https://app.example.com/");
    }

    #[test]
    fn invalid_codes_and_broken_urls_are_ignored() {
        let (service, _, _) = setup();

        // Character outside the allowed class.
        assert!(service
            .capture_from_url("v1", "https://app.example.com/?ref=bad%20code")
            .is_none());
        // Over 64 characters.
        let long = "x".repeat(65);
        assert!(service
            .capture_from_url("v1", &format!("https://app.example.com/?ref={long}"))
            .is_none());
        // Empty code.
        assert!(service
            .capture_from_url("v1", "https://app.example.com/?ref=")
            .is_none());
        // Not a URL at all.
        assert!(service.capture_from_url("v1", "not a url").is_none());
        assert!(service.pending("v1").is_none());
    }

    #[test]
    fn consume_is_at_most_once() {
        let (service, _, _) = setup();

        service
            .capture_from_url("v1", "https://app.example.com/?ref=ABC123&x=1")
            .unwrap();

        assert_eq!(service.pending("v1").as_deref(), Some("ABC123"));
        // Reading does not consume.
        assert_eq!(service.pending("v1").as_deref(), Some("ABC123"));

        assert_eq!(service.consume("v1").as_deref(), Some("ABC123"));
        assert_eq!(service.consume("v1"), None);
        assert_eq!(service.pending("v1"), None);
    }

    #[test]
    fn expired_code_is_never_returned_and_is_cleaned_up() {
        let (service, clock, store) = setup();

        service
            .capture_from_url("v1", "https://app.example.com/?ref=ABC123")
            .unwrap();

        clock.advance(ChronoDuration::hours(24) + ChronoDuration::milliseconds(1));

        assert_eq!(service.pending("v1"), None);
        // The expired entry was removed as a side effect of the read.
        assert!(store.get("referral:pending:v1").is_none());
    }

    #[test]
    fn codes_are_scoped_per_visitor() {
        let (service, _, _) = setup();

        service
            .capture_from_url("v1", "https://app.example.com/?ref=FIRST")
            .unwrap();
        service
            .capture_from_url("v2", "https://app.example.com/?ref=SECOND")
            .unwrap();

        assert_eq!(service.consume("v1").as_deref(), Some("FIRST"));
        assert_eq!(service.consume("v2").as_deref(), Some("SECOND"));
    }
}
