use chrono::{DateTime, Utc};
use std::sync::Arc;

pub type DynClock = Arc<dyn ClockTrait + Send + Sync>;

/// Time source seam. Production uses [`crate::config::SystemClock`];
/// tests pin the clock to exercise TTL edges deterministically.
pub trait ClockTrait {
    fn now(&self) -> DateTime<Utc>;
}
