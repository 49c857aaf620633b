use chrono::{DateTime, Utc};

/// Attendance lists go stale after 30 seconds; marks from other sessions
/// should show up quickly.
pub const ATTENDANCE_TTL_MS: i64 = 30_000;

/// Dashboard aggregates change more slowly; one minute is enough.
pub const DASHBOARD_TTL_MS: i64 = 60_000;

/// One cached value plus the moment it was fetched. Entries are immutable
/// once created; stores replace them wholesale, never mutate in place.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub data: T,
    pub fetched_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            fetched_at: Utc::now(),
        }
    }

    pub fn age_ms(&self) -> i64 {
        (Utc::now() - self.fetched_at).num_milliseconds()
    }
}

/// Staleness predicate shared by the TTL-based stores.
///
/// An absent entry is never fresh; a present one is fresh while its age is
/// strictly under the TTL (age == ttl counts as stale).
pub fn is_fresh<T>(entry: Option<&CacheEntry<T>>, ttl_ms: i64) -> bool {
    match entry {
        None => false,
        Some(entry) => is_fresh_at(entry.fetched_at, ttl_ms),
    }
}

/// Timestamp form of the same predicate, for stores that keep `fetched_at`
/// outside a `CacheEntry` (the dashboard's single slot).
pub fn is_fresh_at(fetched_at: DateTime<Utc>, ttl_ms: i64) -> bool {
    (Utc::now() - fetched_at).num_milliseconds() < ttl_ms
}
