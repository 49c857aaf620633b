//! Attendance store.
//!
//! Multi-key cache: one entry per employee/filter combination, keyed by the
//! string built in `cache::key`. Entries go stale after 30 seconds; marking
//! attendance selectively evicts only the views the new record could have
//! changed.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::api::{ApiError, AttendanceApi};
use crate::cache::{cache_key, is_fresh, CacheEntry, ATTENDANCE_TTL_MS};
use crate::models::{AttendanceFilter, AttendanceInput, AttendanceRecord};

#[derive(Debug, Default)]
struct AttendanceState {
    cache: HashMap<String, CacheEntry<Vec<AttendanceRecord>>>,
    loading: bool,
    error: Option<String>,
}

pub struct AttendanceStore<A> {
    api: A,
    state: AttendanceState,
}

impl<A: AttendanceApi> AttendanceStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: AttendanceState::default(),
        }
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// Fetch one filtered view, serving it from the cache while the entry is
    /// under the 30 second TTL and `force` is false.
    ///
    /// An empty `employee_id` hits the global list endpoint; otherwise the
    /// per-employee one. A failed fetch records the error and returns it,
    /// leaving whatever entry was cached at that key untouched.
    pub async fn fetch(
        &mut self,
        employee_id: &str,
        filter: &AttendanceFilter,
        force: bool,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let key = cache_key(employee_id, filter);

        if !force && is_fresh(self.state.cache.get(&key), ATTENDANCE_TTL_MS) {
            debug!(key = %key, "attendance cache hit");
            return Ok(self.state.cache[&key].data.clone());
        }

        self.state.loading = true;
        self.state.error = None;

        let result = if employee_id.is_empty() {
            self.api.list_attendance(filter).await
        } else {
            self.api.list_attendance_for(employee_id, filter).await
        };

        match result {
            Ok(records) => {
                debug!(key = %key, count = records.len(), "attendance fetched");
                self.state.loading = false;
                self.state.cache.insert(key, CacheEntry::new(records.clone()));
                Ok(records)
            }
            Err(err) => {
                self.state.loading = false;
                self.state.error = Some(err.message().to_string());
                Err(err)
            }
        }
    }

    /// Cached records for a key, if any. Never fetches and never checks
    /// freshness; callers that need fresh data go through `fetch`.
    pub fn get_cached(
        &self,
        employee_id: &str,
        filter: &AttendanceFilter,
    ) -> Option<&[AttendanceRecord]> {
        self.state
            .cache
            .get(&cache_key(employee_id, filter))
            .map(|entry| entry.data.as_slice())
    }

    /// Mark attendance, then evict every view the new record could appear in.
    pub async fn mark(&mut self, input: &AttendanceInput) -> Result<AttendanceRecord, ApiError> {
        let record = self.api.mark_attendance(input).await?;
        self.evict_for(&record.employee_id);
        Ok(record)
    }

    /// Change the status of an existing mark; same eviction as `mark`.
    pub async fn update(
        &mut self,
        employee_id: &str,
        date: NaiveDate,
        input: &AttendanceInput,
    ) -> Result<AttendanceRecord, ApiError> {
        let record = self.api.update_attendance(employee_id, date, input).await?;
        self.evict_for(&record.employee_id);
        Ok(record)
    }

    /// Drop every key that is an aggregate (`all`) view or mentions the
    /// employee. Substring matching over-evicts when one id is a prefix of
    /// another (`E1` inside `emp:E10`); that is deliberate — a now-wrong
    /// entry must never survive, an extra miss is just one more fetch.
    fn evict_for(&mut self, employee_id: &str) {
        let before = self.state.cache.len();
        self.state
            .cache
            .retain(|key, _| !key.contains("all") && !key.contains(employee_id));
        debug!(
            employee_id = %employee_id,
            evicted = before - self.state.cache.len(),
            "attendance cache invalidated for employee"
        );
    }

    /// Evict an employee's views without a mutation, keeping aggregate keys
    /// only when they are not `all`-prefixed.
    pub fn invalidate_employee(&mut self, employee_id: &str) {
        self.state
            .cache
            .retain(|key, _| !key.contains(employee_id) && !key.starts_with("all"));
    }

    /// Clear the whole cache map.
    pub fn invalidate_all(&mut self) {
        debug!(entries = self.state.cache.len(), "attendance cache cleared");
        self.state.cache.clear();
    }
}
