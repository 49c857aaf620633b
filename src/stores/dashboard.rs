//! Dashboard summary store.
//!
//! Single-entry cache under a 60 second TTL. The fetch is fire-and-forget:
//! a failure lands in the `error` field for the UI banner but is not
//! returned, and the last good summary stays on screen.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::api::DashboardApi;
use crate::cache::{is_fresh_at, DASHBOARD_TTL_MS};
use crate::models::DashboardSummary;

#[derive(Debug, Default)]
struct DashboardState {
    summary: Option<DashboardSummary>,
    loading: bool,
    error: Option<String>,
    fetched_at: Option<DateTime<Utc>>,
}

pub struct DashboardStore<A> {
    api: A,
    state: DashboardState,
}

impl<A: DashboardApi> DashboardStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: DashboardState::default(),
        }
    }

    pub fn summary(&self) -> Option<&DashboardSummary> {
        self.state.summary.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.state.fetched_at
    }

    fn fresh(&self) -> bool {
        self.state
            .fetched_at
            .map(|at| is_fresh_at(at, DASHBOARD_TTL_MS))
            .unwrap_or(false)
    }

    /// Refresh the summary unless the cached one is still under the TTL.
    ///
    /// Failures are swallowed into `error`; callers poll state rather than
    /// handle a result.
    pub async fn fetch(&mut self, force: bool) {
        if !force && self.fresh() {
            debug!("dashboard summary cache hit, skipping fetch");
            return;
        }

        self.state = DashboardState {
            loading: true,
            error: None,
            ..std::mem::take(&mut self.state)
        };

        match self.api.dashboard_summary().await {
            Ok(summary) => {
                debug!(
                    total_employees = summary.total_employees,
                    "dashboard summary fetched"
                );
                self.state = DashboardState {
                    summary: Some(summary),
                    loading: false,
                    fetched_at: Some(Utc::now()),
                    ..std::mem::take(&mut self.state)
                };
            }
            Err(err) => {
                self.state = DashboardState {
                    loading: false,
                    error: Some(err.message().to_string()),
                    ..std::mem::take(&mut self.state)
                };
            }
        }
    }

    /// Force the next fetch by clearing the timestamp. The summary itself
    /// stays for display until fresh data replaces it.
    pub fn invalidate(&mut self) {
        debug!("dashboard summary invalidated");
        self.state.fetched_at = None;
    }
}
