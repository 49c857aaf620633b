//! Cache stores sitting between the UI layer and the API.
//!
//! Each resource family gets its own independent store:
//!
//! - `EmployeeStore`: roster list behind an "ever fetched" latch
//! - `AttendanceStore`: per-filter entries under a 30s TTL
//! - `DashboardStore`: one aggregate entry under a 60s TTL
//!
//! Cross-store coordination is a caller convention: a mutation in one store
//! invalidates the siblings it affects. `Stores` bundles the three over one
//! `ApiClient` and applies the convention for attendance marks (which change
//! both the dashboard counts and the per-employee totals in the roster).

pub mod attendance;
pub mod dashboard;
pub mod employees;

pub use attendance::AttendanceStore;
pub use dashboard::DashboardStore;
pub use employees::EmployeeStore;

use crate::api::{ApiClient, ApiError, AttendanceApi, DashboardApi, EmployeeApi};
use crate::models::{AttendanceInput, AttendanceRecord};

/// The three stores over a shared API handle, constructed once at session
/// start and handed to consumers by reference. Generic over the resource
/// traits like the stores themselves; real sessions use the default
/// `ApiClient`.
pub struct Stores<A = ApiClient> {
    pub employees: EmployeeStore<A>,
    pub attendance: AttendanceStore<A>,
    pub dashboard: DashboardStore<A>,
}

impl<A> Stores<A>
where
    A: EmployeeApi + AttendanceApi + DashboardApi + Clone,
{
    pub fn new(api: &A) -> Self {
        Self {
            employees: EmployeeStore::new(api.clone()),
            attendance: AttendanceStore::new(api.clone()),
            dashboard: DashboardStore::new(api.clone()),
        }
    }

    /// Mark attendance and invalidate the sibling stores whose data the new
    /// record skews: dashboard counts and per-employee roster totals.
    pub async fn mark_attendance(
        &mut self,
        input: &AttendanceInput,
    ) -> Result<AttendanceRecord, ApiError> {
        let record = self.attendance.mark(input).await?;
        self.dashboard.invalidate();
        self.employees.invalidate();
        Ok(record)
    }
}
