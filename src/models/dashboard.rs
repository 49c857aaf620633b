//! Dashboard summary models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate counts for the dashboard view. Fetched as a single value and
/// replaced wholesale on every refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub today: NaiveDate,
    pub total_employees: i64,
    pub total_present_today: i64,
    pub total_absent_today: i64,
    pub total_attendance_records: i64,
    #[serde(default)]
    pub departments: Vec<DepartmentCount>,
}

/// Headcount for one department.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: i64,
}
