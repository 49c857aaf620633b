//! Attendance record models and list filters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Attendance status for one employee on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
        }
    }
}

/// A single attendance mark. The backend keeps at most one record per
/// employee per date; the cache layer does not enforce that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_id: String,
    /// Denormalized for display; the global list endpoint fills it in.
    pub employee_name: Option<String>,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub created_at: String,
}

/// Payload for marking or updating attendance.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceInput {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Optional filters for attendance list endpoints.
///
/// The field order here is the order filter pairs appear in cache keys and
/// query strings, so identical filters always produce identical keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    pub date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
}

impl AttendanceFilter {
    /// Filter pairs in declaration order, absent fields omitted.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(date) = self.date {
            pairs.push(("date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.to_string()));
        }
        pairs
    }
}
