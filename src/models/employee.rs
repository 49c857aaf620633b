//! Employee roster models.

use serde::{Deserialize, Serialize};

/// An employee as returned by the roster API, including the attendance
/// totals the backend aggregates per employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Backend record id (distinct from the business key below).
    pub id: String,
    /// Business key, unique and immutable once assigned.
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    /// ISO-8601 creation timestamp as emitted by the backend.
    pub created_at: String,
    #[serde(default)]
    pub total_present: i64,
    #[serde(default)]
    pub total_absent: i64,
}

/// Payload for creating an employee.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeInput {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}
