//! REST API client module for the HR backend.
//!
//! This module provides the `ApiClient` for communicating with the
//! roster/attendance backend, plus the narrow per-resource traits the
//! cache stores consume. The traits are the dependency-injection seam:
//! stores are generic over them, so tests can substitute call-counting
//! fakes without a network.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;

use crate::models::{
    AttendanceFilter, AttendanceInput, AttendanceRecord, DashboardSummary, Employee, EmployeeInput,
};
use chrono::NaiveDate;

/// Employee roster operations.
#[allow(async_fn_in_trait)]
pub trait EmployeeApi {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError>;
    async fn create_employee(&self, input: &EmployeeInput) -> Result<Employee, ApiError>;
    async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError>;
}

/// Attendance list and mutation operations.
#[allow(async_fn_in_trait)]
pub trait AttendanceApi {
    /// Global list across all employees, with optional filters.
    async fn list_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError>;

    /// Per-employee list, with optional filters.
    async fn list_attendance_for(
        &self,
        employee_id: &str,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError>;

    /// Create one mark; the backend rejects a duplicate employee/date pair.
    async fn mark_attendance(&self, input: &AttendanceInput) -> Result<AttendanceRecord, ApiError>;

    /// Change the status of an existing mark.
    async fn update_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        input: &AttendanceInput,
    ) -> Result<AttendanceRecord, ApiError>;
}

/// Dashboard aggregate fetch.
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError>;
}
