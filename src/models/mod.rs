//! Data models for HR roster entities.
//!
//! This module contains the data structures exchanged with the API:
//!
//! - `Employee`, `EmployeeInput`: roster entries and the create payload
//! - `AttendanceRecord`, `AttendanceInput`, `AttendanceFilter`: daily marks
//! - `DashboardSummary`, `DepartmentCount`: aggregate counts

pub mod attendance;
pub mod dashboard;
pub mod employee;

pub use attendance::{AttendanceFilter, AttendanceInput, AttendanceRecord, AttendanceStatus};
pub use dashboard::{DashboardSummary, DepartmentCount};
pub use employee::{Employee, EmployeeInput};
