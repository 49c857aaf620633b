//! rostercache — client-side cache and invalidation layer for an HR
//! roster/attendance backend.
//!
//! Three independent stores sit between UI views and the REST API:
//! employees (latch-based), attendance (TTL + selective invalidation by
//! employee), and the dashboard summary (TTL). Stores are plain objects
//! created once per session from an [`api::ApiClient`]; rendering, form
//! validation, and routing live with the consumer.

pub mod api;
pub mod cache;
pub mod config;
pub mod models;
pub mod stores;

pub use api::{ApiClient, ApiError};
pub use config::Config;
pub use stores::{AttendanceStore, DashboardStore, EmployeeStore, Stores};
