//! HTTP client for the HR roster and attendance backend.
//!
//! This module provides the `ApiClient` struct for talking to the REST
//! backend: employee roster CRUD, attendance lists and marks, and the
//! dashboard summary.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::{
    AttendanceFilter, AttendanceInput, AttendanceRecord, DashboardSummary, Employee, EmployeeInput,
};

use super::{ApiError, AttendanceApi, DashboardApi, EmployeeApi};

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Body of delete responses; only logged, never surfaced to stores.
#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

/// API client for the HR backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client pointed at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Create a client from the application configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_base_url())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check if a response is successful, turning an error body into the
    /// single `RequestFailed` message stores expect.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "API request failed");
            Err(ApiError::from_body(&body))
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self.client.get(&url).query(query).send().await?;
        let response = Self::check_response(response).await?;
        Ok(response.json().await?)
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self.client.post(&url).json(body).send().await?;
        let response = Self::check_response(response).await?;
        Ok(response.json().await?)
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        let response = self.client.put(&url).json(body).send().await?;
        let response = Self::check_response(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch a single employee by business id.
    pub async fn get_employee(&self, employee_id: &str) -> Result<Employee, ApiError> {
        self.get(&format!("/api/employees/{}", employee_id), &[])
            .await
    }
}

impl EmployeeApi for ApiClient {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let employees: Vec<Employee> = self.get("/api/employees", &[]).await?;
        debug!(count = employees.len(), "Fetched employee roster");
        Ok(employees)
    }

    async fn create_employee(&self, input: &EmployeeInput) -> Result<Employee, ApiError> {
        self.post("/api/employees", input).await
    }

    async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        let url = self.url(&format!("/api/employees/{}", employee_id));
        let response = self.client.delete(&url).send().await?;
        let response = Self::check_response(response).await?;
        let msg: MessageResponse = response.json().await?;
        debug!(message = %msg.message, "Deleted employee");
        Ok(())
    }
}

impl AttendanceApi for ApiClient {
    async fn list_attendance(
        &self,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let records: Vec<AttendanceRecord> = self.get("/api/attendance", &filter.pairs()).await?;
        debug!(count = records.len(), "Fetched attendance (all employees)");
        Ok(records)
    }

    async fn list_attendance_for(
        &self,
        employee_id: &str,
        filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let records: Vec<AttendanceRecord> = self
            .get(&format!("/api/attendance/{}", employee_id), &filter.pairs())
            .await?;
        debug!(
            employee_id = %employee_id,
            count = records.len(),
            "Fetched attendance for employee"
        );
        Ok(records)
    }

    async fn mark_attendance(&self, input: &AttendanceInput) -> Result<AttendanceRecord, ApiError> {
        self.post("/api/attendance", input).await
    }

    async fn update_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        input: &AttendanceInput,
    ) -> Result<AttendanceRecord, ApiError> {
        self.put(
            &format!("/api/attendance/{}/{}", employee_id, date.format("%Y-%m-%d")),
            input,
        )
        .await
    }
}

impl DashboardApi for ApiClient {
    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get("/api/dashboard/summary", &[]).await
    }
}
