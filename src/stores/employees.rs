//! Employee roster store.
//!
//! Single-collection cache guarded by an "ever fetched" latch rather than a
//! TTL: once the roster is loaded it stays authoritative until something
//! explicitly invalidates it (e.g. attendance changes shift the per-employee
//! totals). Mutations patch the local collection directly, so no re-fetch
//! is needed after a create or delete.

use tracing::debug;

use crate::api::{ApiError, EmployeeApi};
use crate::models::{Employee, EmployeeInput};

#[derive(Debug, Default)]
struct EmployeeState {
    employees: Vec<Employee>,
    loading: bool,
    error: Option<String>,
    fetched: bool,
}

pub struct EmployeeStore<A> {
    api: A,
    state: EmployeeState,
}

impl<A: EmployeeApi> EmployeeStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: EmployeeState::default(),
        }
    }

    /// The cached roster, insertion order, newest-first after creates.
    pub fn employees(&self) -> &[Employee] {
        &self.state.employees
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// Whether the latch is set (a full fetch has succeeded and nothing has
    /// invalidated it since).
    pub fn fetched(&self) -> bool {
        self.state.fetched
    }

    /// Load the roster, skipping the network entirely while the latch holds
    /// and `force` is false.
    ///
    /// A failed fetch records the error but leaves both the roster and the
    /// latch untouched, so a failed forced refresh never evicts good data.
    pub async fn fetch(&mut self, force: bool) -> Result<(), ApiError> {
        if self.state.fetched && !force {
            debug!("employee roster cache hit, skipping fetch");
            return Ok(());
        }

        self.state = EmployeeState {
            loading: true,
            error: None,
            ..std::mem::take(&mut self.state)
        };

        match self.api.list_employees().await {
            Ok(employees) => {
                debug!(count = employees.len(), "employee roster fetched");
                self.state = EmployeeState {
                    employees,
                    loading: false,
                    fetched: true,
                    ..std::mem::take(&mut self.state)
                };
                Ok(())
            }
            Err(err) => {
                self.state = EmployeeState {
                    loading: false,
                    error: Some(err.message().to_string()),
                    ..std::mem::take(&mut self.state)
                };
                Err(err)
            }
        }
    }

    /// Create an employee and prepend it to the cached roster.
    pub async fn add(&mut self, input: &EmployeeInput) -> Result<Employee, ApiError> {
        let employee = self.api.create_employee(input).await?;
        debug!(employee_id = %employee.employee_id, "employee added to roster");
        self.state.employees.insert(0, employee.clone());
        Ok(employee)
    }

    /// Delete an employee and drop it from the cached roster.
    pub async fn remove(&mut self, employee_id: &str) -> Result<(), ApiError> {
        self.api.delete_employee(employee_id).await?;
        debug!(employee_id = %employee_id, "employee removed from roster");
        self.state
            .employees
            .retain(|e| e.employee_id != employee_id);
        Ok(())
    }

    /// Clear the latch only. Stale rows stay visible until the next fetch
    /// completes, which avoids a flash of empty UI.
    pub fn invalidate(&mut self) {
        debug!("employee roster invalidated");
        self.state.fetched = false;
    }
}
