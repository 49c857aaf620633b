//! End-to-end cache behavior over an in-process fake backend: roster latch,
//! attendance keying, and the eviction a mark triggers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use rostercache::api::{ApiError, AttendanceApi, DashboardApi, EmployeeApi};
use rostercache::models::{
    AttendanceFilter, AttendanceInput, AttendanceRecord, AttendanceStatus, DashboardSummary,
    Employee, EmployeeInput,
};
use rostercache::{AttendanceStore, EmployeeStore, Stores};

#[derive(Default)]
struct Backend {
    employees: Mutex<Vec<Employee>>,
    records: Mutex<Vec<AttendanceRecord>>,
    employee_list_calls: AtomicUsize,
    attendance_list_calls: AtomicUsize,
    summary_calls: AtomicUsize,
}

/// Cheap-clone handle shared between the stores and the assertions.
#[derive(Clone, Default)]
struct FakeHr {
    inner: Arc<Backend>,
}

impl EmployeeApi for FakeHr {
    async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.inner.employee_list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.inner.employees.lock().unwrap().clone())
    }

    async fn create_employee(&self, input: &EmployeeInput) -> Result<Employee, ApiError> {
        let employee = Employee {
            id: format!("oid-{}", input.employee_id),
            employee_id: input.employee_id.clone(),
            full_name: input.full_name.clone(),
            email: input.email.clone(),
            department: input.department.clone(),
            created_at: "2024-06-01T08:00:00".to_string(),
            total_present: 0,
            total_absent: 0,
        };
        self.inner.employees.lock().unwrap().push(employee.clone());
        Ok(employee)
    }

    async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        self.inner
            .employees
            .lock()
            .unwrap()
            .retain(|e| e.employee_id != employee_id);
        Ok(())
    }
}

impl AttendanceApi for FakeHr {
    async fn list_attendance(
        &self,
        _filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.inner.attendance_list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.inner.records.lock().unwrap().clone())
    }

    async fn list_attendance_for(
        &self,
        employee_id: &str,
        _filter: &AttendanceFilter,
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        self.inner.attendance_list_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .inner
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect())
    }

    async fn mark_attendance(&self, input: &AttendanceInput) -> Result<AttendanceRecord, ApiError> {
        let record = AttendanceRecord {
            id: format!("rec-{}-{}", input.employee_id, input.date),
            employee_id: input.employee_id.clone(),
            employee_name: None,
            date: input.date,
            status: input.status,
            created_at: "2024-06-01T08:00:00".to_string(),
        };
        self.inner.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update_attendance(
        &self,
        employee_id: &str,
        date: NaiveDate,
        input: &AttendanceInput,
    ) -> Result<AttendanceRecord, ApiError> {
        let mut records = self.inner.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.employee_id == employee_id && r.date == date)
            .ok_or_else(|| ApiError::RequestFailed("Attendance record not found".into()))?;
        record.status = input.status;
        Ok(record.clone())
    }
}

impl DashboardApi for FakeHr {
    async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.inner.summary_calls.fetch_add(1, Ordering::SeqCst);
        let employees = self.inner.employees.lock().unwrap();
        let records = self.inner.records.lock().unwrap();
        Ok(DashboardSummary {
            today: "2024-06-01".parse().unwrap(),
            total_employees: employees.len() as i64,
            total_present_today: records
                .iter()
                .filter(|r| r.status == AttendanceStatus::Present)
                .count() as i64,
            total_absent_today: records
                .iter()
                .filter(|r| r.status == AttendanceStatus::Absent)
                .count() as i64,
            total_attendance_records: records.len() as i64,
            departments: Vec::new(),
        })
    }
}

#[tokio::test]
async fn full_roster_and_attendance_flow() {
    let backend = FakeHr::default();
    let mut employees = EmployeeStore::new(backend.clone());
    let mut attendance = AttendanceStore::new(backend.clone());

    // 1. Initial roster fetch: empty list, latch set.
    employees.fetch(false).await.unwrap();
    assert!(employees.fetched());
    assert!(employees.employees().is_empty());

    // 2. Adding an employee patches the roster locally, no re-fetch.
    let added = employees
        .add(&EmployeeInput {
            employee_id: "E1".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            department: "Engineering".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(added.employee_id, "E1");
    assert_eq!(employees.employees().len(), 1);
    assert_eq!(backend.inner.employee_list_calls.load(Ordering::SeqCst), 1);

    // 3. Attendance list lands in the cache under the "all" key.
    let all = AttendanceFilter::default();
    let records = attendance.fetch("", &all, false).await.unwrap();
    assert!(records.is_empty());
    assert!(attendance.get_cached("", &all).is_some());
    assert_eq!(backend.inner.attendance_list_calls.load(Ordering::SeqCst), 1);

    // 4. Marking attendance evicts the aggregate view.
    attendance
        .mark(&AttendanceInput {
            employee_id: "E1".to_string(),
            date: "2024-06-01".parse().unwrap(),
            status: AttendanceStatus::Present,
        })
        .await
        .unwrap();
    assert!(attendance.get_cached("", &all).is_none());

    // 5. The next fetch misses the cache and sees the new record.
    let records = attendance.fetch("", &all, false).await.unwrap();
    assert_eq!(backend.inner.attendance_list_calls.load(Ordering::SeqCst), 2);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].employee_id, "E1");
    assert_eq!(records[0].status, AttendanceStatus::Present);
}

#[tokio::test]
async fn mark_attendance_invalidates_sibling_stores() {
    let backend = FakeHr::default();
    let mut stores = Stores::new(&backend);

    stores
        .employees
        .add(&EmployeeInput {
            employee_id: "E1".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            department: "Engineering".to_string(),
        })
        .await
        .unwrap();
    stores.employees.fetch(false).await.unwrap();
    stores.dashboard.fetch(false).await;
    assert_eq!(stores.dashboard.summary().unwrap().total_present_today, 0);

    // The mark skews dashboard counts and roster totals, so the wrapper
    // invalidates both sibling stores and they re-fetch on next use.
    stores
        .mark_attendance(&AttendanceInput {
            employee_id: "E1".to_string(),
            date: "2024-06-01".parse().unwrap(),
            status: AttendanceStatus::Present,
        })
        .await
        .unwrap();

    assert!(stores.dashboard.fetched_at().is_none());
    assert!(!stores.employees.fetched());

    stores.dashboard.fetch(false).await;
    assert_eq!(backend.inner.summary_calls.load(Ordering::SeqCst), 2);
    assert_eq!(stores.dashboard.summary().unwrap().total_present_today, 1);

    stores.employees.fetch(false).await.unwrap();
    assert_eq!(backend.inner.employee_list_calls.load(Ordering::SeqCst), 2);
}
