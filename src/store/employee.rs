//! Store for employee records.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AdminError, AdminResult};
use crate::filter::EmployeeFilter;
use crate::models::Employee;

/// Holds employee records and answers filtered list queries.
///
/// Queries evaluate an [`EmployeeFilter`] against every live record; the
/// list page re-issues the whole query on each filter change, so there is no
/// incremental state to keep. Results come back ordered by creation time
/// then id, which keeps pagination-free list rendering stable.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    employees: RwLock<HashMap<Uuid, Employee>>,
}

impl EmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an employee record.
    pub async fn insert(&self, employee: Employee) {
        self.employees.write().await.insert(employee.id, employee);
    }

    /// Looks up a live (non-deleted) employee by id.
    pub async fn get(&self, id: Uuid) -> Option<Employee> {
        self.employees
            .read()
            .await
            .get(&id)
            .filter(|e| !e.is_deleted())
            .cloned()
    }

    /// Replaces a live employee's editable fields and bumps `updated_at`.
    ///
    /// Concurrent updates are last-write-wins; there is no version check.
    pub async fn update<F>(&self, id: Uuid, now: DateTime<Utc>, apply: F) -> AdminResult<Employee>
    where
        F: FnOnce(&mut Employee),
    {
        let mut employees = self.employees.write().await;
        let employee = employees
            .get_mut(&id)
            .filter(|e| !e.is_deleted())
            .ok_or(AdminError::NotFound {
                resource: "employee",
                id,
            })?;
        apply(employee);
        employee.updated_at = now;
        Ok(employee.clone())
    }

    /// Soft-deletes a live employee.
    pub async fn soft_delete(&self, id: Uuid, now: DateTime<Utc>) -> AdminResult<()> {
        let mut employees = self.employees.write().await;
        let employee = employees
            .get_mut(&id)
            .filter(|e| !e.is_deleted())
            .ok_or(AdminError::NotFound {
                resource: "employee",
                id,
            })?;
        employee.deleted_at = Some(now);
        employee.updated_at = now;
        Ok(())
    }

    /// Restores a soft-deleted employee.
    pub async fn restore(&self, id: Uuid, now: DateTime<Utc>) -> AdminResult<Employee> {
        let mut employees = self.employees.write().await;
        let employee = employees
            .get_mut(&id)
            .filter(|e| e.is_deleted())
            .ok_or(AdminError::NotFound {
                resource: "employee",
                id,
            })?;
        employee.deleted_at = None;
        employee.updated_at = now;
        Ok(employee.clone())
    }

    /// Returns live employees matching the filter, in a stable order.
    pub async fn query(&self, filter: &EmployeeFilter, now: DateTime<Utc>) -> Vec<Employee> {
        let mut rows: Vec<Employee> = self
            .employees
            .read()
            .await
            .values()
            .filter(|e| !e.is_deleted() && filter.matches(e, now))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        rows
    }
}
