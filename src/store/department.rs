//! Store for departments.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::Department;

/// Holds the flat list of departments referenced by employees.
#[derive(Debug, Default)]
pub struct DepartmentStore {
    departments: RwLock<HashMap<Uuid, Department>>,
}

impl DepartmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a department record.
    pub async fn insert(&self, department: Department) {
        self.departments
            .write()
            .await
            .insert(department.id, department);
    }

    /// Looks up a live (non-deleted) department by id.
    pub async fn get(&self, id: Uuid) -> Option<Department> {
        self.departments
            .read()
            .await
            .get(&id)
            .filter(|d| !d.is_deleted())
            .cloned()
    }

    /// All live departments, ordered by name then id.
    pub async fn all(&self) -> Vec<Department> {
        let mut rows: Vec<Department> = self
            .departments
            .read()
            .await
            .values()
            .filter(|d| !d.is_deleted())
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        rows
    }

    /// Resolves a department name, including soft-deleted records.
    pub async fn name_of(&self, id: Uuid) -> Option<String> {
        self.departments
            .read()
            .await
            .get(&id)
            .map(|d| d.name.clone())
    }
}
