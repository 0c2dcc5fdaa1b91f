//! Application state for the back-office API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::seed::SeedLoader;
use crate::store::{DepartmentStore, EmployeeStore, GeoStore};

/// Shared application state.
///
/// Contains the record stores shared across all request handlers.
#[derive(Clone, Default)]
pub struct AppState {
    geo: Arc<GeoStore>,
    departments: Arc<DepartmentStore>,
    employees: Arc<EmployeeStore>,
}

impl AppState {
    /// Creates a state with empty stores.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state populated from loaded seed data.
    pub async fn from_seed(seed: &SeedLoader) -> Self {
        let state = Self::new();
        seed.populate(state.geo(), state.departments()).await;
        state
    }

    /// Returns the geography store.
    pub fn geo(&self) -> &GeoStore {
        &self.geo
    }

    /// Returns the department store.
    pub fn departments(&self) -> &DepartmentStore {
        &self.departments
    }

    /// Returns the employee store.
    pub fn employees(&self) -> &EmployeeStore {
        &self.employees
    }
}
