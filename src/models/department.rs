//! Department model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A department that employees are assigned to.
///
/// Departments are a flat list, independent of the geography hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: Uuid,
    /// Display name of the department.
    pub name: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker; `Some` means the record is retired.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Department {
    /// Returns true if the record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
