//! Geography entities: Country, State and City.
//!
//! These form a strict containment hierarchy (Country 1-N State 1-N City)
//! which the employee form's cascading selector walks top-down.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A country, the root of the geography hierarchy.
///
/// `code` and `phonecode` are numeric *strings*: they carry leading zeros
/// and are never used arithmetically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// Unique identifier for the country.
    pub id: Uuid,
    /// Display name of the country.
    pub name: String,
    /// Numeric country code, at most 3 digits.
    pub code: String,
    /// International phone code, at most 5 digits.
    pub phonecode: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker; `Some` means the record is retired.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A state belonging to exactly one country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Unique identifier for the state.
    pub id: Uuid,
    /// Display name of the state.
    pub name: String,
    /// The country this state belongs to.
    pub country_id: Uuid,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker; `Some` means the record is retired.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A city belonging to exactly one state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    /// Unique identifier for the city.
    pub id: Uuid,
    /// Display name of the city.
    pub name: String,
    /// The state this city belongs to.
    pub state_id: Uuid,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker; `Some` means the record is retired.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Country {
    /// Returns true if the record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl State {
    /// Returns true if the record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl City {
    /// Returns true if the record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
