//! Employee model.
//!
//! An employee references exactly one country, state, city and department.
//! The state is expected to belong to the country and the city to the state;
//! the service enforces this at create/update time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employee record managed by the back office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: Uuid,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's middle name.
    pub middle_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Full street address.
    pub address: String,
    /// Postal/zip code.
    pub zip_code: String,
    /// The employee's date of birth, never in the future.
    pub date_of_birth: NaiveDate,
    /// The date the employee was hired, never in the future.
    pub date_hired: NaiveDate,
    /// The country the employee is located in.
    pub country_id: Uuid,
    /// The state the employee is located in.
    pub state_id: Uuid,
    /// The city the employee is located in.
    pub city_id: Uuid,
    /// The department the employee is assigned to.
    pub department_id: Uuid,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker; `Some` means the record is retired.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Employee {
    /// Returns true if the record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns the employee's full name in "first middle last" order.
    ///
    /// # Example
    ///
    /// ```
    /// use staff_admin::models::Employee;
    /// use chrono::{NaiveDate, Utc};
    /// use uuid::Uuid;
    ///
    /// let employee = Employee {
    ///     id: Uuid::new_v4(),
    ///     first_name: "Ada".to_string(),
    ///     middle_name: "King".to_string(),
    ///     last_name: "Lovelace".to_string(),
    ///     address: "12 St James Square".to_string(),
    ///     zip_code: "SW1Y".to_string(),
    ///     date_of_birth: NaiveDate::from_ymd_opt(1990, 12, 10).unwrap(),
    ///     date_hired: NaiveDate::from_ymd_opt(2020, 1, 6).unwrap(),
    ///     country_id: Uuid::new_v4(),
    ///     state_id: Uuid::new_v4(),
    ///     city_id: Uuid::new_v4(),
    ///     department_id: Uuid::new_v4(),
    ///     created_at: Utc::now(),
    ///     updated_at: Utc::now(),
    ///     deleted_at: None,
    /// };
    /// assert_eq!(employee.full_name(), "Ada King Lovelace");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.first_name, self.middle_name, self.last_name)
    }
}
