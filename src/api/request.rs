//! Request types for the back-office API.
//!
//! This module defines the JSON payloads for the create/edit endpoints and
//! the selector refresh endpoint. Every form field is optional at the type
//! level: required-ness is a validation rule, so a missing field produces
//! a field-scoped error message instead of a deserialization failure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationErrors;
use crate::resource::{COUNTRY_SCHEMA, EMPLOYEE_SCHEMA, FieldValue};
use crate::selector::{LocationSelection, SelectField};

fn text_value(value: &Option<String>) -> FieldValue<'_> {
    match value {
        Some(text) => FieldValue::Text(text),
        None => FieldValue::Missing,
    }
}

fn date_value(value: &Option<NaiveDate>) -> FieldValue<'static> {
    match value {
        Some(date) => FieldValue::Date(*date),
        None => FieldValue::Missing,
    }
}

fn reference_value(value: &Option<Uuid>) -> FieldValue<'static> {
    match value {
        Some(_) => FieldValue::Reference,
        None => FieldValue::Missing,
    }
}

/// Request body for creating or updating a country.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CountryPayload {
    /// Display name of the country.
    #[serde(default)]
    pub name: Option<String>,
    /// Numeric country code, at most 3 digits.
    #[serde(default)]
    pub code: Option<String>,
    /// International phone code, at most 5 digits.
    #[serde(default)]
    pub phonecode: Option<String>,
}

impl CountryPayload {
    /// Pairs each schema field with its submitted value.
    pub fn field_values(&self) -> Vec<(&'static str, FieldValue<'_>)> {
        vec![
            ("name", text_value(&self.name)),
            ("code", text_value(&self.code)),
            ("phonecode", text_value(&self.phonecode)),
        ]
    }

    /// Validates against the country schema and extracts the typed fields.
    pub fn into_validated(self, today: NaiveDate) -> Result<ValidCountry, ValidationErrors> {
        COUNTRY_SCHEMA.validate(&self.field_values(), today)?;
        let CountryPayload {
            name: Some(name),
            code: Some(code),
            phonecode: Some(phonecode),
        } = self
        else {
            // Required rules make every field Some once validation passes.
            return Err(ValidationErrors::new());
        };
        Ok(ValidCountry {
            name,
            code,
            phonecode,
        })
    }
}

/// A country submission that passed schema validation.
#[derive(Debug, Clone)]
pub struct ValidCountry {
    /// Display name of the country.
    pub name: String,
    /// Numeric country code.
    pub code: String,
    /// International phone code.
    pub phonecode: String,
}

/// Request body for creating or updating an employee.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeePayload {
    /// Selected country.
    #[serde(default)]
    pub country_id: Option<Uuid>,
    /// Selected state.
    #[serde(default)]
    pub state_id: Option<Uuid>,
    /// Selected city.
    #[serde(default)]
    pub city_id: Option<Uuid>,
    /// Selected department.
    #[serde(default)]
    pub department_id: Option<Uuid>,
    /// First name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Middle name.
    #[serde(default)]
    pub middle_name: Option<String>,
    /// Last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Full street address.
    #[serde(default)]
    pub address: Option<String>,
    /// Zip code.
    #[serde(default)]
    pub zip_code: Option<String>,
    /// Date of birth.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Date hired.
    #[serde(default)]
    pub date_hired: Option<NaiveDate>,
}

impl EmployeePayload {
    /// Pairs each schema field with its submitted value.
    pub fn field_values(&self) -> Vec<(&'static str, FieldValue<'_>)> {
        vec![
            ("country_id", reference_value(&self.country_id)),
            ("state_id", reference_value(&self.state_id)),
            ("city_id", reference_value(&self.city_id)),
            ("department_id", reference_value(&self.department_id)),
            ("first_name", text_value(&self.first_name)),
            ("middle_name", text_value(&self.middle_name)),
            ("last_name", text_value(&self.last_name)),
            ("address", text_value(&self.address)),
            ("zip_code", text_value(&self.zip_code)),
            ("date_of_birth", date_value(&self.date_of_birth)),
            ("date_hired", date_value(&self.date_hired)),
        ]
    }

    /// Validates against the employee schema and extracts the typed fields.
    ///
    /// Location consistency (state-in-country, city-in-state, existence) is
    /// checked separately by the selector controller.
    pub fn into_validated(self, today: NaiveDate) -> Result<ValidEmployee, ValidationErrors> {
        EMPLOYEE_SCHEMA.validate(&self.field_values(), today)?;
        let EmployeePayload {
            country_id: Some(country_id),
            state_id: Some(state_id),
            city_id: Some(city_id),
            department_id: Some(department_id),
            first_name: Some(first_name),
            middle_name: Some(middle_name),
            last_name: Some(last_name),
            address: Some(address),
            zip_code: Some(zip_code),
            date_of_birth: Some(date_of_birth),
            date_hired: Some(date_hired),
        } = self
        else {
            // Required rules make every field Some once validation passes.
            return Err(ValidationErrors::new());
        };
        Ok(ValidEmployee {
            country_id,
            state_id,
            city_id,
            department_id,
            first_name,
            middle_name,
            last_name,
            address,
            zip_code,
            date_of_birth,
            date_hired,
        })
    }
}

/// An employee submission that passed schema validation.
#[derive(Debug, Clone)]
pub struct ValidEmployee {
    /// Selected country.
    pub country_id: Uuid,
    /// Selected state.
    pub state_id: Uuid,
    /// Selected city.
    pub city_id: Uuid,
    /// Selected department.
    pub department_id: Uuid,
    /// First name.
    pub first_name: String,
    /// Middle name.
    pub middle_name: String,
    /// Last name.
    pub last_name: String,
    /// Full street address.
    pub address: String,
    /// Zip code.
    pub zip_code: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Date hired.
    pub date_hired: NaiveDate,
}

/// Request body for `POST /employees/form`, the selector refresh.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormRefreshRequest {
    /// The form's current choice values.
    #[serde(default)]
    pub values: LocationSelection,
    /// The field the user just changed, if any. When present, its
    /// dependent fields are cleared before option sets are rebuilt.
    #[serde(default)]
    pub changed: Option<SelectField>,
}

/// Query parameters for the country list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryListParams {
    /// Case-insensitive search over name, code and phone code.
    pub search: Option<String>,
    /// Sort column: `name` (default), `code`, `phonecode` or `created_at`.
    pub sort: Option<String>,
    /// Sort direction: `asc` (default) or `desc`.
    pub order: Option<String>,
}

/// Query parameters for the option-set endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionParams {
    /// Parent country for state options.
    pub country_id: Option<String>,
    /// Parent state for city options.
    pub state_id: Option<String>,
    /// Case-insensitive label search.
    pub search: Option<String>,
}
