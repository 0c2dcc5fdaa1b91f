//! Response types for the back-office API.
//!
//! This module defines the error response structures, the HTTP mapping of
//! [`AdminError`], and the composite list/detail payloads.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AdminError, ValidationErrors};
use crate::filter::{Indicator, ListTab};
use crate::models::Employee;
use crate::selector::FormSnapshot;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Field-scoped validation messages, present on validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<ValidationErrors>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
            fields: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
            fields: None,
        }
    }

    /// Creates a field-scoped validation error response.
    pub fn validation(fields: ValidationErrors) -> Self {
        Self {
            code: "VALIDATION_ERROR".to_string(),
            message: format!("Validation failed for {} field(s)", fields.len()),
            details: None,
            fields: Some(fields),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// 422 response carrying field-scoped validation messages.
    pub fn validation(fields: ValidationErrors) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            error: ApiError::validation(fields),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<AdminError> for ApiErrorResponse {
    fn from(error: AdminError) -> Self {
        match error {
            AdminError::SeedNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SEED_ERROR",
                    "Seed data error",
                    format!("Seed file not found: {path}"),
                ),
            },
            AdminError::SeedParse { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "SEED_ERROR",
                    "Seed data parse error",
                    format!("Failed to parse {path}: {message}"),
                ),
            },
            AdminError::NotFound { resource, id } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("NOT_FOUND", format!("{resource} not found: {id}")),
            },
            AdminError::Validation(fields) => ApiErrorResponse::validation(fields),
        }
    }
}

/// One row of the employee list, with referenced names resolved.
///
/// Name lookups include soft-deleted referents so the list keeps rendering
/// after a country or department is retired; an unresolvable reference
/// renders as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRow {
    /// The employee id.
    pub id: Uuid,
    /// First name.
    pub first_name: String,
    /// Middle name.
    pub middle_name: String,
    /// Last name.
    pub last_name: String,
    /// Street address.
    pub address: String,
    /// Zip code.
    pub zip_code: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Date hired.
    pub date_hired: NaiveDate,
    /// Resolved country name.
    pub country_name: Option<String>,
    /// Resolved state name.
    pub state_name: Option<String>,
    /// Resolved city name.
    pub city_name: Option<String>,
    /// Resolved department name.
    pub department_name: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Response body of `GET /employees`.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeListResponse {
    /// Matching employees in a stable order.
    pub rows: Vec<EmployeeRow>,
    /// One removable chip per active filter dimension.
    pub indicators: Vec<Indicator>,
    /// The tab the list was rendered under.
    pub tab: ListTab,
}

/// Response body of `GET /employees/:id`, the edit-form payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDetail {
    /// The stored record.
    pub employee: Employee,
    /// The form snapshot: current selection plus the option sets it allows,
    /// so the edit form opens pre-selected with valid choices.
    pub form: FormSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
        assert!(!json.contains("fields"));
    }

    #[test]
    fn test_validation_error_carries_fields() {
        let mut fields = ValidationErrors::new();
        fields.insert("phonecode".to_string(), vec!["must be at most 5 characters".to_string()]);
        let error = ApiError::validation(fields);
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["fields"]["phonecode"][0], "must be at most 5 characters");
    }

    #[test]
    fn test_list_response_serializes_chips_and_tab() {
        let response = EmployeeListResponse {
            rows: Vec::new(),
            indicators: vec![Indicator {
                label: "Created from Jan 1, 2024".to_string(),
                remove_field: "created_from",
            }],
            tab: ListTab::All,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["tab"], "all");
        assert_eq!(json["indicators"][0]["remove_field"], "created_from");
        assert_eq!(json["rows"], serde_json::json!([]));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let id = Uuid::new_v4();
        let response: ApiErrorResponse = AdminError::NotFound {
            resource: "employee",
            id,
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.error.code, "NOT_FOUND");
        assert!(response.error.message.contains(&id.to_string()));
    }

    #[test]
    fn test_validation_maps_to_422() {
        let error = AdminError::field_error("code", "must contain only digits");
        let response: ApiErrorResponse = error.into();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_seed_error_maps_to_500() {
        let response: ApiErrorResponse = AdminError::SeedNotFound {
            path: "/seed/geography.yaml".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.error.code, "SEED_ERROR");
    }
}
