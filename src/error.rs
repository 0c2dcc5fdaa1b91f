//! Error types for the back-office service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while serving admin requests.

use std::collections::BTreeMap;

use thiserror::Error;
use uuid::Uuid;

/// Field-scoped validation messages, keyed by field name.
///
/// A `BTreeMap` keeps the field order deterministic so error responses
/// render the same way in every run.
pub type ValidationErrors = BTreeMap<String, Vec<String>>;

/// The main error type for the back-office service.
///
/// All fallible operations in the service return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use staff_admin::error::AdminError;
///
/// let error = AdminError::SeedNotFound {
///     path: "/missing/geography.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Seed file not found: /missing/geography.yaml");
/// ```
#[derive(Debug, Error)]
pub enum AdminError {
    /// Seed data file was not found at the specified path.
    #[error("Seed file not found: {path}")]
    SeedNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Seed data file could not be parsed.
    #[error("Failed to parse seed file '{path}': {message}")]
    SeedParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A record was not found in its store.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// The resource kind, e.g. "country" or "employee".
        resource: &'static str,
        /// The id that was looked up.
        id: Uuid,
    },

    /// A form submission failed field-level validation.
    ///
    /// No partial save occurs; every offending field carries at least one
    /// message.
    #[error("Validation failed for {} field(s)", .0.len())]
    Validation(ValidationErrors),
}

impl AdminError {
    /// Builds a validation error for a single field.
    pub fn field_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.insert(field.into(), vec![message.into()]);
        AdminError::Validation(errors)
    }
}

/// A type alias for Results that return AdminError.
pub type AdminResult<T> = Result<T, AdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_not_found_displays_path() {
        let error = AdminError::SeedNotFound {
            path: "/missing/geography.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Seed file not found: /missing/geography.yaml"
        );
    }

    #[test]
    fn test_seed_parse_displays_path_and_message() {
        let error = AdminError::SeedParse {
            path: "/seed/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse seed file '/seed/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_not_found_displays_resource_and_id() {
        let id = Uuid::nil();
        let error = AdminError::NotFound {
            resource: "country",
            id,
        };
        assert_eq!(
            error.to_string(),
            format!("country not found: {}", id)
        );
    }

    #[test]
    fn test_validation_counts_fields() {
        let mut errors = ValidationErrors::new();
        errors.insert("code".to_string(), vec!["must be numeric".to_string()]);
        errors.insert(
            "phonecode".to_string(),
            vec!["must be at most 5 characters".to_string()],
        );
        let error = AdminError::Validation(errors);
        assert_eq!(error.to_string(), "Validation failed for 2 field(s)");
    }

    #[test]
    fn test_field_error_builds_single_entry() {
        let error = AdminError::field_error("state_id", "does not belong to the selected country");
        match error {
            AdminError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(
                    errors["state_id"],
                    vec!["does not belong to the selected country".to_string()]
                );
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<AdminError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_seed_not_found() -> AdminResult<()> {
            Err(AdminError::SeedNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> AdminResult<()> {
            returns_seed_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
