//! Declarative resource schemas.
//!
//! Each CRUD surface is described by plain data: a list of field
//! descriptors with display metadata and validation rules, consumed by a
//! generic validator (and, on the client, a generic form renderer). This
//! replaces per-resource validation code with per-resource tables.

mod country;
mod employee;

pub use country::COUNTRY_SCHEMA;
pub use employee::EMPLOYEE_SCHEMA;

use chrono::NaiveDate;

use crate::error::ValidationErrors;

/// A validation rule attached to a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The field must be present and non-empty at submit time.
    Required,
    /// Text value must be at most this many characters.
    MaxLength(usize),
    /// Text value must consist solely of ASCII digits.
    Numeric,
    /// Date value must not be in the future.
    PastOrPresent,
}

/// A submitted value for one field, as seen by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// The field was absent from the submission.
    Missing,
    /// A text input value.
    Text(&'a str),
    /// A date input value.
    Date(NaiveDate),
    /// A reference (select) value. Existence checks happen elsewhere; the
    /// schema only cares that a choice was made.
    Reference,
}

impl FieldValue<'_> {
    fn is_empty(&self) -> bool {
        match self {
            FieldValue::Missing => true,
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Date(_) | FieldValue::Reference => false,
        }
    }
}

/// Describes one form field of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The field's submission name, e.g. `"phonecode"`.
    pub name: &'static str,
    /// Human-readable label for rendering.
    pub label: &'static str,
    /// The form section the field is rendered under.
    pub section: &'static str,
    /// Validation rules, applied in order.
    pub rules: &'static [Rule],
}

/// Describes one resource's form: its name and its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    /// The resource kind, e.g. `"country"`.
    pub resource: &'static str,
    /// The declared form fields.
    pub fields: &'static [FieldDescriptor],
}

impl Rule {
    /// Checks one rule against one value; `None` means it passed.
    ///
    /// Emptiness is only [`Rule::Required`]'s concern: the other rules skip
    /// missing/empty values so one absent field reports one message.
    fn check(&self, value: &FieldValue<'_>, today: NaiveDate) -> Option<String> {
        match self {
            Rule::Required => value.is_empty().then(|| "is required".to_string()),
            Rule::MaxLength(max) => match value {
                FieldValue::Text(text) if text.chars().count() > *max => {
                    Some(format!("must be at most {max} characters"))
                }
                _ => None,
            },
            Rule::Numeric => match value {
                FieldValue::Text(text)
                    if !text.trim().is_empty()
                        && !text.chars().all(|c| c.is_ascii_digit()) =>
                {
                    Some("must contain only digits".to_string())
                }
                _ => None,
            },
            Rule::PastOrPresent => match value {
                FieldValue::Date(date) if *date > today => {
                    Some("cannot be in the future".to_string())
                }
                _ => None,
            },
        }
    }
}

impl ResourceSchema {
    /// Looks up a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validates a submission against every declared field.
    ///
    /// `values` pairs field names with submitted values; fields without an
    /// entry are treated as [`FieldValue::Missing`]. `today` anchors the
    /// [`Rule::PastOrPresent`] check. All failures are collected, so the
    /// caller gets every field's messages in one pass and no partial save
    /// happens on error.
    pub fn validate(
        &self,
        values: &[(&str, FieldValue<'_>)],
        today: NaiveDate,
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        for field in self.fields {
            let value = values
                .iter()
                .find(|(name, _)| *name == field.name)
                .map(|(_, value)| *value)
                .unwrap_or(FieldValue::Missing);

            let messages: Vec<String> = field
                .rules
                .iter()
                .filter_map(|rule| rule.check(&value, today))
                .collect();
            if !messages.is_empty() {
                errors.insert(field.name.to_string(), messages);
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
