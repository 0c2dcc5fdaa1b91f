//! Cascading location selector for the employee form.
//!
//! The form presents three linked choice fields (Country → State → City)
//! plus an independent Department choice. The dependency between fields is
//! an explicit graph: each field declares its parent, and a changed field
//! clears every transitive descendant before option sets are re-derived
//! from the (possibly cleared) parent values.
//!
//! Clearing is pure UI state; nothing here touches persisted records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationErrors;
use crate::store::{DepartmentStore, GeoStore};

/// The choice fields on the employee form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectField {
    /// The country field, root of the location chain.
    #[serde(rename = "country_id")]
    Country,
    /// The state field, dependent on country.
    #[serde(rename = "state_id")]
    State,
    /// The city field, dependent on state.
    #[serde(rename = "city_id")]
    City,
    /// The department field, independent of the location chain.
    #[serde(rename = "department_id")]
    Department,
}

/// Field dependency declarations: `(field, parent)`.
///
/// The controller derives all cascade behavior from this table; adding a new
/// dependent field means adding a row, not new control flow.
const DEPENDENCIES: [(SelectField, Option<SelectField>); 4] = [
    (SelectField::Country, None),
    (SelectField::State, Some(SelectField::Country)),
    (SelectField::City, Some(SelectField::State)),
    (SelectField::Department, None),
];

/// Returns the declared parent of a field, if any.
pub fn parent_of(field: SelectField) -> Option<SelectField> {
    DEPENDENCIES
        .iter()
        .find(|(f, _)| *f == field)
        .and_then(|(_, parent)| *parent)
}

/// Returns every transitive descendant of a field, nearest first.
pub fn descendants_of(field: SelectField) -> Vec<SelectField> {
    let mut result = Vec::new();
    let mut frontier = vec![field];
    while let Some(current) = frontier.pop() {
        for (child, parent) in DEPENDENCIES {
            if parent == Some(current) {
                result.push(child);
                frontier.push(child);
            }
        }
    }
    result
}

/// One entry in a select field's option set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionItem {
    /// The value submitted when this option is chosen.
    pub id: Uuid,
    /// The text shown for this option.
    pub label: String,
}

/// The current values of the form's choice fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSelection {
    /// Selected country, if any.
    pub country_id: Option<Uuid>,
    /// Selected state, if any.
    pub state_id: Option<Uuid>,
    /// Selected city, if any.
    pub city_id: Option<Uuid>,
    /// Selected department, if any.
    pub department_id: Option<Uuid>,
}

impl LocationSelection {
    fn clear(&mut self, field: SelectField) {
        match field {
            SelectField::Country => self.country_id = None,
            SelectField::State => self.state_id = None,
            SelectField::City => self.city_id = None,
            SelectField::Department => self.department_id = None,
        }
    }
}

/// Option sets for all four choice fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Options for the country field.
    pub countries: Vec<OptionItem>,
    /// Options for the state field; empty when no country is selected.
    pub states: Vec<OptionItem>,
    /// Options for the city field; empty when no state is selected.
    pub cities: Vec<OptionItem>,
    /// Options for the department field.
    pub departments: Vec<OptionItem>,
}

/// A refreshed form: cleared values plus the option sets derived from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    /// The selection after descendant clearing.
    pub values: LocationSelection,
    /// The option sets for each field.
    pub options: FieldOptions,
}

/// Drives the dependent dropdown behavior of the employee form.
pub struct SelectorController<'a> {
    geo: &'a GeoStore,
    departments: &'a DepartmentStore,
}

impl<'a> SelectorController<'a> {
    /// Creates a controller over the given stores.
    pub fn new(geo: &'a GeoStore, departments: &'a DepartmentStore) -> Self {
        Self { geo, departments }
    }

    /// Re-evaluates the form after a field change.
    ///
    /// When `changed` is given, every transitive descendant of that field is
    /// cleared first; option sets are then derived from the remaining
    /// values. With `changed = None` (initial or edit-form load) the
    /// selection is kept as-is.
    pub async fn refresh(
        &self,
        mut selection: LocationSelection,
        changed: Option<SelectField>,
    ) -> FormSnapshot {
        if let Some(changed) = changed {
            for descendant in descendants_of(changed) {
                selection.clear(descendant);
            }
        }

        let states = match selection.country_id {
            Some(country_id) => self.state_options(country_id, None).await,
            None => Vec::new(),
        };
        let cities = match selection.state_id {
            Some(state_id) => self.city_options(state_id, None).await,
            None => Vec::new(),
        };

        FormSnapshot {
            values: selection,
            options: FieldOptions {
                countries: self.country_options(None).await,
                states,
                cities,
                departments: self.department_options(None).await,
            },
        }
    }

    /// Option set for the country field, optionally narrowed by search text.
    pub async fn country_options(&self, search: Option<&str>) -> Vec<OptionItem> {
        narrow(
            self.geo
                .countries()
                .await
                .into_iter()
                .map(|c| OptionItem { id: c.id, label: c.name })
                .collect(),
            search,
        )
    }

    /// Option set for the state field given the selected country.
    pub async fn state_options(&self, country_id: Uuid, search: Option<&str>) -> Vec<OptionItem> {
        narrow(
            self.geo
                .states_of(country_id)
                .await
                .into_iter()
                .map(|s| OptionItem { id: s.id, label: s.name })
                .collect(),
            search,
        )
    }

    /// Option set for the city field given the selected state.
    pub async fn city_options(&self, state_id: Uuid, search: Option<&str>) -> Vec<OptionItem> {
        narrow(
            self.geo
                .cities_of(state_id)
                .await
                .into_iter()
                .map(|c| OptionItem { id: c.id, label: c.name })
                .collect(),
            search,
        )
    }

    /// Option set for the department field.
    pub async fn department_options(&self, search: Option<&str>) -> Vec<OptionItem> {
        narrow(
            self.departments
                .all()
                .await
                .into_iter()
                .map(|d| OptionItem { id: d.id, label: d.name })
                .collect(),
            search,
        )
    }

    /// Verifies that a complete selection is internally consistent.
    ///
    /// Every referenced record must exist (and not be soft-deleted), the
    /// state must belong to the country and the city to the state. Failures
    /// come back as field-scoped messages, ready to merge into a form's
    /// validation result.
    pub async fn check_consistency(
        &self,
        country_id: Uuid,
        state_id: Uuid,
        city_id: Uuid,
        department_id: Uuid,
    ) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.geo.country(country_id).await.is_none() {
            errors.insert(
                "country_id".to_string(),
                vec!["selected country does not exist".to_string()],
            );
        }

        match self.geo.state(state_id).await {
            None => {
                errors.insert(
                    "state_id".to_string(),
                    vec!["selected state does not exist".to_string()],
                );
            }
            Some(state) if state.country_id != country_id => {
                errors.insert(
                    "state_id".to_string(),
                    vec!["does not belong to the selected country".to_string()],
                );
            }
            Some(_) => {}
        }

        match self.geo.city(city_id).await {
            None => {
                errors.insert(
                    "city_id".to_string(),
                    vec!["selected city does not exist".to_string()],
                );
            }
            Some(city) if city.state_id != state_id => {
                errors.insert(
                    "city_id".to_string(),
                    vec!["does not belong to the selected state".to_string()],
                );
            }
            Some(_) => {}
        }

        if self.departments.get(department_id).await.is_none() {
            errors.insert(
                "department_id".to_string(),
                vec!["selected department does not exist".to_string()],
            );
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn narrow(options: Vec<OptionItem>, search: Option<&str>) -> Vec<OptionItem> {
    match search.map(str::trim).filter(|s| !s.is_empty()) {
        Some(needle) => {
            let needle = needle.to_lowercase();
            options
                .into_iter()
                .filter(|o| o.label.to_lowercase().contains(&needle))
                .collect()
        }
        None => options,
    }
}
