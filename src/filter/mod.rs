//! Employee list filtering and indicator chips.
//!
//! Translates the list page's filter form input (department, created-at date
//! range, preset tab) into a conjunctive predicate over employee records and
//! into human-readable, removable indicator chips, one per active filter
//! dimension.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationErrors;
use crate::models::Employee;

/// Preset tabs offered above the employee list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListTab {
    /// No constraint.
    #[default]
    All,
    /// Employees hired within the trailing 7 days from now, inclusive.
    ThisWeek,
}

/// A removable token summarizing one active filter dimension.
///
/// `remove_field` names the query parameter the client clears to drop this
/// filter; clearing it and re-issuing the query is the "remove chip" action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    /// Human-readable chip text, e.g. `"Created from Jan 1, 2024"`.
    pub label: String,
    /// The query field removing this chip clears.
    pub remove_field: &'static str,
}

/// A parsed employee list filter.
///
/// Absent dimensions impose no constraint; present dimensions combine with
/// AND. Date bounds are inclusive at calendar-day granularity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFilter {
    /// Exact-match department constraint.
    pub department_id: Option<Uuid>,
    /// Lower bound (inclusive) on the record's creation day.
    pub created_from: Option<NaiveDate>,
    /// Upper bound (inclusive) on the record's creation day.
    pub created_until: Option<NaiveDate>,
    /// The selected preset tab.
    pub tab: ListTab,
    /// Case-insensitive substring search over name, address and zip code.
    pub search: Option<String>,
}

/// Raw query-string values for the employee list, before parsing.
///
/// Empty strings are what a cleared chip submits and are treated as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterParams {
    /// Department id, as submitted.
    pub department_id: Option<String>,
    /// Range start date, as submitted (`YYYY-MM-DD`).
    pub created_from: Option<String>,
    /// Range end date, as submitted (`YYYY-MM-DD`).
    pub created_until: Option<String>,
    /// Tab name: `all` or `this_week`.
    pub tab: Option<String>,
    /// Free-text search.
    pub search: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl EmployeeFilter {
    /// Parses raw query-string values into a filter.
    ///
    /// Empty values are treated as absent; syntactically invalid values are
    /// reported as field-scoped validation errors rather than silently
    /// dropped.
    pub fn parse(params: &FilterParams) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut filter = EmployeeFilter::default();

        if let Some(raw) = non_empty(&params.department_id) {
            match raw.parse::<Uuid>() {
                Ok(id) => filter.department_id = Some(id),
                Err(_) => {
                    errors.insert(
                        "department_id".to_string(),
                        vec!["must be a valid id".to_string()],
                    );
                }
            }
        }

        for (field, raw, slot) in [
            ("created_from", &params.created_from, &mut filter.created_from),
            ("created_until", &params.created_until, &mut filter.created_until),
        ] {
            if let Some(value) = non_empty(raw) {
                match value.parse::<NaiveDate>() {
                    Ok(date) => *slot = Some(date),
                    Err(_) => {
                        errors.insert(
                            field.to_string(),
                            vec!["must be a date in YYYY-MM-DD format".to_string()],
                        );
                    }
                }
            }
        }

        match non_empty(&params.tab) {
            None | Some("all") => {}
            Some("this_week") => filter.tab = ListTab::ThisWeek,
            Some(_) => {
                errors.insert(
                    "tab".to_string(),
                    vec!["must be one of: all, this_week".to_string()],
                );
            }
        }

        filter.search = non_empty(&params.search).map(str::to_string);

        if errors.is_empty() { Ok(filter) } else { Err(errors) }
    }

    /// Returns true when the employee satisfies every active dimension.
    ///
    /// `now` anchors the This Week tab's trailing window.
    pub fn matches(&self, employee: &Employee, now: DateTime<Utc>) -> bool {
        if let Some(department_id) = self.department_id {
            if employee.department_id != department_id {
                return false;
            }
        }

        let created_day = employee.created_at.date_naive();
        if let Some(from) = self.created_from {
            if created_day < from {
                return false;
            }
        }
        if let Some(until) = self.created_until {
            if created_day > until {
                return false;
            }
        }

        if self.tab == ListTab::ThisWeek {
            let week_ago = (now - Duration::days(7)).date_naive();
            if employee.date_hired < week_ago {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let haystacks = [
                &employee.first_name,
                &employee.middle_name,
                &employee.last_name,
                &employee.address,
                &employee.zip_code,
            ];
            if !haystacks
                .iter()
                .any(|h| h.to_lowercase().contains(&needle))
            {
                return false;
            }
        }

        true
    }

    /// Builds one indicator chip per active filter dimension.
    ///
    /// `department_name` is the display name for the selected department, if
    /// one is selected and resolvable; the chip falls back to the raw id.
    pub fn indicators(&self, department_name: Option<&str>) -> Vec<Indicator> {
        let mut chips = Vec::new();

        if let Some(department_id) = self.department_id {
            let label = match department_name {
                Some(name) => format!("Department: {name}"),
                None => format!("Department: {department_id}"),
            };
            chips.push(Indicator {
                label,
                remove_field: "department_id",
            });
        }

        if let Some(from) = self.created_from {
            chips.push(Indicator {
                label: format!("Created from {}", format_chip_date(from)),
                remove_field: "created_from",
            });
        }

        if let Some(until) = self.created_until {
            chips.push(Indicator {
                label: format!("Created until {}", format_chip_date(until)),
                remove_field: "created_until",
            });
        }

        chips
    }
}

/// Formats a date the way chips display it, e.g. `Jan 1, 2024`.
fn format_chip_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn employee_created(created_at: DateTime<Utc>) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            first_name: "Jo".to_string(),
            middle_name: "Q".to_string(),
            last_name: "Public".to_string(),
            address: "1 Main St".to_string(),
            zip_code: "3000".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 4).unwrap(),
            date_hired: NaiveDate::from_ymd_opt(2023, 2, 1).unwrap(),
            country_id: Uuid::new_v4(),
            state_id: Uuid::new_v4(),
            city_id: Uuid::new_v4(),
            department_id: Uuid::new_v4(),
            created_at,
            updated_at: created_at,
            deleted_at: None,
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_date_range_is_inclusive_on_both_bounds() {
        let filter = EmployeeFilter {
            created_from: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            created_until: Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
            ..Default::default()
        };
        let now = at(2024, 6, 1);

        assert!(filter.matches(&employee_created(at(2024, 1, 1)), now));
        assert!(filter.matches(&employee_created(at(2024, 1, 31)), now));
        assert!(!filter.matches(&employee_created(at(2023, 12, 31)), now));
        assert!(!filter.matches(&employee_created(at(2024, 2, 1)), now));
    }

    #[test]
    fn test_either_bound_may_stand_alone() {
        let from_only = EmployeeFilter {
            created_from: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            ..Default::default()
        };
        let until_only = EmployeeFilter {
            created_until: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            ..Default::default()
        };
        let now = at(2024, 6, 1);

        assert!(from_only.matches(&employee_created(at(2025, 3, 3)), now));
        assert!(!from_only.matches(&employee_created(at(2023, 3, 3)), now));
        assert!(until_only.matches(&employee_created(at(2023, 3, 3)), now));
        assert!(!until_only.matches(&employee_created(at(2025, 3, 3)), now));
    }

    #[test]
    fn test_department_filter_is_exact_match() {
        let department_id = Uuid::new_v4();
        let filter = EmployeeFilter {
            department_id: Some(department_id),
            ..Default::default()
        };
        let now = Utc::now();

        let mut matching = employee_created(now);
        matching.department_id = department_id;
        let other = employee_created(now);

        assert!(filter.matches(&matching, now));
        assert!(!filter.matches(&other, now));
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let department_id = Uuid::new_v4();
        let filter = EmployeeFilter {
            department_id: Some(department_id),
            created_from: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            ..Default::default()
        };
        let now = at(2024, 6, 1);

        // Right department, wrong date.
        let mut employee = employee_created(at(2023, 5, 5));
        employee.department_id = department_id;
        assert!(!filter.matches(&employee, now));
    }

    #[test]
    fn test_this_week_tab_window_is_inclusive() {
        let filter = EmployeeFilter {
            tab: ListTab::ThisWeek,
            ..Default::default()
        };
        let now = at(2024, 3, 15);

        let mut on_boundary = employee_created(now);
        on_boundary.date_hired = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        assert!(filter.matches(&on_boundary, now));

        let mut outside = employee_created(now);
        outside.date_hired = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert!(!filter.matches(&outside, now));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filter = EmployeeFilter {
            search: Some("pub".to_string()),
            ..Default::default()
        };
        let now = Utc::now();
        assert!(filter.matches(&employee_created(now), now));

        let miss = EmployeeFilter {
            search: Some("nomatch".to_string()),
            ..Default::default()
        };
        assert!(!miss.matches(&employee_created(now), now));
    }

    #[test]
    fn test_active_range_produces_exactly_two_chips() {
        let filter = EmployeeFilter {
            created_from: Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            created_until: Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()),
            ..Default::default()
        };
        let chips = filter.indicators(None);
        assert_eq!(chips.len(), 2);
        assert_eq!(chips[0].label, "Created from Jan 1, 2024");
        assert_eq!(chips[0].remove_field, "created_from");
        assert_eq!(chips[1].label, "Created until Jan 31, 2024");
        assert_eq!(chips[1].remove_field, "created_until");
    }

    #[test]
    fn test_department_chip_uses_resolved_name() {
        let filter = EmployeeFilter {
            department_id: Some(Uuid::new_v4()),
            ..Default::default()
        };
        let chips = filter.indicators(Some("Engineering"));
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].label, "Department: Engineering");
        assert_eq!(chips[0].remove_field, "department_id");
    }

    #[test]
    fn test_chip_serializes_label_and_remove_field() {
        let chip = Indicator {
            label: "Department: Engineering".to_string(),
            remove_field: "department_id",
        };
        let json = serde_json::to_value(&chip).unwrap();
        assert_eq!(json["label"], "Department: Engineering");
        assert_eq!(json["remove_field"], "department_id");
    }

    #[test]
    fn test_no_active_filters_no_chips() {
        assert!(EmployeeFilter::default().indicators(None).is_empty());
    }

    #[test]
    fn test_parse_treats_empty_strings_as_absent() {
        let params = FilterParams {
            department_id: Some(String::new()),
            created_from: Some("  ".to_string()),
            created_until: None,
            tab: Some(String::new()),
            search: Some(String::new()),
        };
        let filter = EmployeeFilter::parse(&params).unwrap();
        assert_eq!(filter, EmployeeFilter::default());
    }

    #[test]
    fn test_parse_valid_params() {
        let id = Uuid::new_v4();
        let params = FilterParams {
            department_id: Some(id.to_string()),
            created_from: Some("2024-01-01".to_string()),
            created_until: Some("2024-01-31".to_string()),
            tab: Some("this_week".to_string()),
            search: Some("smith".to_string()),
        };
        let filter = EmployeeFilter::parse(&params).unwrap();
        assert_eq!(filter.department_id, Some(id));
        assert_eq!(
            filter.created_from,
            Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(
            filter.created_until,
            Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())
        );
        assert_eq!(filter.tab, ListTab::ThisWeek);
        assert_eq!(filter.search.as_deref(), Some("smith"));
    }

    #[test]
    fn test_parse_rejects_malformed_values_per_field() {
        let params = FilterParams {
            department_id: Some("not-a-uuid".to_string()),
            created_from: Some("01/02/2024".to_string()),
            created_until: None,
            tab: Some("last_month".to_string()),
            search: None,
        };
        let errors = EmployeeFilter::parse(&params).unwrap_err();
        assert!(errors.contains_key("department_id"));
        assert!(errors.contains_key("created_from"));
        assert!(errors.contains_key("tab"));
        assert_eq!(errors.len(), 3);
    }
}
