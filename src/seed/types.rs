//! Seed file structures.
//!
//! These are deserialized from the YAML seed files. The geography file
//! nests states under countries and cities under states, so foreign keys
//! are implied by position and assigned at populate time.

use serde::Deserialize;

/// `geography.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct GeographySeed {
    /// The seeded countries with their nested states and cities.
    pub countries: Vec<CountrySeed>,
}

/// One country in the geography seed.
#[derive(Debug, Clone, Deserialize)]
pub struct CountrySeed {
    /// Display name of the country.
    pub name: String,
    /// Numeric country code as a string (keeps leading zeros).
    pub code: String,
    /// International phone code as a string.
    pub phonecode: String,
    /// States nested under this country.
    #[serde(default)]
    pub states: Vec<StateSeed>,
}

/// One state in the geography seed.
#[derive(Debug, Clone, Deserialize)]
pub struct StateSeed {
    /// Display name of the state.
    pub name: String,
    /// City names nested under this state.
    #[serde(default)]
    pub cities: Vec<String>,
}

/// `departments.yaml` file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentsSeed {
    /// Department names.
    pub departments: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geography_seed_parses_nested_structure() {
        let yaml = r#"
countries:
  - name: Australia
    code: "036"
    phonecode: "61"
    states:
      - name: Victoria
        cities:
          - Melbourne
          - Geelong
      - name: Queensland
"#;
        let seed: GeographySeed = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(seed.countries.len(), 1);
        assert_eq!(seed.countries[0].code, "036");
        assert_eq!(seed.countries[0].states.len(), 2);
        assert_eq!(seed.countries[0].states[0].cities, vec!["Melbourne", "Geelong"]);
        assert!(seed.countries[0].states[1].cities.is_empty());
    }

    #[test]
    fn test_departments_seed_parses() {
        let yaml = "departments:\n  - Engineering\n  - Sales\n";
        let seed: DepartmentsSeed = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(seed.departments, vec!["Engineering", "Sales"]);
    }
}
