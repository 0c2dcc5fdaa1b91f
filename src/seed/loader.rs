//! Seed loading functionality.

use std::fs;
use std::path::Path;

use chrono::Utc;
use uuid::Uuid;

use crate::error::{AdminError, AdminResult};
use crate::models::{City, Country, Department, State};
use crate::store::{DepartmentStore, GeoStore};

use super::types::{DepartmentsSeed, GeographySeed};

/// Loads seed data and populates the stores.
///
/// # Directory Structure
///
/// The seed directory should have the following structure:
/// ```text
/// seed/
/// ├── geography.yaml    # Countries with nested states and cities
/// └── departments.yaml  # Flat department list
/// ```
///
/// # Example
///
/// ```no_run
/// use staff_admin::seed::SeedLoader;
/// use staff_admin::store::{DepartmentStore, GeoStore};
///
/// # async fn run() -> Result<(), staff_admin::error::AdminError> {
/// let seed = SeedLoader::load("./seed")?;
/// let geo = GeoStore::new();
/// let departments = DepartmentStore::new();
/// seed.populate(&geo, &departments).await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SeedLoader {
    geography: GeographySeed,
    departments: DepartmentsSeed,
}

impl SeedLoader {
    /// Loads seed data from the specified directory.
    ///
    /// Returns an error if either file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> AdminResult<Self> {
        let path = path.as_ref();

        let geography = Self::load_yaml::<GeographySeed>(&path.join("geography.yaml"))?;
        let departments = Self::load_yaml::<DepartmentsSeed>(&path.join("departments.yaml"))?;

        Ok(Self {
            geography,
            departments,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> AdminResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AdminError::SeedNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AdminError::SeedParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded geography seed.
    pub fn geography(&self) -> &GeographySeed {
        &self.geography
    }

    /// Returns the loaded departments seed.
    pub fn departments(&self) -> &DepartmentsSeed {
        &self.departments
    }

    /// Inserts the seeded records into the stores.
    ///
    /// Foreign keys follow the nesting of the geography file: each state
    /// gets its enclosing country's id, each city its enclosing state's.
    pub async fn populate(&self, geo: &GeoStore, departments: &DepartmentStore) {
        let now = Utc::now();

        for country_seed in &self.geography.countries {
            let country = Country {
                id: Uuid::new_v4(),
                name: country_seed.name.clone(),
                code: country_seed.code.clone(),
                phonecode: country_seed.phonecode.clone(),
                created_at: now,
                updated_at: now,
                deleted_at: None,
            };
            let country_id = country.id;
            geo.insert_country(country).await;

            for state_seed in &country_seed.states {
                let state = State {
                    id: Uuid::new_v4(),
                    name: state_seed.name.clone(),
                    country_id,
                    created_at: now,
                    updated_at: now,
                    deleted_at: None,
                };
                let state_id = state.id;
                geo.insert_state(state).await;

                for city_name in &state_seed.cities {
                    geo.insert_city(City {
                        id: Uuid::new_v4(),
                        name: city_name.clone(),
                        state_id,
                        created_at: now,
                        updated_at: now,
                        deleted_at: None,
                    })
                    .await;
                }
            }
        }

        for name in &self.departments.departments {
            departments
                .insert(Department {
                    id: Uuid::new_v4(),
                    name: name.clone(),
                    created_at: now,
                    updated_at: now,
                    deleted_at: None,
                })
                .await;
        }
    }
}
