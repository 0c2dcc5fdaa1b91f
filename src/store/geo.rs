//! Store for the geography hierarchy (countries, states, cities).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AdminError, AdminResult};
use crate::models::{City, Country, State};

/// Holds Country, State and City records.
///
/// Relationship traversal is exposed as explicit query methods keyed by
/// foreign key ([`GeoStore::states_of`], [`GeoStore::cities_of`]) rather
/// than navigable record links. Results are ordered by name with the id as
/// tie-break, so option sets derived from them are stable across calls.
#[derive(Debug, Default)]
pub struct GeoStore {
    countries: RwLock<HashMap<Uuid, Country>>,
    states: RwLock<HashMap<Uuid, State>>,
    cities: RwLock<HashMap<Uuid, City>>,
}

fn sorted_by_name<T, F: Fn(&T) -> (&str, Uuid)>(mut rows: Vec<T>, key: F) -> Vec<T> {
    rows.sort_by(|a, b| {
        let (an, ai) = key(a);
        let (bn, bi) = key(b);
        an.cmp(bn).then(ai.cmp(&bi))
    });
    rows
}

impl GeoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a country record.
    pub async fn insert_country(&self, country: Country) {
        self.countries.write().await.insert(country.id, country);
    }

    /// Inserts a state record.
    pub async fn insert_state(&self, state: State) {
        self.states.write().await.insert(state.id, state);
    }

    /// Inserts a city record.
    pub async fn insert_city(&self, city: City) {
        self.cities.write().await.insert(city.id, city);
    }

    /// Looks up a live (non-deleted) country by id.
    pub async fn country(&self, id: Uuid) -> Option<Country> {
        self.countries
            .read()
            .await
            .get(&id)
            .filter(|c| !c.is_deleted())
            .cloned()
    }

    /// Looks up a live (non-deleted) state by id.
    pub async fn state(&self, id: Uuid) -> Option<State> {
        self.states
            .read()
            .await
            .get(&id)
            .filter(|s| !s.is_deleted())
            .cloned()
    }

    /// Looks up a live (non-deleted) city by id.
    pub async fn city(&self, id: Uuid) -> Option<City> {
        self.cities
            .read()
            .await
            .get(&id)
            .filter(|c| !c.is_deleted())
            .cloned()
    }

    /// All live countries, ordered by name then id.
    pub async fn countries(&self) -> Vec<Country> {
        let rows: Vec<Country> = self
            .countries
            .read()
            .await
            .values()
            .filter(|c| !c.is_deleted())
            .cloned()
            .collect();
        sorted_by_name(rows, |c| (c.name.as_str(), c.id))
    }

    /// All live states of the given country, ordered by name then id.
    pub async fn states_of(&self, country_id: Uuid) -> Vec<State> {
        let rows: Vec<State> = self
            .states
            .read()
            .await
            .values()
            .filter(|s| s.country_id == country_id && !s.is_deleted())
            .cloned()
            .collect();
        sorted_by_name(rows, |s| (s.name.as_str(), s.id))
    }

    /// All live cities of the given state, ordered by name then id.
    pub async fn cities_of(&self, state_id: Uuid) -> Vec<City> {
        let rows: Vec<City> = self
            .cities
            .read()
            .await
            .values()
            .filter(|c| c.state_id == state_id && !c.is_deleted())
            .cloned()
            .collect();
        sorted_by_name(rows, |c| (c.name.as_str(), c.id))
    }

    /// Resolves display names for a location triple, including soft-deleted
    /// records so saved employees keep rendering after a retirement.
    pub async fn location_names(
        &self,
        country_id: Uuid,
        state_id: Uuid,
        city_id: Uuid,
    ) -> (Option<String>, Option<String>, Option<String>) {
        let country = self
            .countries
            .read()
            .await
            .get(&country_id)
            .map(|c| c.name.clone());
        let state = self
            .states
            .read()
            .await
            .get(&state_id)
            .map(|s| s.name.clone());
        let city = self
            .cities
            .read()
            .await
            .get(&city_id)
            .map(|c| c.name.clone());
        (country, state, city)
    }

    /// Applies an edit to a live country and bumps `updated_at`.
    pub async fn update_country<F>(&self, id: Uuid, now: DateTime<Utc>, apply: F) -> AdminResult<Country>
    where
        F: FnOnce(&mut Country),
    {
        let mut countries = self.countries.write().await;
        let country = countries
            .get_mut(&id)
            .filter(|c| !c.is_deleted())
            .ok_or(AdminError::NotFound {
                resource: "country",
                id,
            })?;
        apply(country);
        country.updated_at = now;
        Ok(country.clone())
    }

    /// Soft-deletes a country. Its states become unreachable through the
    /// selector but remain stored.
    pub async fn soft_delete_country(&self, id: Uuid, now: DateTime<Utc>) -> AdminResult<()> {
        let mut countries = self.countries.write().await;
        let country = countries
            .get_mut(&id)
            .filter(|c| !c.is_deleted())
            .ok_or(AdminError::NotFound {
                resource: "country",
                id,
            })?;
        country.deleted_at = Some(now);
        country.updated_at = now;
        Ok(())
    }

    /// Restores a soft-deleted country.
    pub async fn restore_country(&self, id: Uuid, now: DateTime<Utc>) -> AdminResult<Country> {
        let mut countries = self.countries.write().await;
        let country = countries
            .get_mut(&id)
            .filter(|c| c.is_deleted())
            .ok_or(AdminError::NotFound {
                resource: "country",
                id,
            })?;
        country.deleted_at = None;
        country.updated_at = now;
        Ok(country.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str) -> Country {
        Country {
            id: Uuid::new_v4(),
            name: name.to_string(),
            code: "1".to_string(),
            phonecode: "1".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    fn state(name: &str, country_id: Uuid) -> State {
        State {
            id: Uuid::new_v4(),
            name: name.to_string(),
            country_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    fn city(name: &str, state_id: Uuid) -> City {
        City {
            id: Uuid::new_v4(),
            name: name.to_string(),
            state_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        }
    }

    #[tokio::test]
    async fn test_countries_ordered_by_name() {
        let store = GeoStore::new();
        store.insert_country(country("Chile")).await;
        store.insert_country(country("Australia")).await;
        store.insert_country(country("Brazil")).await;

        let names: Vec<String> = store.countries().await.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Australia", "Brazil", "Chile"]);
    }

    #[tokio::test]
    async fn test_states_of_returns_only_matching_country() {
        let store = GeoStore::new();
        let au = country("Australia");
        let nz = country("New Zealand");
        let au_id = au.id;
        let nz_id = nz.id;
        store.insert_country(au).await;
        store.insert_country(nz).await;
        store.insert_state(state("Victoria", au_id)).await;
        store.insert_state(state("Queensland", au_id)).await;
        store.insert_state(state("Otago", nz_id)).await;

        let states = store.states_of(au_id).await;
        assert_eq!(states.len(), 2);
        assert_eq!(states[0].name, "Queensland");
        assert_eq!(states[1].name, "Victoria");
    }

    #[tokio::test]
    async fn test_cities_of_empty_for_unknown_state() {
        let store = GeoStore::new();
        assert!(store.cities_of(Uuid::new_v4()).await.is_empty());
    }

    #[tokio::test]
    async fn test_soft_delete_hides_country_from_reads() {
        let store = GeoStore::new();
        let c = country("Australia");
        let id = c.id;
        store.insert_country(c).await;

        store.soft_delete_country(id, Utc::now()).await.unwrap();
        assert!(store.country(id).await.is_none());
        assert!(store.countries().await.is_empty());

        // A second delete of the same record is a not-found.
        assert!(store.soft_delete_country(id, Utc::now()).await.is_err());
    }

    #[tokio::test]
    async fn test_restore_brings_country_back() {
        let store = GeoStore::new();
        let c = country("Australia");
        let id = c.id;
        store.insert_country(c).await;
        store.soft_delete_country(id, Utc::now()).await.unwrap();

        let restored = store.restore_country(id, Utc::now()).await.unwrap();
        assert!(restored.deleted_at.is_none());
        assert!(store.country(id).await.is_some());
    }

    #[tokio::test]
    async fn test_restore_of_live_country_is_not_found() {
        let store = GeoStore::new();
        let c = country("Australia");
        let id = c.id;
        store.insert_country(c).await;
        assert!(store.restore_country(id, Utc::now()).await.is_err());
    }

    #[tokio::test]
    async fn test_update_country_bumps_updated_at() {
        let store = GeoStore::new();
        let c = country("Astralia");
        let id = c.id;
        let created = c.updated_at;
        store.insert_country(c).await;

        let later = created + chrono::Duration::seconds(5);
        let updated = store
            .update_country(id, later, |c| c.name = "Australia".to_string())
            .await
            .unwrap();
        assert_eq!(updated.name, "Australia");
        assert_eq!(updated.updated_at, later);
    }

    #[tokio::test]
    async fn test_location_names_include_deleted_records() {
        let store = GeoStore::new();
        let c = country("Australia");
        let c_id = c.id;
        let s = state("Victoria", c_id);
        let s_id = s.id;
        let y = city("Geelong", s_id);
        let y_id = y.id;
        store.insert_country(c).await;
        store.insert_state(s).await;
        store.insert_city(y).await;
        store.soft_delete_country(c_id, Utc::now()).await.unwrap();

        let (country, state, city) = store.location_names(c_id, s_id, y_id).await;
        assert_eq!(country.as_deref(), Some("Australia"));
        assert_eq!(state.as_deref(), Some("Victoria"));
        assert_eq!(city.as_deref(), Some("Geelong"));
    }
}
