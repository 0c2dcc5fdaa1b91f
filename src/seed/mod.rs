//! Seed data loading for the back-office stores.
//!
//! This module loads the initial geography hierarchy and department list
//! from YAML files and populates the in-memory stores at startup.
//!
//! # Example
//!
//! ```no_run
//! use staff_admin::seed::SeedLoader;
//!
//! let seed = SeedLoader::load("./seed").unwrap();
//! println!("Seeding {} countries", seed.geography().countries.len());
//! ```

mod loader;
mod types;

pub use loader::SeedLoader;
pub use types::{CountrySeed, DepartmentsSeed, GeographySeed, StateSeed};
