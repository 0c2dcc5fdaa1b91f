//! Core data models for the back-office service.
//!
//! This module contains all the domain entities managed by the admin panel.

mod department;
mod employee;
mod geo;

pub use department::Department;
pub use employee::Employee;
pub use geo::{City, Country, State};
