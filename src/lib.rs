//! Back-office service for managing employee records.
//!
//! This crate provides the server side of an administrative panel for
//! employee records organized by geography (Country → State → City) and
//! department. It exposes CRUD surfaces for countries and employees, a
//! cascading location selector for the employee form, and a filterable
//! employee list with removable indicator chips.

#![warn(missing_docs)]

pub mod api;
pub mod error;
pub mod filter;
pub mod models;
pub mod resource;
pub mod seed;
pub mod selector;
pub mod store;
