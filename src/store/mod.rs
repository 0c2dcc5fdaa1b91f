//! In-memory record stores with soft-delete semantics.
//!
//! The stores are the explicit repository layer of the service: every
//! relationship lookup is a query method taking a foreign key and returning
//! an ordered sequence of records. Deleted records stay in the maps with a
//! `deleted_at` marker and can be restored; reads skip them unless a method
//! says otherwise.

mod department;
mod employee;
mod geo;

pub use department::DepartmentStore;
pub use employee::EmployeeStore;
pub use geo::GeoStore;
