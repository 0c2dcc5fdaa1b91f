//! HTTP API module for the back-office service.
//!
//! This module provides the REST endpoints the admin UI drives: CRUD for
//! countries and employees, the cascading selector refresh, and option-set
//! lookups for the form's select fields.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CountryListParams, CountryPayload, EmployeePayload, FormRefreshRequest, OptionParams,
    ValidCountry, ValidEmployee,
};
pub use response::{ApiError, ApiErrorResponse, EmployeeDetail, EmployeeListResponse, EmployeeRow};
pub use state::AppState;
