//! HTTP request handlers for the back-office API.
//!
//! This module contains the handler functions for all admin endpoints:
//! country and employee CRUD, the cascading selector refresh, and the
//! option-set lookups driving the form's select fields.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{AdminError, ValidationErrors};
use crate::filter::{EmployeeFilter, FilterParams};
use crate::models::{Country, Employee};
use crate::selector::{LocationSelection, OptionItem, SelectorController};

use super::request::{
    CountryListParams, CountryPayload, EmployeePayload, FormRefreshRequest, OptionParams,
};
use super::response::{
    ApiError, ApiErrorResponse, EmployeeDetail, EmployeeListResponse, EmployeeRow,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/countries", get(list_countries).post(create_country))
        .route(
            "/countries/:id",
            get(get_country).put(update_country).delete(delete_country),
        )
        .route("/countries/:id/restore", post(restore_country))
        .route("/employees", get(list_employees).post(create_employee))
        .route("/employees/form", post(refresh_employee_form))
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route("/employees/:id/restore", post(restore_employee))
        .route("/options/countries", get(country_options))
        .route("/options/states", get(state_options))
        .route("/options/cities", get(city_options))
        .route("/options/departments", get(department_options))
        .with_state(state)
}

/// Unwraps a JSON body, mapping axum rejections to API errors.
fn triage_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}

/// Parses an optional id query param; empty strings count as absent.
fn parse_optional_id(
    field: &str,
    value: &Option<String>,
) -> Result<Option<Uuid>, ApiErrorResponse> {
    match value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw.parse::<Uuid>().map(Some).map_err(|_| {
            let mut errors = ValidationErrors::new();
            errors.insert(field.to_string(), vec!["must be a valid id".to_string()]);
            ApiErrorResponse::validation(errors)
        }),
    }
}

// --- Country resource ---

async fn list_countries(
    State(state): State<AppState>,
    Query(params): Query<CountryListParams>,
) -> Result<Json<Vec<Country>>, ApiErrorResponse> {
    let mut errors = ValidationErrors::new();
    let sort = params.sort.as_deref().unwrap_or("name");
    if !matches!(sort, "name" | "code" | "phonecode" | "created_at") {
        errors.insert(
            "sort".to_string(),
            vec!["must be one of: name, code, phonecode, created_at".to_string()],
        );
    }
    let order = params.order.as_deref().unwrap_or("asc");
    if !matches!(order, "asc" | "desc") {
        errors.insert(
            "order".to_string(),
            vec!["must be one of: asc, desc".to_string()],
        );
    }
    if !errors.is_empty() {
        return Err(ApiErrorResponse::validation(errors));
    }

    let mut rows = state.geo().countries().await;

    if let Some(search) = params.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        let needle = search.to_lowercase();
        rows.retain(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.code.contains(&needle)
                || c.phonecode.contains(&needle)
        });
    }

    match sort {
        "code" => rows.sort_by(|a, b| a.code.cmp(&b.code)),
        "phonecode" => rows.sort_by(|a, b| a.phonecode.cmp(&b.phonecode)),
        "created_at" => rows.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        _ => {} // already name-ordered
    }
    if order == "desc" {
        rows.reverse();
    }

    Ok(Json(rows))
}

async fn create_country(
    State(state): State<AppState>,
    payload: Result<Json<CountryPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Country>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let payload = triage_json(payload, correlation_id)?;

    let now = Utc::now();
    let valid = payload.into_validated(now.date_naive()).map_err(|errors| {
        warn!(
            correlation_id = %correlation_id,
            fields = errors.len(),
            "Country create failed validation"
        );
        ApiErrorResponse::validation(errors)
    })?;

    let country = Country {
        id: Uuid::new_v4(),
        name: valid.name,
        code: valid.code,
        phonecode: valid.phonecode,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    };
    state.geo().insert_country(country.clone()).await;

    info!(
        correlation_id = %correlation_id,
        country_id = %country.id,
        name = %country.name,
        "Country created"
    );
    Ok((StatusCode::CREATED, Json(country)))
}

async fn get_country(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Country>, ApiErrorResponse> {
    let country = state.geo().country(id).await.ok_or(AdminError::NotFound {
        resource: "country",
        id,
    })?;
    Ok(Json(country))
}

async fn update_country(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<CountryPayload>, JsonRejection>,
) -> Result<Json<Country>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let payload = triage_json(payload, correlation_id)?;

    let now = Utc::now();
    let valid = payload.into_validated(now.date_naive()).map_err(|errors| {
        warn!(
            correlation_id = %correlation_id,
            country_id = %id,
            fields = errors.len(),
            "Country update failed validation"
        );
        ApiErrorResponse::validation(errors)
    })?;

    let country = state
        .geo()
        .update_country(id, now, |country| {
            country.name = valid.name;
            country.code = valid.code;
            country.phonecode = valid.phonecode;
        })
        .await?;

    info!(correlation_id = %correlation_id, country_id = %id, "Country updated");
    Ok(Json(country))
}

async fn delete_country(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiErrorResponse> {
    state.geo().soft_delete_country(id, Utc::now()).await?;
    info!(country_id = %id, "Country soft-deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn restore_country(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Country>, ApiErrorResponse> {
    let country = state.geo().restore_country(id, Utc::now()).await?;
    info!(country_id = %id, "Country restored");
    Ok(Json(country))
}

// --- Employee resource ---

async fn list_employees(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<EmployeeListResponse>, ApiErrorResponse> {
    let filter = EmployeeFilter::parse(&params).map_err(ApiErrorResponse::validation)?;
    let now = Utc::now();

    let employees = state.employees().query(&filter, now).await;
    let mut rows = Vec::with_capacity(employees.len());
    for employee in employees {
        rows.push(employee_row(&state, employee).await);
    }

    let department_name = match filter.department_id {
        Some(id) => state.departments().name_of(id).await,
        None => None,
    };
    let indicators = filter.indicators(department_name.as_deref());

    Ok(Json(EmployeeListResponse {
        rows,
        indicators,
        tab: filter.tab,
    }))
}

async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Employee>), ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let payload = triage_json(payload, correlation_id)?;

    let now = Utc::now();
    let valid = payload.into_validated(now.date_naive()).map_err(|errors| {
        warn!(
            correlation_id = %correlation_id,
            fields = errors.len(),
            "Employee create failed validation"
        );
        ApiErrorResponse::validation(errors)
    })?;

    let controller = SelectorController::new(state.geo(), state.departments());
    controller
        .check_consistency(
            valid.country_id,
            valid.state_id,
            valid.city_id,
            valid.department_id,
        )
        .await
        .map_err(|errors| {
            warn!(
                correlation_id = %correlation_id,
                fields = errors.len(),
                "Employee create failed location consistency"
            );
            ApiErrorResponse::validation(errors)
        })?;

    let employee = Employee {
        id: Uuid::new_v4(),
        first_name: valid.first_name,
        middle_name: valid.middle_name,
        last_name: valid.last_name,
        address: valid.address,
        zip_code: valid.zip_code,
        date_of_birth: valid.date_of_birth,
        date_hired: valid.date_hired,
        country_id: valid.country_id,
        state_id: valid.state_id,
        city_id: valid.city_id,
        department_id: valid.department_id,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    };
    state.employees().insert(employee.clone()).await;

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        "Employee created"
    );
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EmployeeDetail>, ApiErrorResponse> {
    let employee = state
        .employees()
        .get(id)
        .await
        .ok_or(AdminError::NotFound {
            resource: "employee",
            id,
        })?;

    let controller = SelectorController::new(state.geo(), state.departments());
    let form = controller
        .refresh(
            LocationSelection {
                country_id: Some(employee.country_id),
                state_id: Some(employee.state_id),
                city_id: Some(employee.city_id),
                department_id: Some(employee.department_id),
            },
            None,
        )
        .await;

    Ok(Json(EmployeeDetail { employee, form }))
}

async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<EmployeePayload>, JsonRejection>,
) -> Result<Json<Employee>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let payload = triage_json(payload, correlation_id)?;

    let now = Utc::now();
    let valid = payload.into_validated(now.date_naive()).map_err(|errors| {
        warn!(
            correlation_id = %correlation_id,
            employee_id = %id,
            fields = errors.len(),
            "Employee update failed validation"
        );
        ApiErrorResponse::validation(errors)
    })?;

    let controller = SelectorController::new(state.geo(), state.departments());
    controller
        .check_consistency(
            valid.country_id,
            valid.state_id,
            valid.city_id,
            valid.department_id,
        )
        .await
        .map_err(ApiErrorResponse::validation)?;

    let employee = state
        .employees()
        .update(id, now, |employee| {
            employee.first_name = valid.first_name;
            employee.middle_name = valid.middle_name;
            employee.last_name = valid.last_name;
            employee.address = valid.address;
            employee.zip_code = valid.zip_code;
            employee.date_of_birth = valid.date_of_birth;
            employee.date_hired = valid.date_hired;
            employee.country_id = valid.country_id;
            employee.state_id = valid.state_id;
            employee.city_id = valid.city_id;
            employee.department_id = valid.department_id;
        })
        .await?;

    info!(correlation_id = %correlation_id, employee_id = %id, "Employee updated");
    Ok(Json(employee))
}

async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiErrorResponse> {
    state.employees().soft_delete(id, Utc::now()).await?;
    info!(employee_id = %id, "Employee soft-deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn restore_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Employee>, ApiErrorResponse> {
    let employee = state.employees().restore(id, Utc::now()).await?;
    info!(employee_id = %id, "Employee restored");
    Ok(Json(employee))
}

/// Resolves a stored employee into a list row with referenced names.
async fn employee_row(app: &AppState, employee: Employee) -> EmployeeRow {
    let (country_name, state_name, city_name) = app
        .geo()
        .location_names(employee.country_id, employee.state_id, employee.city_id)
        .await;
    let department_name = app.departments().name_of(employee.department_id).await;

    EmployeeRow {
        id: employee.id,
        first_name: employee.first_name,
        middle_name: employee.middle_name,
        last_name: employee.last_name,
        address: employee.address,
        zip_code: employee.zip_code,
        date_of_birth: employee.date_of_birth,
        date_hired: employee.date_hired,
        country_name,
        state_name,
        city_name,
        department_name,
        created_at: employee.created_at,
        updated_at: employee.updated_at,
    }
}

// --- Selector ---

async fn refresh_employee_form(
    State(state): State<AppState>,
    payload: Result<Json<FormRefreshRequest>, JsonRejection>,
) -> Result<Json<crate::selector::FormSnapshot>, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let request = triage_json(payload, correlation_id)?;

    let controller = SelectorController::new(state.geo(), state.departments());
    let snapshot = controller.refresh(request.values, request.changed).await;
    Ok(Json(snapshot))
}

// --- Option sets ---

async fn country_options(
    State(state): State<AppState>,
    Query(params): Query<OptionParams>,
) -> Result<Json<Vec<OptionItem>>, ApiErrorResponse> {
    let controller = SelectorController::new(state.geo(), state.departments());
    Ok(Json(controller.country_options(params.search.as_deref()).await))
}

async fn state_options(
    State(state): State<AppState>,
    Query(params): Query<OptionParams>,
) -> Result<Json<Vec<OptionItem>>, ApiErrorResponse> {
    let controller = SelectorController::new(state.geo(), state.departments());
    let options = match parse_optional_id("country_id", &params.country_id)? {
        Some(country_id) => {
            controller
                .state_options(country_id, params.search.as_deref())
                .await
        }
        // No country selected: an empty option set, not an error.
        None => Vec::new(),
    };
    Ok(Json(options))
}

async fn city_options(
    State(state): State<AppState>,
    Query(params): Query<OptionParams>,
) -> Result<Json<Vec<OptionItem>>, ApiErrorResponse> {
    let controller = SelectorController::new(state.geo(), state.departments());
    let options = match parse_optional_id("state_id", &params.state_id)? {
        Some(state_id) => {
            controller
                .city_options(state_id, params.search.as_deref())
                .await
        }
        None => Vec::new(),
    };
    Ok(Json(options))
}

async fn department_options(
    State(state): State<AppState>,
    Query(params): Query<OptionParams>,
) -> Result<Json<Vec<OptionItem>>, ApiErrorResponse> {
    let controller = SelectorController::new(state.geo(), state.departments());
    Ok(Json(
        controller.department_options(params.search.as_deref()).await,
    ))
}
