//! Handlers for the employee resource.
//!
//! The store enforces no field formats -- payloads are taken as given.
//! Its only integrity rule is identifier uniqueness, guaranteed by the
//! repository's id counter.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use staffdir_core::error::CoreError;
use staffdir_core::types::{EmployeeId, EmployeeInput, EmployeeUpdate};
use staffdir_core::wire::{EmployeeListBody, EmployeeSavedBody};

use crate::error::{StoreError, StoreResult};
use crate::state::AppState;

/// GET /api/employees
///
/// List all records.
pub async fn list_employees(State(state): State<AppState>) -> StoreResult<impl IntoResponse> {
    let repo = state.repo.read().await;

    Ok(Json(EmployeeListBody {
        employees: repo.list(),
    }))
}

/// POST /api/employees
///
/// Create a record from a payload without an id; the store assigns one.
pub async fn create_employee(
    State(state): State<AppState>,
    Json(input): Json<EmployeeInput>,
) -> StoreResult<impl IntoResponse> {
    let mut repo = state.repo.write().await;
    let employee = repo.create(input);

    tracing::info!(id = %employee.id, "Employee created");

    Ok((
        StatusCode::CREATED,
        Json(EmployeeSavedBody {
            message: "Employee created successfully".to_string(),
            employee,
        }),
    ))
}

/// PUT /api/employees/{id}
///
/// Merge a partial payload into an existing record.
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    Json(patch): Json<EmployeeUpdate>,
) -> StoreResult<impl IntoResponse> {
    let mut repo = state.repo.write().await;
    let employee = repo
        .update(&id, patch)
        .ok_or(StoreError::Core(CoreError::NotFound {
            entity: "Employee",
            id: id.clone(),
        }))?;

    tracing::info!(id = %employee.id, "Employee updated");

    Ok(Json(EmployeeSavedBody {
        message: "Employee updated successfully".to_string(),
        employee,
    }))
}

/// DELETE /api/employees/{id}
///
/// Remove a record. 204 on success, 404 if the id is unknown.
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> StoreResult<impl IntoResponse> {
    let mut repo = state.repo.write().await;

    if !repo.delete(&id) {
        return Err(StoreError::Core(CoreError::NotFound {
            entity: "Employee",
            id,
        }));
    }

    tracing::info!(id = %id, "Employee deleted");

    Ok(StatusCode::NO_CONTENT)
}
