//! Route definitions for the employee resource, mounted at `/employees`.
//!
//! ```text
//! GET    /        -> list_employees
//! POST   /        -> create_employee
//! PUT    /{id}    -> update_employee
//! DELETE /{id}    -> delete_employee
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::employees;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/{id}",
            axum::routing::put(employees::update_employee).delete(employees::delete_employee),
        )
}
