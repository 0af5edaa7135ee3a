pub mod employees;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /employees          GET list, POST create
/// /employees/{id}     PUT update, DELETE remove
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/employees", employees::router())
}
