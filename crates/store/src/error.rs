use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use staffdir_core::error::CoreError;
use staffdir_core::wire::ErrorBody;

/// Application-level error type for store handlers.
///
/// Wraps [`CoreError`] for domain errors and implements
/// [`IntoResponse`] to produce the contract's `{ "error": ... }` JSON
/// bodies.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain-level error from `staffdir_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type StoreResult<T> = Result<T, StoreError>;

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            StoreError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found"))
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal store error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
