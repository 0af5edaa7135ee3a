//! Typed HTTP client for the employee record store.
//!
//! Thin request/response wrapper over the fixed REST contract. No
//! timeouts, retries, or cancellation beyond what the server enforces;
//! callers re-initiate failed actions themselves.

use reqwest::StatusCode;

use staffdir_core::types::{Employee, EmployeeId, EmployeeInput, EmployeeUpdate};
use staffdir_core::wire::{EmployeeListBody, EmployeeSavedBody, ErrorBody};

/// Errors surfaced by record-store requests.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network or protocol failure before a status code was obtained,
    /// or a body that failed to decode.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered 404 for the addressed record.
    #[error("Employee not found")]
    NotFound,

    /// Any other non-2xx status.
    #[error("Unexpected status {0} from record store")]
    UnexpectedStatus(StatusCode),
}

/// Client over one record-store base URL.
#[derive(Debug, Clone)]
pub struct RecordStoreClient {
    http: reqwest::Client,
    base_url: String,
}

impl RecordStoreClient {
    /// Create a client for the store at `base_url`
    /// (e.g. `http://127.0.0.1:4300`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// `GET /api/employees` -- fetch the full collection.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
        let response = self.http.get(self.url("/api/employees")).send().await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<EmployeeListBody>().await?.employees),
            status => Err(ClientError::UnexpectedStatus(status)),
        }
    }

    /// `POST /api/employees` -- create a record; the store assigns the id.
    pub async fn create_employee(&self, input: &EmployeeInput) -> Result<Employee, ClientError> {
        let response = self
            .http
            .post(self.url("/api/employees"))
            .json(input)
            .send()
            .await?;

        match response.status() {
            StatusCode::CREATED => Ok(response.json::<EmployeeSavedBody>().await?.employee),
            status => Err(Self::status_error(status, response).await),
        }
    }

    /// `PUT /api/employees/{id}` -- merge a partial payload into a record.
    pub async fn update_employee(
        &self,
        id: &EmployeeId,
        patch: &EmployeeUpdate,
    ) -> Result<Employee, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/api/employees/{id}")))
            .json(patch)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(response.json::<EmployeeSavedBody>().await?.employee),
            status => Err(Self::status_error(status, response).await),
        }
    }

    /// `DELETE /api/employees/{id}` -- remove a record.
    pub async fn delete_employee(&self, id: &EmployeeId) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.url(&format!("/api/employees/{id}")))
            .send()
            .await?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            status => Err(Self::status_error(status, response).await),
        }
    }

    /// Map a non-success status to a [`ClientError`], logging the store's
    /// error body when one is present.
    async fn status_error(status: StatusCode, response: reqwest::Response) -> ClientError {
        if status == StatusCode::NOT_FOUND {
            if let Ok(body) = response.json::<ErrorBody>().await {
                tracing::warn!(error = %body.error, "Record store returned 404");
            }
            return ClientError::NotFound;
        }

        ClientError::UnexpectedStatus(status)
    }
}
