//! Wire-format bodies for the employee REST contract.
//!
//! Serialized by the store and deserialized by the client, so both sides
//! share a single definition of each envelope.

use serde::{Deserialize, Serialize};

use crate::types::Employee;

/// Body of `GET /api/employees`.
#[derive(Debug, Serialize, Deserialize)]
pub struct EmployeeListBody {
    pub employees: Vec<Employee>,
}

/// Body of a successful `POST /api/employees` or `PUT /api/employees/{id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct EmployeeSavedBody {
    pub message: String,
    pub employee: Employee,
}

/// Body of any error response from the store.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
