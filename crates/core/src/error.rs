use crate::types::EmployeeId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound {
        entity: &'static str,
        id: EmployeeId,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}
