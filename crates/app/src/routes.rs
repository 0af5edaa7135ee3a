//! The navigation surface: paths mapped to views.

use staffdir_core::types::EmployeeId;

/// A navigation target parsed from a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` and `/employee-list`.
    EmployeeList,
    /// `/create-employee`.
    CreateEmployee,
    /// `/edit-employee/{employeeId}`.
    EditEmployee(EmployeeId),
    /// `/employee-profile/{employeeId}`.
    EmployeeProfile(EmployeeId),
    /// Any other path.
    NotFound,
}

impl Route {
    /// Parse a navigation path; unknown paths map to the not-found page.
    ///
    /// Identifiers are captured trimmed, so later comparisons against
    /// record ids are plain string equality.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim().trim_start_matches('/').trim_end_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] | ["employee-list"] => Route::EmployeeList,
            ["create-employee"] => Route::CreateEmployee,
            ["edit-employee", id] if !id.trim().is_empty() => {
                Route::EditEmployee(id.trim().to_string())
            }
            ["employee-profile", id] if !id.trim().is_empty() => {
                Route::EmployeeProfile(id.trim().to_string())
            }
            _ => Route::NotFound,
        }
    }
}
