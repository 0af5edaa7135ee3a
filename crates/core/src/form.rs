//! The transient form draft and its parallel error structure.

use crate::types::{Employee, EmployeeInput, EmployeeUpdate};

/// Transient, unsaved field values the user is editing in a form.
///
/// Created empty on entering create mode, pre-populated (minus id) from
/// an existing record on entering edit mode, and cleared on successful
/// submission or on leaving the form. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}

impl EmployeeDraft {
    /// Pre-populate a draft from an existing record, dropping the id.
    ///
    /// Optional fields missing at rest become empty strings, which the
    /// required-field checks will flag again at submission time.
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone().unwrap_or_default(),
            phone_number: employee.phone_number.clone().unwrap_or_default(),
            address: employee.address.clone().unwrap_or_default(),
        }
    }

    /// Build the create payload from the current field values.
    pub fn to_input(&self) -> EmployeeInput {
        EmployeeInput {
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            address: self.address.clone(),
        }
    }

    /// Build a full update payload (every field present) from the draft.
    pub fn to_update(&self) -> EmployeeUpdate {
        EmployeeUpdate {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            phone_number: Some(self.phone_number.clone()),
            address: Some(self.address.clone()),
        }
    }
}

/// Per-field validation messages; an empty string means no error.
///
/// Mirrors the draft field-for-field so a view can render each message
/// next to its input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}

impl FormErrors {
    /// True when no field carries an error message.
    pub fn is_clean(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.phone_number.is_empty()
            && self.address.is_empty()
    }
}
