//! The shared application state and its reducer-style transitions.
//!
//! [`DirectoryState`] is the single source of truth for an admin session:
//! the mirrored employee collection, the active form draft, and the
//! active error set. Views only ever read it; workflows mutate it by
//! applying [`Action`]s, which keeps every transition a pure function
//! that tests can drive without any I/O.

use crate::form::{EmployeeDraft, FormErrors};
use crate::types::{Employee, EmployeeId};

/// Single mutable store for one admin session.
#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    /// Ordered collection mirrored from the record store.
    pub employees: Vec<Employee>,
    /// The active form's field values.
    pub draft: EmployeeDraft,
    /// The active form's per-field validation errors.
    pub errors: FormErrors,
    /// Form-level message set when a create/update request fails.
    pub form_error: Option<String>,
    /// Set when the last list fetch failed; the previous collection is
    /// kept so the user can retry instead of staring at an empty list.
    pub load_error: Option<String>,
    /// Record marked for deletion, awaiting the confirmation step.
    pub pending_delete: Option<EmployeeId>,
    /// True while a delete request is in flight.
    pub deleting: bool,
    /// Acknowledgment shown synchronously after a successful delete.
    pub notice: Option<String>,
}

/// A draft field addressed by a form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Email,
    PhoneNumber,
    Address,
}

/// A state transition. Applied via [`DirectoryState::apply`].
#[derive(Debug, Clone)]
pub enum Action {
    /// Replace the collection with a freshly fetched one.
    SetEmployees(Vec<Employee>),
    /// The list fetch failed; keep the collection, surface the message.
    LoadFailed(String),
    /// Overwrite a single draft field with user input.
    SetField { field: DraftField, value: String },
    /// Replace the whole draft (entering edit mode).
    LoadDraft(EmployeeDraft),
    /// Store a validation-error set.
    SetErrors(FormErrors),
    /// A create/update request failed; the draft and field errors are
    /// preserved so the user's unsaved input is not discarded.
    SubmitFailed(String),
    /// Reset draft, field errors, and the form-level error.
    ClearForm,
    /// Splice a freshly created record onto the end of the collection.
    Appended(Employee),
    /// Replace the matching record in place, preserving order.
    Replaced(Employee),
    /// Mark a record for deletion pending confirmation.
    RequestDelete(EmployeeId),
    /// Dismiss the confirmation prompt without deleting.
    CancelDelete,
    /// The confirmed delete request is now in flight.
    DeleteStarted,
    /// The store acknowledged the delete with 204.
    Deleted { id: EmployeeId, notice: String },
    /// The delete failed; leave the collection unchanged and clear all
    /// pending-deletion residue so no stuck loading flag remains.
    DeleteFailed,
    /// Dismiss the delete acknowledgment once it has been shown.
    ClearNotice,
}

impl DirectoryState {
    /// Apply one transition. Pure apart from `&mut self`.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetEmployees(employees) => {
                self.employees = employees;
                self.load_error = None;
            }
            Action::LoadFailed(message) => {
                self.load_error = Some(message);
            }
            Action::SetField { field, value } => match field {
                DraftField::Name => self.draft.name = value,
                DraftField::Email => self.draft.email = value,
                DraftField::PhoneNumber => self.draft.phone_number = value,
                DraftField::Address => self.draft.address = value,
            },
            Action::LoadDraft(draft) => {
                self.draft = draft;
            }
            Action::SetErrors(errors) => {
                self.errors = errors;
            }
            Action::SubmitFailed(message) => {
                self.form_error = Some(message);
            }
            Action::ClearForm => {
                self.draft = EmployeeDraft::default();
                self.errors = FormErrors::default();
                self.form_error = None;
            }
            Action::Appended(employee) => {
                self.employees.push(employee);
            }
            Action::Replaced(employee) => {
                if let Some(slot) = self
                    .employees
                    .iter_mut()
                    .find(|existing| existing.matches_id(&employee.id))
                {
                    *slot = employee;
                }
            }
            Action::RequestDelete(id) => {
                self.pending_delete = Some(id);
            }
            Action::CancelDelete => {
                self.pending_delete = None;
            }
            Action::DeleteStarted => {
                self.deleting = true;
                self.notice = None;
            }
            Action::Deleted { id, notice } => {
                self.employees.retain(|employee| !employee.matches_id(&id));
                self.pending_delete = None;
                self.deleting = false;
                self.notice = Some(notice);
            }
            Action::DeleteFailed => {
                self.pending_delete = None;
                self.deleting = false;
            }
            Action::ClearNotice => {
                self.notice = None;
            }
        }
    }

    /// Linear scan of the loaded collection by normalized identifier.
    ///
    /// This is a view over already-loaded client state; it never
    /// re-fetches, so an id that was never loaded yields `None`.
    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.matches_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: &str, name: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            phone_number: Some("5555550000".to_string()),
            address: Some("123 Main St".to_string()),
        }
    }

    fn state_with(ids: &[&str]) -> DirectoryState {
        let mut state = DirectoryState::default();
        state.apply(Action::SetEmployees(
            ids.iter().map(|id| employee(id, &format!("E{id}"))).collect(),
        ));
        state
    }

    #[test]
    fn set_employees_replaces_collection_and_clears_load_error() {
        let mut state = DirectoryState::default();
        state.apply(Action::LoadFailed("boom".to_string()));
        assert_eq!(state.load_error.as_deref(), Some("boom"));

        state.apply(Action::SetEmployees(vec![employee("1", "A")]));
        assert_eq!(state.employees.len(), 1);
        assert_eq!(state.load_error, None);
    }

    #[test]
    fn load_failure_keeps_previous_collection() {
        let mut state = state_with(&["1", "2"]);
        state.apply(Action::LoadFailed("store unreachable".to_string()));
        assert_eq!(state.employees.len(), 2);
        assert_eq!(state.load_error.as_deref(), Some("store unreachable"));
    }

    #[test]
    fn replaced_swaps_in_place_without_reordering_or_duplicating() {
        let mut state = state_with(&["1", "2", "3"]);
        state.apply(Action::Replaced(employee("2", "Renamed")));

        let ids: Vec<&str> = state.employees.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
        assert_eq!(state.employees[1].name, "Renamed");
    }

    #[test]
    fn replaced_with_unknown_id_is_a_no_op() {
        let mut state = state_with(&["1", "2"]);
        state.apply(Action::Replaced(employee("99", "Ghost")));
        assert_eq!(state.employees.len(), 2);
        assert!(state.find("99").is_none());
    }

    #[test]
    fn deleted_removes_exactly_the_matching_record() {
        let mut state = state_with(&["1", "2", "3"]);
        state.apply(Action::RequestDelete("2".to_string()));
        state.apply(Action::DeleteStarted);
        state.apply(Action::Deleted {
            id: "2".to_string(),
            notice: "Deleted Successfully".to_string(),
        });

        assert_eq!(state.employees.len(), 2);
        assert!(state.find("2").is_none());
        assert_eq!(state.pending_delete, None);
        assert!(!state.deleting);
        assert_eq!(state.notice.as_deref(), Some("Deleted Successfully"));
    }

    #[test]
    fn delete_failure_leaves_collection_and_clears_residue() {
        let mut state = state_with(&["1", "2"]);
        state.apply(Action::RequestDelete("1".to_string()));
        state.apply(Action::DeleteStarted);
        state.apply(Action::DeleteFailed);

        assert_eq!(state.employees.len(), 2);
        assert_eq!(state.pending_delete, None);
        assert!(!state.deleting);
    }

    #[test]
    fn submit_failure_preserves_the_draft() {
        let mut state = DirectoryState::default();
        state.apply(Action::SetField {
            field: DraftField::Name,
            value: "Alice".to_string(),
        });
        state.apply(Action::SubmitFailed(
            "An error occurred while saving the employee data.".to_string(),
        ));

        assert_eq!(state.draft.name, "Alice");
        assert!(state.form_error.is_some());
    }

    #[test]
    fn clear_form_resets_draft_errors_and_form_error() {
        let mut state = DirectoryState::default();
        state.apply(Action::SetField {
            field: DraftField::Email,
            value: "a@b".to_string(),
        });
        state.apply(Action::SetErrors(FormErrors {
            email: "Invalid email format".to_string(),
            ..Default::default()
        }));
        state.apply(Action::SubmitFailed("boom".to_string()));

        state.apply(Action::ClearForm);
        assert_eq!(state.draft, EmployeeDraft::default());
        assert!(state.errors.is_clean());
        assert_eq!(state.form_error, None);
    }

    #[test]
    fn find_uses_normalized_string_comparison() {
        let state = state_with(&["3", "30"]);
        assert_eq!(state.find(" 3 ").map(|e| e.id.as_str()), Some("3"));
        assert_eq!(state.find("30").map(|e| e.id.as_str()), Some("30"));
        assert!(state.find("300").is_none());
    }
}
