//! Workflows tying the state container to the record-store client.
//!
//! A [`Session`] owns one [`DirectoryState`] and one
//! [`RecordStoreClient`]. Every user action runs through a workflow
//! here: validate, talk to the store if clean, then reconcile the
//! shared collection by applying reducer actions. Errors never escape a
//! workflow; they land in the state for the views to surface.

use staffdir_client::RecordStoreClient;
use staffdir_core::form::{EmployeeDraft, FormErrors};
use staffdir_core::state::{Action, DirectoryState, DraftField};
use staffdir_core::types::EmployeeId;
use staffdir_core::validation::validate_draft;

/// Whether the form targets a new record or an existing one.
///
/// The edit identifier is captured from the navigation context when the
/// form is entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EmployeeId),
}

/// Result of the validation & submission workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the error set is stored and no request was made.
    Invalid,
    /// The record was persisted and spliced into the collection.
    Saved,
    /// The request failed; a form-level error is stored and the draft is
    /// preserved.
    Failed,
}

/// One admin session: shared state plus the store client.
pub struct Session {
    pub state: DirectoryState,
    client: RecordStoreClient,
}

impl Session {
    pub fn new(client: RecordStoreClient) -> Self {
        Self {
            state: DirectoryState::default(),
            client,
        }
    }

    /// List-view mount: fetch the full collection and replace the mirror.
    ///
    /// On failure the previous collection is kept and a retryable error
    /// message is surfaced instead of silently showing an empty list.
    pub async fn load_employees(&mut self) {
        match self.client.list_employees().await {
            Ok(employees) => self.state.apply(Action::SetEmployees(employees)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to load employees");
                self.state.apply(Action::LoadFailed(format!(
                    "Could not load employees: {e}. Reload the list to retry."
                )));
            }
        }
    }

    /// Enter create mode with an empty draft.
    pub fn enter_create(&mut self) {
        self.state.apply(Action::ClearForm);
    }

    /// Enter edit mode, copying the record's fields (minus id) into the
    /// draft.
    ///
    /// An identifier absent from the loaded collection leaves the draft
    /// at its empty defaults; no not-found signal is shown.
    pub fn enter_edit(&mut self, id: &str) {
        self.state.apply(Action::ClearForm);
        let draft = self.state.find(id).map(EmployeeDraft::from_employee);
        if let Some(draft) = draft {
            self.state.apply(Action::LoadDraft(draft));
        }
    }

    /// Overwrite one draft field with user input.
    pub fn set_field(&mut self, field: DraftField, value: String) {
        self.state.apply(Action::SetField { field, value });
    }

    /// Clear the draft and error set (leaving the form).
    pub fn leave_form(&mut self) {
        self.state.apply(Action::ClearForm);
    }

    /// The validation & submission workflow.
    ///
    /// Validates the draft; on any field error the error set is stored
    /// and no request is issued. Otherwise dispatches create or update,
    /// splices the returned record into the collection, and clears the
    /// form. On a request failure the draft and field errors are kept so
    /// the user's input survives a retry.
    pub async fn submit(&mut self, mode: FormMode) -> SubmitOutcome {
        let errors = validate_draft(&self.state.draft);
        if !errors.is_clean() {
            self.state.apply(Action::SetErrors(errors));
            return SubmitOutcome::Invalid;
        }
        self.state.apply(Action::SetErrors(FormErrors::default()));

        let result = match &mode {
            FormMode::Create => {
                self.client
                    .create_employee(&self.state.draft.to_input())
                    .await
            }
            FormMode::Edit(id) => {
                self.client
                    .update_employee(id, &self.state.draft.to_update())
                    .await
            }
        };

        match result {
            Ok(employee) => {
                let action = match mode {
                    FormMode::Create => Action::Appended(employee),
                    FormMode::Edit(_) => Action::Replaced(employee),
                };
                self.state.apply(action);
                self.state.apply(Action::ClearForm);
                SubmitOutcome::Saved
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save employee");
                self.state.apply(Action::SubmitFailed(
                    "An error occurred while saving the employee data.".to_string(),
                ));
                SubmitOutcome::Failed
            }
        }
    }

    /// Take the pending delete acknowledgment, clearing it from the state.
    pub fn take_notice(&mut self) -> Option<String> {
        let notice = self.state.notice.clone();
        if notice.is_some() {
            self.state.apply(Action::ClearNotice);
        }
        notice
    }

    /// Mark a record for deletion; the confirmation prompt opens.
    pub fn request_delete(&mut self, id: EmployeeId) {
        self.state.apply(Action::RequestDelete(id));
    }

    /// Dismiss the confirmation prompt without deleting.
    pub fn cancel_delete(&mut self) {
        self.state.apply(Action::CancelDelete);
    }

    /// The confirmed half of the deletion workflow.
    ///
    /// On 204 the record leaves the collection and an acknowledgment
    /// notice is stored. On any failure the collection is untouched and
    /// all pending-deletion state is cleared, so no stuck loading flag
    /// remains.
    pub async fn confirm_delete(&mut self) {
        let Some(id) = self.state.pending_delete.clone() else {
            return;
        };

        self.state.apply(Action::DeleteStarted);

        match self.client.delete_employee(&id).await {
            Ok(()) => {
                self.state.apply(Action::Deleted {
                    id,
                    notice: "Deleted Successfully".to_string(),
                });
            }
            Err(e) => {
                tracing::error!(error = %e, id = %id, "Error deleting employee");
                self.state.apply(Action::DeleteFailed);
            }
        }
    }
}
