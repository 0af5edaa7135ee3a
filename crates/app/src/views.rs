//! Plain-text rendering of the list and detail views.
//!
//! Views only read the state container; every mutation goes through a
//! workflow in [`crate::session`].

use staffdir_core::state::DirectoryState;
use staffdir_core::types::Employee;

/// Render the list view: one row per record plus any surfaced messages.
pub fn render_list(state: &DirectoryState) -> String {
    let mut out = String::new();

    if let Some(notice) = &state.notice {
        out.push_str(&format!("* {notice}\n\n"));
    }
    if let Some(error) = &state.load_error {
        out.push_str(&format!("! {error}\n\n"));
    }

    out.push_str(&format!(
        "{:<4} {:<20} {:<28} {:<12} ADDRESS\n",
        "ID", "NAME", "EMAIL", "PHONE"
    ));

    for employee in &state.employees {
        out.push_str(&format!(
            "{:<4} {:<20} {:<28} {:<12} {}\n",
            employee.id,
            employee.name,
            field_or_dash(&employee.email),
            field_or_dash(&employee.phone_number),
            field_or_dash(&employee.address),
        ));
    }

    out.push_str(&format!("\n{} employee(s)\n", state.employees.len()));
    out
}

/// Render the detail view for the given route identifier.
///
/// A linear scan over the loaded collection; an absent id renders the
/// not-found state rather than re-fetching.
pub fn render_detail(state: &DirectoryState, id: &str) -> String {
    match state.find(id) {
        Some(employee) => render_profile(employee),
        None => "User Profile\n\nUser not found\n".to_string(),
    }
}

/// Render the not-found page for unmatched navigation paths.
pub fn render_not_found(path: &str) -> String {
    format!("No page found for '{path}'\n")
}

fn render_profile(employee: &Employee) -> String {
    format!(
        "User Profile\n\n\
         Name:    {}\n\
         Phone:   {}\n\
         Email:   {}\n\
         Address: {}\n",
        employee.name,
        field_or_dash(&employee.phone_number),
        field_or_dash(&employee.email),
        field_or_dash(&employee.address),
    )
}

fn field_or_dash(field: &Option<String>) -> &str {
    field.as_deref().filter(|s| !s.is_empty()).unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use staffdir_core::state::Action;

    fn employee(id: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {id}"),
            email: Some(format!("employee{id}@example.com")),
            phone_number: None,
            address: Some("123 Main St".to_string()),
        }
    }

    #[test]
    fn list_renders_one_row_per_record() {
        let mut state = DirectoryState::default();
        state.apply(Action::SetEmployees(vec![employee("1"), employee("2")]));

        let rendered = render_list(&state);
        assert!(rendered.contains("Employee 1"));
        assert!(rendered.contains("Employee 2"));
        assert!(rendered.contains("2 employee(s)"));
    }

    #[test]
    fn list_surfaces_load_error() {
        let mut state = DirectoryState::default();
        state.apply(Action::LoadFailed("store unreachable".to_string()));

        assert!(render_list(&state).contains("store unreachable"));
    }

    #[test]
    fn detail_renders_dash_for_missing_fields() {
        let mut state = DirectoryState::default();
        state.apply(Action::SetEmployees(vec![employee("1")]));

        let rendered = render_detail(&state, "1");
        assert!(rendered.contains("Name:    Employee 1"));
        assert!(rendered.contains("Phone:   -"));
    }

    #[test]
    fn detail_for_absent_id_renders_user_not_found() {
        let state = DirectoryState::default();
        assert!(render_detail(&state, "999").contains("User not found"));
    }
}
