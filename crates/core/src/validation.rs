//! Entry-time validation for the employee form.
//!
//! Formats are enforced here only; the record store never re-validates.

use std::sync::LazyLock;

use regex::Regex;

use crate::form::{EmployeeDraft, FormErrors};

// `local@domain.tld`-shaped: no whitespace or extra `@` on either side,
// and at least one dot in the domain part.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Validate a draft and return the per-field error set.
///
/// Every check runs against the trimmed value. Required-field messages
/// take precedence; format checks only run when the field is non-empty.
pub fn validate_draft(draft: &EmployeeDraft) -> FormErrors {
    let mut errors = FormErrors::default();

    if draft.name.trim().is_empty() {
        errors.name = "Name field is required".to_string();
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.email = "Email field is required".to_string();
    } else if !EMAIL_RE.is_match(email) {
        errors.email = "Invalid email format".to_string();
    }

    let phone = draft.phone_number.trim();
    if phone.is_empty() {
        errors.phone_number = "Phone number field is required".to_string();
    } else if !is_ten_digits(phone) {
        errors.phone_number = "Invalid phone number".to_string();
    }

    if draft.address.trim().is_empty() {
        errors.address = "Address field is required".to_string();
    }

    errors
}

/// Exactly 10 ASCII decimal digits, nothing else.
fn is_ten_digits(value: &str) -> bool {
    value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit())
}
