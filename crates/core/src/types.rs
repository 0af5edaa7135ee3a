use serde::{Deserialize, Serialize};

/// Opaque, server-assigned employee identifier.
///
/// The record store hands these out as stringified counters, but nothing
/// outside the store may rely on that -- the rest of the system treats
/// them as opaque strings.
pub type EmployeeId = String;

/// An employee record as held by the record store.
///
/// Only `id` and `name` are guaranteed at rest; the contact fields are
/// required at entry time but optional once stored. Serializes with
/// camelCase field names (`phoneNumber`) per the REST contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Employee {
    /// Compare this record's identifier against a route identifier.
    ///
    /// Explicit trimmed-string equality; route parameters and stored ids
    /// are both normalized so `"3"` and `" 3 "` match and `"3"` vs `"30"`
    /// never do.
    pub fn matches_id(&self, id: &str) -> bool {
        self.id.trim() == id.trim()
    }
}

/// Payload for creating a new employee; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeInput {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
}

/// Partial update payload; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_serializes_with_camel_case_phone_number() {
        let employee = Employee {
            id: "1".to_string(),
            name: "Employee 0".to_string(),
            email: Some("employee0@example.com".to_string()),
            phone_number: Some("5555550000".to_string()),
            address: Some("123 Main St".to_string()),
        };

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["phoneNumber"], "5555550000");
        assert!(json.get("phone_number").is_none());
    }

    #[test]
    fn employee_deserializes_with_missing_optional_fields() {
        let employee: Employee =
            serde_json::from_str(r#"{"id":"7","name":"Employee 7"}"#).unwrap();
        assert_eq!(employee.id, "7");
        assert_eq!(employee.email, None);
        assert_eq!(employee.phone_number, None);
        assert_eq!(employee.address, None);
    }

    #[test]
    fn matches_id_normalizes_whitespace_but_not_prefixes() {
        let employee = Employee {
            id: "3".to_string(),
            name: "Employee 3".to_string(),
            email: None,
            phone_number: None,
            address: None,
        };

        assert!(employee.matches_id("3"));
        assert!(employee.matches_id(" 3 "));
        assert!(!employee.matches_id("30"));
    }

    #[test]
    fn update_skips_absent_fields_on_the_wire() {
        let patch = EmployeeUpdate {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Renamed" }));
    }
}
