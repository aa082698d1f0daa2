//! Wire envelopes of the sheet data service.
//!
//! Every call is one JSON object `{action, sheet, ...payload}` posted to a
//! single endpoint. `read` answers `{headers, rows}`, mutations answer
//! `{success}` or `{error}`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::domain::common::{Dataset, Record};
use crate::shared::error::HubError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body: the payload merged with `action` and `sheet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetRequest {
    pub action: Action,
    pub sheet: String,
    #[serde(rename = "rowObject", default, skip_serializing_if = "Option::is_none")]
    pub row_object: Option<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl SheetRequest {
    fn new(action: Action, dataset: Dataset) -> Self {
        Self {
            action,
            sheet: dataset.sheet_name().to_string(),
            row_object: None,
            id: None,
        }
    }

    pub fn read(dataset: Dataset) -> Self {
        Self::new(Action::Read, dataset)
    }

    pub fn create(dataset: Dataset, record: Record) -> Self {
        Self {
            row_object: Some(record),
            ..Self::new(Action::Create, dataset)
        }
    }

    pub fn update(dataset: Dataset, id: impl Into<String>, record: Record) -> Self {
        Self {
            row_object: Some(record),
            id: Some(id.into()),
            ..Self::new(Action::Update, dataset)
        }
    }

    pub fn delete(dataset: Dataset, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::new(Action::Delete, dataset)
        }
    }

    /// Dataset addressed by `sheet`, if it is one of the five known sheets.
    pub fn dataset(&self) -> Option<Dataset> {
        Dataset::from_sheet_name(&self.sheet)
    }
}

/// Answer to `read`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadResponse {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Record>,
}

impl ReadResponse {
    pub fn from_value(value: Value) -> Result<Self, HubError> {
        if let Some(message) = error_field(&value) {
            return Err(HubError::MutationRejected(message));
        }
        serde_json::from_value(value)
            .map_err(|e| HubError::NetworkFailure(format!("Failed to parse response: {}", e)))
    }

    /// Row whose identifier matches `id` (compared as trimmed strings).
    pub fn find(&self, id: &str) -> Option<&Record> {
        let id = id.trim();
        self.rows.iter().find(|r| r.id().trim() == id)
    }
}

/// Answer to `create`, `update` and `delete`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MutationResponse {
    pub fn from_value(value: Value) -> Result<Self, HubError> {
        serde_json::from_value(value)
            .map_err(|e| HubError::NetworkFailure(format!("Failed to parse response: {}", e)))
    }

    /// A bare `success: false` carries no message; the caller's
    /// `alert_message` fallback names the failed action.
    pub fn into_result(self) -> Result<(), HubError> {
        match self.error {
            Some(message) => Err(HubError::MutationRejected(message)),
            None if self.success => Ok(()),
            None => Err(HubError::MutationRejected(String::new())),
        }
    }
}

fn error_field(value: &Value) -> Option<String> {
    value
        .get("error")
        .filter(|e| !e.is_null())
        .map(|e| e.as_str().map(str::to_string).unwrap_or_else(|| e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_merges_payload() {
        let record = Record::from_pairs([("ID", ""), ("Name", "Ann")]);
        let body = serde_json::to_value(SheetRequest::create(Dataset::Family, record)).unwrap();
        assert_eq!(
            body,
            json!({"action": "create", "sheet": "FamilyMembers", "rowObject": {"ID": "", "Name": "Ann"}})
        );

        let body = serde_json::to_value(SheetRequest::delete(Dataset::Tasks, "5")).unwrap();
        assert_eq!(body, json!({"action": "delete", "sheet": "Tasks", "id": "5"}));

        let body = serde_json::to_value(SheetRequest::read(Dataset::Finance)).unwrap();
        assert_eq!(body, json!({"action": "read", "sheet": "Finance"}));
    }

    #[test]
    fn test_read_response_parsing() {
        let resp = ReadResponse::from_value(json!({
            "headers": ["ID", "Name"],
            "rows": [{"ID": 3, "Name": "Ann"}]
        }))
        .unwrap();
        assert_eq!(resp.headers, vec!["ID", "Name"]);
        assert_eq!(resp.find("3").map(|r| r.text("Name")), Some("Ann".to_string()));
        assert!(resp.find("9").is_none());

        let empty = ReadResponse::from_value(json!({})).unwrap();
        assert!(empty.rows.is_empty());
    }

    #[test]
    fn test_read_error_is_rejection() {
        let err = ReadResponse::from_value(json!({"error": "Sheet not found"})).unwrap_err();
        assert_eq!(err, HubError::MutationRejected("Sheet not found".into()));

        let err = ReadResponse::from_value(json!("nope")).unwrap_err();
        assert!(matches!(err, HubError::NetworkFailure(_)));
    }

    #[test]
    fn test_mutation_outcomes() {
        let ok = MutationResponse::from_value(json!({"success": true})).unwrap();
        assert_eq!(ok.into_result(), Ok(()));

        let rejected = MutationResponse::from_value(json!({"error": "ID not found"})).unwrap();
        assert_eq!(
            rejected.into_result(),
            Err(HubError::MutationRejected("ID not found".into()))
        );

        let silent = MutationResponse::from_value(json!({"success": false})).unwrap();
        let err = silent.into_result().unwrap_err();
        assert_eq!(err, HubError::MutationRejected(String::new()));
        assert_eq!(err.alert_message("Delete failed"), "Delete failed");
    }
}
