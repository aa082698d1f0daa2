use thiserror::Error;

use crate::domain::common::Dataset;

/// Failures of a user action. All of them are terminal for that action;
/// the display text is shown to the user as is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubError {
    /// Transport or parse error.
    #[error("Network error: {0}")]
    NetworkFailure(String),

    /// The edit target was not in the sheet after a fresh read.
    #[error("Record {id} was not found in {dataset}")]
    RecordNotFound { dataset: Dataset, id: String },

    /// The data service answered with an `error` field.
    #[error("{0}")]
    MutationRejected(String),

    /// A required form field was left blank.
    #[error("{0}")]
    Validation(String),
}

impl HubError {
    /// Message for an alert, falling back to `generic` when the service
    /// rejected the call without saying why.
    pub fn alert_message(&self, generic: &str) -> String {
        match self {
            HubError::MutationRejected(msg) if msg.trim().is_empty() => generic.to_string(),
            other => other.to_string(),
        }
    }
}
