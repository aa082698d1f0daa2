//! Edit workflow: the dynamic edit form and its state machine.
//!
//! ```text
//! Idle --begin--> Loading --finish_loading(Ok)--> Editing --begin_save--> Saving
//!   ^                |                              |                        |
//!   +---- Err -------+  <--------- cancel ----------+   <--- Err: Editing ---+
//!   +------------------------------- Ok ------------------------------------+
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::domain::common::{Dataset, Record, ID_ALIASES};
use crate::shared::error::HubError;
use crate::shared::form::InputKind;
use crate::shared::sheet_api::ReadResponse;

/// One input of the edit form, derived from a sheet column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub kind: InputKind,
    /// Cell text as stored; only replaced when the user edits the control.
    pub value: String,
    pub read_only: bool,
}

impl FieldDescriptor {
    /// Initial text of the form control (`YYYY-MM-DD` for date inputs).
    pub fn input_value(&self) -> String {
        match self.kind {
            InputKind::Date => normalize_date_input(&self.value),
            _ => self.value.clone(),
        }
    }
}

/// The record being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub dataset: Dataset,
    pub id: String,
    /// Column holding the identifier; forced back to `id` on save.
    pub id_field: String,
    pub fields: Vec<FieldDescriptor>,
}

impl EditSession {
    /// Locate `id` in a fresh read and build the form for it.
    ///
    /// Fields follow the response headers, or the record's own field names
    /// when the response carries none.
    pub fn open(dataset: Dataset, id: &str, response: &ReadResponse) -> Result<Self, HubError> {
        let record = response.find(id).ok_or_else(|| HubError::RecordNotFound {
            dataset,
            id: id.to_string(),
        })?;

        let names: Vec<String> = if response.headers.iter().any(|h| !h.trim().is_empty()) {
            response.headers.clone()
        } else {
            record.field_names().map(str::to_string).collect()
        };

        let id_field = names
            .iter()
            .find(|name| ID_ALIASES.contains(&name.as_str()))
            .cloned()
            .or_else(|| record.id_field().map(str::to_string))
            .unwrap_or_else(|| ID_ALIASES[0].to_string());

        let fields = names
            .into_iter()
            .filter(|name| !name.trim().is_empty())
            .map(|name| {
                let kind = InputKind::infer(&name);
                let value = record.text(&name);
                FieldDescriptor {
                    read_only: name == id_field,
                    name,
                    kind,
                    value,
                }
            })
            .collect();

        Ok(Self {
            dataset,
            id: record.id(),
            id_field,
            fields,
        })
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    /// Update an editable field. Returns false for unknown or read-only fields.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) if !field.read_only => {
                field.value = value.into();
                true
            }
            _ => false,
        }
    }

    /// Take the text of a form control. A control still showing its
    /// initial text leaves the stored value untouched. Returns whether the
    /// value changed.
    pub fn apply_input(&mut self, name: &str, input: &str) -> bool {
        let untouched = self
            .fields
            .iter()
            .find(|f| f.name == name)
            .is_some_and(|f| f.input_value() == input);
        !untouched && self.set_value(name, input)
    }

    /// Record sent with `update`; the identifier keeps its original value.
    pub fn to_record(&self) -> Record {
        let mut record = Record::from_pairs(
            self.fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone())),
        );
        record.set(self.id_field.clone(), self.id.clone());
        record
    }
}

/// Value shown in an `<input type="date">`: `YYYY-MM-DD` when the cell
/// holds a recognisable date or timestamp, otherwise the text unchanged.
/// Timestamps keep the calendar date they are written with.
pub fn normalize_date_input(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.date().format("%Y-%m-%d").to_string();
    }
    for pattern in ["%Y-%m-%d", "%d.%m.%Y", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, pattern) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    raw.to_string()
}

/// State of the shared edit modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditWorkflow {
    #[default]
    Idle,
    Loading {
        dataset: Dataset,
        id: String,
    },
    Editing(EditSession),
    Saving(EditSession),
}

impl EditWorkflow {
    /// Edit clicked: start loading, replacing whatever was in progress.
    pub fn begin(&mut self, dataset: Dataset, id: impl Into<String>) {
        *self = EditWorkflow::Loading {
            dataset,
            id: id.into(),
        };
    }

    /// Read finished for `dataset`/`id`.
    ///
    /// Results of a superseded load are dropped (`Ok(false)`). A failed load
    /// or a missing record returns to Idle and hands the error back.
    pub fn finish_loading(
        &mut self,
        dataset: Dataset,
        id: &str,
        result: Result<EditSession, HubError>,
    ) -> Result<bool, HubError> {
        let current = matches!(
            &*self,
            EditWorkflow::Loading { dataset: d, id: i } if *d == dataset && i.as_str() == id
        );
        if !current {
            return Ok(false);
        }
        match result {
            Ok(session) => {
                *self = EditWorkflow::Editing(session);
                Ok(true)
            }
            Err(e) => {
                *self = EditWorkflow::Idle;
                Err(e)
            }
        }
    }

    /// Save clicked: move to Saving and return the update to send.
    pub fn begin_save(&mut self) -> Option<(Dataset, String, Record)> {
        match std::mem::take(self) {
            EditWorkflow::Editing(session) => {
                let update = (session.dataset, session.id.clone(), session.to_record());
                *self = EditWorkflow::Saving(session);
                Some(update)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Update finished. Success closes the form, failure reopens it.
    pub fn finish_save(&mut self, result: Result<(), HubError>) -> Result<(), HubError> {
        match std::mem::take(self) {
            EditWorkflow::Saving(session) => match result {
                Ok(()) => Ok(()),
                Err(e) => {
                    *self = EditWorkflow::Editing(session);
                    Err(e)
                }
            },
            other => {
                *self = other;
                result
            }
        }
    }

    pub fn cancel(&mut self) {
        if !matches!(self, EditWorkflow::Saving(_)) {
            *self = EditWorkflow::Idle;
        }
    }

    pub fn session(&self) -> Option<&EditSession> {
        match self {
            EditWorkflow::Editing(s) | EditWorkflow::Saving(s) => Some(s),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        match self {
            EditWorkflow::Editing(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the modal is shown.
    pub fn is_open(&self) -> bool {
        self.session().is_some()
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, EditWorkflow::Saving(_))
    }
}
