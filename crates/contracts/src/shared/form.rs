//! Creation forms: field descriptions and form-to-record marshaling.

use crate::domain::common::{Dataset, Record, ID_ALIASES};
use crate::shared::error::HubError;

/// Literal written for a checked checkbox.
pub const CHECKED: &str = "TRUE";
/// Literal written for an unchecked checkbox.
pub const UNCHECKED: &str = "FALSE";

/// Kind of input control used for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Date,
    Number,
    Checkbox,
    Select(&'static [&'static str]),
}

impl InputKind {
    /// Guess the input kind of a sheet column from its name.
    ///
    /// The name is split into words (`DueDate` -> `due`, `date`); a date-like
    /// word gives a date input, one of amount/age/quantity/qty a numeric
    /// input, anything else text.
    pub fn infer(field_name: &str) -> InputKind {
        let words = split_words(field_name);
        if words.iter().any(|w| is_date_word(w)) {
            InputKind::Date
        } else if words
            .iter()
            .any(|w| matches!(w.as_str(), "amount" | "age" | "quantity" | "qty"))
        {
            InputKind::Number
        } else {
            InputKind::Text
        }
    }
}

/// `date`, `*date` except `update`, `day`, `birthday`, `dob`.
fn is_date_word(word: &str) -> bool {
    match word {
        "day" | "birthday" | "dob" => true,
        w => w.ends_with("date") && !w.ends_with("update"),
    }
}

fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;
    for ch in name.chars() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if ch.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        current.extend(ch.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// A field of a creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: InputKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, InputKind::Text)
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    /// Initial value of the control (first option for selects).
    pub fn default_value(&self) -> String {
        match self.kind {
            InputKind::Select(options) => options.first().copied().unwrap_or_default().to_string(),
            _ => String::new(),
        }
    }
}

/// Value collected from one form control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    Checked(bool),
}

impl FormValue {
    fn into_cell(self) -> String {
        match self {
            FormValue::Text(s) => s,
            FormValue::Checked(true) => CHECKED.to_string(),
            FormValue::Checked(false) => UNCHECKED.to_string(),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            FormValue::Text(s) => s.trim().is_empty(),
            FormValue::Checked(_) => false,
        }
    }
}

/// Build the record sent with `create` from the submitted form values.
///
/// The identifier is left blank for the store to assign. Required fields
/// must be present and non-blank; nothing else is validated.
pub fn marshal_create(
    dataset: Dataset,
    entries: Vec<(String, FormValue)>,
) -> Result<Record, HubError> {
    for spec in dataset.create_fields().iter().filter(|s| s.required) {
        let present = entries
            .iter()
            .any(|(name, value)| name == spec.name && !value.is_blank());
        if !present {
            return Err(HubError::Validation(format!("{} is required", spec.label)));
        }
    }

    let mut record = Record::new();
    record.set(ID_ALIASES[0], "");
    for (name, value) in entries {
        if ID_ALIASES.contains(&name.as_str()) {
            continue;
        }
        record.set(name, value.into_cell());
    }
    dataset.apply_create_defaults(&mut record);
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(name: &str, value: &str) -> (String, FormValue) {
        (name.to_string(), FormValue::Text(value.to_string()))
    }

    fn checked(name: &str, value: bool) -> (String, FormValue) {
        (name.to_string(), FormValue::Checked(value))
    }

    #[test]
    fn test_infer_input_kind() {
        assert_eq!(InputKind::infer("Date"), InputKind::Date);
        assert_eq!(InputKind::infer("DueDate"), InputKind::Date);
        assert_eq!(InputKind::infer("Birthdate"), InputKind::Date);
        assert_eq!(InputKind::infer("Birthday"), InputKind::Date);
        assert_eq!(InputKind::infer("DOB"), InputKind::Date);
        assert_eq!(InputKind::infer("Payment Day"), InputKind::Date);
        assert_eq!(InputKind::infer("Amount"), InputKind::Number);
        assert_eq!(InputKind::infer("Age"), InputKind::Number);
        assert_eq!(InputKind::infer("Quantity"), InputKind::Number);
        assert_eq!(InputKind::infer("item_qty"), InputKind::Number);
        assert_eq!(InputKind::infer("Name"), InputKind::Text);
        assert_eq!(InputKind::infer("Message"), InputKind::Text);
        assert_eq!(InputKind::infer("UpdatedBy"), InputKind::Text);
        assert_eq!(InputKind::infer("Update"), InputKind::Text);
        assert_eq!(InputKind::infer("LastUpdate"), InputKind::Text);
        assert_eq!(InputKind::infer("Monday"), InputKind::Text);
    }

    #[test]
    fn test_inventory_checkboxes_serialize_as_literals() {
        let record = marshal_create(
            Dataset::Inventory,
            vec![
                text("Item", "Tent"),
                text("Quantity", "1"),
                checked("Needed", true),
                checked("ToSellGive", false),
            ],
        )
        .unwrap();
        assert_eq!(record.text("Needed"), "TRUE");
        assert_eq!(record.text("ToSellGive"), "FALSE");
        assert_eq!(record.text("ID"), "");
    }

    #[test]
    fn test_task_status_defaults_to_pending() {
        let record = marshal_create(
            Dataset::Tasks,
            vec![text("Task", "Dishes"), text("Status", "Done")],
        )
        .unwrap();
        assert_eq!(record.text("Status"), "Pending");
    }

    #[test]
    fn test_identifier_left_blank() {
        let record = marshal_create(
            Dataset::Family,
            vec![text("ID", "42"), text("Name", "Ann")],
        )
        .unwrap();
        assert_eq!(record.text("ID"), "");
        assert_eq!(record.field_names().next(), Some("ID"));
    }

    #[test]
    fn test_missing_required_field() {
        let err = marshal_create(Dataset::Family, vec![text("Name", "   ")]).unwrap_err();
        assert_eq!(err, HubError::Validation("Name is required".into()));
    }

    #[test]
    fn test_select_default_is_first_option() {
        let spec = FieldSpec::new("Type", "Type", InputKind::Select(&["Income", "Expense"]));
        assert_eq!(spec.default_value(), "Income");
        assert_eq!(FieldSpec::text("Name", "Name").default_value(), "");
    }
}
