use crate::domain::common::{Dataset, Record, RowView};
use crate::shared::form::{FieldSpec, InputKind};

pub const DESCRIPTION: &[&str] = &["Description", "Item", "Category"];
pub const AMOUNT: &[&str] = &["Amount"];
pub const TYPE: &[&str] = &["Type"];
pub const DATE: &[&str] = &["Date"];

pub const TYPES: &[&str] = &["Income", "Expense"];

pub const CREATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("Description", "Description").required(),
    FieldSpec::new("Amount", "Amount", InputKind::Number).required(),
    FieldSpec::new("Type", "Type", InputKind::Select(TYPES)),
    FieldSpec::new("Date", "Date", InputKind::Date),
];

/// Title: description. Meta: type • amount • date.
pub fn row(record: &Record) -> RowView {
    RowView::new(
        Dataset::Finance,
        record.id(),
        record.first_of(DESCRIPTION),
        &[
            record.first_of(TYPE),
            record.first_of(AMOUNT),
            record.first_of(DATE),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row() {
        let record: Record = serde_json::from_value(json!({
            "ID": 7, "Category": "Groceries", "Amount": 42.5, "Type": "Expense", "Date": "2024-02-01"
        }))
        .unwrap();
        let row = row(&record);
        assert_eq!(row.title, "Groceries");
        assert_eq!(row.meta, "Expense • 42.5 • 2024-02-01");
    }
}
