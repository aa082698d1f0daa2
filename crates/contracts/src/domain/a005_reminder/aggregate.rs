use crate::domain::common::{Dataset, Record, RowView};
use crate::shared::form::{FieldSpec, InputKind};

pub const EVENT: &[&str] = &["Event", "Title"];
pub const DATE: &[&str] = &["Date"];
pub const TYPE: &[&str] = &["Type", "Category"];

pub const TYPES: &[&str] = &["Birthday", "Appointment", "Bill", "Other"];

pub const CREATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("Event", "Event").required(),
    FieldSpec::new("Date", "Date", InputKind::Date),
    FieldSpec::new("Type", "Type", InputKind::Select(TYPES)),
];

/// Title: event. Meta: type • date.
pub fn row(record: &Record) -> RowView {
    RowView::new(
        Dataset::Reminders,
        record.id(),
        record.first_of(EVENT),
        &[record.first_of(TYPE), record.first_of(DATE)],
    )
}
