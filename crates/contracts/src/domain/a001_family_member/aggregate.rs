use crate::domain::common::{Dataset, Record, RowView};
use crate::shared::form::{FieldSpec, InputKind};

// Column aliases, first non-empty wins
pub const NAME: &[&str] = &["Name", "FullName"];
pub const RELATION: &[&str] = &["Relation", "Relationship"];
pub const CONTACT: &[&str] = &["Contact", "Phone", "Email"];

pub const CREATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("Name", "Name").required(),
    FieldSpec::text("Relation", "Relation"),
    FieldSpec::text("Contact", "Contact"),
    FieldSpec::new("Birthday", "Birthday", InputKind::Date),
];

/// Title: name. Meta: relation • contact.
pub fn row(record: &Record) -> RowView {
    RowView::new(
        Dataset::Family,
        record.id(),
        record.first_of(NAME),
        &[record.first_of(RELATION), record.first_of(CONTACT)],
    )
}
