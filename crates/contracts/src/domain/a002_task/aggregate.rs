use crate::domain::common::{Dataset, Record, RowView};
use crate::shared::form::{FieldSpec, InputKind};

pub const TASK: &[&str] = &["Task", "Title"];
pub const ASSIGNED_TO: &[&str] = &["AssignedTo", "Assigned To", "Assignee"];
pub const DATE: &[&str] = &["Date", "DueDate", "Due"];
pub const STATUS: &[&str] = &["Status"];

/// Status of every newly created task.
pub const DEFAULT_STATUS: &str = "Pending";

pub const CREATE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("Task", "Task").required(),
    FieldSpec::text("AssignedTo", "Assigned to"),
    FieldSpec::new("Date", "Date", InputKind::Date),
];

/// Title: task. Meta: assignee • date • status.
pub fn row(record: &Record) -> RowView {
    RowView::new(
        Dataset::Tasks,
        record.id(),
        record.first_of(TASK),
        &[
            record.first_of(ASSIGNED_TO),
            record.first_of(DATE),
            record.first_of(STATUS),
        ],
    )
}

pub fn apply_create_defaults(record: &mut Record) {
    record.set(STATUS[0], DEFAULT_STATUS);
}
