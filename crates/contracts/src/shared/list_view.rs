use crate::domain::common::{Record, RowView};
use crate::shared::escape::escape_html;
use crate::shared::sheet_api::ReadResponse;

/// Text of the single row shown for an empty sheet.
pub const NO_RECORDS: &str = "No records";

/// One line of a rendered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Placeholder(String),
    Row(RowView),
}

impl ListEntry {
    pub fn markup(&self) -> String {
        match self {
            ListEntry::Placeholder(text) => escape_html(text),
            ListEntry::Row(row) => row.markup(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, ListEntry::Placeholder(_))
    }
}

/// Render the rows of a read result with `render_row`, in source order.
///
/// An empty result yields exactly one placeholder entry.
pub fn render_list<F>(response: &ReadResponse, render_row: F) -> Vec<ListEntry>
where
    F: Fn(&Record) -> RowView,
{
    if response.rows.is_empty() {
        return vec![ListEntry::Placeholder(NO_RECORDS.to_string())];
    }
    response
        .rows
        .iter()
        .map(|record| ListEntry::Row(render_row(record)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Dataset;
    use serde_json::json;

    fn response(value: serde_json::Value) -> ReadResponse {
        ReadResponse::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_result_gives_one_placeholder() {
        let entries = render_list(&response(json!({"headers": ["ID"], "rows": []})), |r| {
            Dataset::Family.render_row(r)
        });
        assert_eq!(entries, vec![ListEntry::Placeholder(NO_RECORDS.into())]);
    }

    #[test]
    fn test_rows_keep_source_order() {
        let resp = response(json!({
            "headers": ["ID", "Event"],
            "rows": [
                {"ID": 3, "Event": "Zoo"},
                {"ID": 1, "Event": "Aquarium"},
                {"ID": 2, "Event": "Museum"}
            ]
        }));
        let entries = render_list(&resp, |r| Dataset::Reminders.render_row(r));
        let ids: Vec<String> = entries
            .iter()
            .map(|e| match e {
                ListEntry::Row(row) => row.id.clone(),
                ListEntry::Placeholder(_) => panic!("unexpected placeholder"),
            })
            .collect();
        assert_eq!(ids, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_placeholder_markup() {
        let entry = ListEntry::Placeholder(NO_RECORDS.into());
        assert!(entry.is_placeholder());
        assert_eq!(entry.markup(), "No records");
    }
}
