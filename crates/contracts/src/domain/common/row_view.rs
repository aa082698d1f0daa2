use super::Dataset;
use crate::shared::escape::escape_html;

/// Joins the sub-fields of a meta line.
pub const META_SEPARATOR: &str = " • ";

/// Display form of one record: a title line plus a secondary meta line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub dataset: Dataset,
    pub id: String,
    pub title: String,
    pub meta: String,
}

impl RowView {
    pub fn new<S: AsRef<str>>(dataset: Dataset, id: String, title: String, meta: &[S]) -> Self {
        let meta = meta
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(META_SEPARATOR);
        Self {
            dataset,
            id,
            title,
            meta,
        }
    }

    /// Inner markup of the row body. Title and meta are escaped.
    pub fn markup(&self) -> String {
        format!(
            "<strong>{}</strong><div class=\"row__meta\">{}</div>",
            escape_html(&self.title),
            escape_html(&self.meta)
        )
    }
}
