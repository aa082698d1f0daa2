//! Common types shared by all datasets

pub mod dataset;
pub mod record;
pub mod row_view;

// Re-exports
pub use dataset::Dataset;
pub use record::{scalar_text, Record, ID_ALIASES};
pub use row_view::{RowView, META_SEPARATOR};
