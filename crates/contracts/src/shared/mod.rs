pub mod edit_session;
pub mod error;
pub mod escape;
pub mod form;
pub mod list_view;
pub mod sheet_api;
