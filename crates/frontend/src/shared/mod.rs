pub mod api_utils;
pub mod components;
pub mod dialogs;
pub mod modal;
pub mod sheet_client;
