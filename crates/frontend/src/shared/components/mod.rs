pub mod create_form;
pub mod dataset_pane;
pub mod date_input;
pub mod edit_modal;
pub mod record_row;
