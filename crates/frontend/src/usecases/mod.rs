//! User actions, written against `SheetApi` and `Dialogs` so they run the
//! same with the browser implementations and with test doubles.

pub mod u501_load_dataset;
pub mod u502_create_record;
pub mod u503_edit_record;
pub mod u504_delete_record;

#[cfg(test)]
pub(crate) mod test_support;
