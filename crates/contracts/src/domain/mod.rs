pub mod a001_family_member;
pub mod a002_task;
pub mod a003_inventory_item;
pub mod a004_finance_entry;
pub mod a005_reminder;
pub mod common;
