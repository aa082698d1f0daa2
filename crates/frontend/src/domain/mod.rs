pub mod a004_finance_entry;
