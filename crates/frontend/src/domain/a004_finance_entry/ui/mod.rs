pub mod summary;

pub use summary::FinanceSummaryStrip;
