pub mod request_log;
pub mod tracing;
