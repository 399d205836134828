pub mod config;
pub mod fixtures;
pub mod request_log;
