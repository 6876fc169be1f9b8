//! Port traits separating the domain from data providers and report sinks.

pub mod config_port;
pub mod data_port;
pub mod news_port;
pub mod report_port;
