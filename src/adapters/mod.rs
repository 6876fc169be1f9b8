//! Concrete adapter implementations for ports.

pub mod csv_adapter;
pub mod file_config_adapter;
pub mod json_feed_adapter;
pub mod lexicon_sentiment_adapter;
pub mod markdown_report_adapter;
