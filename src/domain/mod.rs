//! Core domain types and logic.

pub mod price;
pub mod snapshot;
pub mod returns;
pub mod scoring;
pub mod catalog;
pub mod settings;
pub mod performance;
pub mod beta;
pub mod overview;
pub mod news;
pub mod fear_greed;
pub mod guide;
pub mod config_validation;
pub mod error;
