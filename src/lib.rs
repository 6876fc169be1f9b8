//! finguide: investment guide toolkit.
//!
//! Scores tickers against dividend and growth strategies, computes
//! historical returns, company and market statistics, and news sentiment.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`], command dispatch in [`cli`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
