//! Configuration validation.
//!
//! Validates the dashboard INI before any settings are built from it.

use crate::domain::catalog::MarketKind;
use crate::domain::error::GuideError;
use crate::ports::config_port::ConfigPort;

pub const REFERENCE_KEYS: [&str; 3] = ["dividend_yield", "dividend_growth", "profit_growth"];

pub fn validate_settings_config(config: &dyn ConfigPort) -> Result<(), GuideError> {
    validate_reference_values(config)?;
    validate_listings(config, "companies")?;
    validate_listings(config, "benchmarks")?;
    validate_markets(config)?;
    Ok(())
}

/// Data commands need `[data] dir`.
pub fn validate_data_dir(config: &dyn ConfigPort) -> Result<(), GuideError> {
    match config.get_string("data", "dir") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(GuideError::ConfigMissing {
            section: "data".to_string(),
            key: "dir".to_string(),
        }),
    }
}

fn validate_reference_values(config: &dyn ConfigPort) -> Result<(), GuideError> {
    for key in REFERENCE_KEYS {
        let Some(raw) = config.get_string("reference", key) else {
            continue;
        };
        let value: f64 = raw.trim().parse().map_err(|_| GuideError::ConfigInvalid {
            section: "reference".to_string(),
            key: key.to_string(),
            reason: format!("'{}' is not a number", raw.trim()),
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(GuideError::ConfigInvalid {
                section: "reference".to_string(),
                key: key.to_string(),
                reason: format!("{key} must be a non-negative number"),
            });
        }
    }
    Ok(())
}

fn validate_listings(config: &dyn ConfigPort, section: &str) -> Result<(), GuideError> {
    for (ticker, name) in config.section_entries(section) {
        if name.trim().is_empty() {
            return Err(GuideError::ConfigInvalid {
                section: section.to_string(),
                key: ticker,
                reason: "display name must not be empty".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_markets(config: &dyn ConfigPort) -> Result<(), GuideError> {
    for (key, list) in config.section_entries("markets") {
        if key.parse::<MarketKind>().is_err() {
            return Err(GuideError::ConfigInvalid {
                section: "markets".to_string(),
                key,
                reason: "unknown market".to_string(),
            });
        }
        if list.split(',').any(|t| t.trim().is_empty()) {
            return Err(GuideError::ConfigInvalid {
                section: "markets".to_string(),
                key,
                reason: "empty ticker in list".to_string(),
            });
        }
    }
    Ok(())
}
