//! Dashboard settings shared by every view.
//!
//! Reference values, company and benchmark tables, market catalogs and data
//! locations live in one structure that is built once from configuration and
//! passed explicitly to each operation.

use crate::domain::catalog::{self, Listing, MarketKind};
use crate::domain::config_validation::validate_settings_config;
use crate::domain::error::GuideError;
use crate::domain::scoring::ReferenceValues;
use crate::ports::config_port::ConfigPort;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSources {
    pub dir: Option<PathBuf>,
    pub news_feed: Option<PathBuf>,
    pub fear_greed_feed: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSettings {
    pub reference: ReferenceValues,
    pub companies: Vec<Listing>,
    pub benchmarks: Vec<Listing>,
    /// Equity index used when a view names none.
    pub default_benchmark: String,
    markets: Vec<(MarketKind, Vec<String>)>,
    pub data: DataSources,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            reference: ReferenceValues::default(),
            companies: catalog::default_companies(),
            benchmarks: catalog::default_benchmarks(),
            default_benchmark: catalog::DEFAULT_BENCHMARK.to_string(),
            markets: MarketKind::ALL
                .iter()
                .map(|k| (*k, k.default_tickers()))
                .collect(),
            data: DataSources::default(),
        }
    }
}

impl DashboardSettings {
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, GuideError> {
        validate_settings_config(config)?;

        let defaults = ReferenceValues::default();
        let reference = ReferenceValues {
            dividend_yield: config.get_double("reference", "dividend_yield", defaults.dividend_yield),
            dividend_growth: config.get_double(
                "reference",
                "dividend_growth",
                defaults.dividend_growth,
            ),
            profit_growth: config.get_double("reference", "profit_growth", defaults.profit_growth),
        };

        let mut settings = DashboardSettings {
            reference,
            ..Default::default()
        };

        let companies = read_listings(config, "companies");
        if !companies.is_empty() {
            settings.companies = companies;
        }
        let benchmarks = read_listings(config, "benchmarks");
        if !benchmarks.is_empty() {
            settings.benchmarks = benchmarks;
        }
        settings.default_benchmark = match config.get_string("defaults", "benchmark") {
            Some(t) if !t.trim().is_empty() => t.trim().to_uppercase(),
            _ => fallback_benchmark(&settings.benchmarks),
        };

        for (key, list) in config.section_entries("markets") {
            // Validated above.
            if let Ok(kind) = key.parse::<MarketKind>() {
                let tickers = list.split(',').map(|t| t.trim().to_uppercase()).collect();
                settings.set_market_tickers(kind, tickers);
            }
        }

        settings.data = DataSources {
            dir: config.get_path("data", "dir"),
            news_feed: config.get_path("data", "news_feed"),
            fear_greed_feed: config.get_path("data", "fear_greed_feed"),
        };

        Ok(settings)
    }

    pub fn market_tickers(&self, kind: MarketKind) -> &[String] {
        self.markets
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, t)| t.as_slice())
            .unwrap_or(&[])
    }

    pub fn set_market_tickers(&mut self, kind: MarketKind, tickers: Vec<String>) {
        match self.markets.iter_mut().find(|(k, _)| *k == kind) {
            Some(entry) => entry.1 = tickers,
            None => self.markets.push((kind, tickers)),
        }
    }

    /// Benchmark for a market view; Equity falls back to the default index
    /// when no override is given.
    pub fn benchmark_for(&self, kind: MarketKind, equity_override: Option<&str>) -> Option<String> {
        match kind {
            MarketKind::Equity => Some(
                equity_override
                    .map(str::to_uppercase)
                    .unwrap_or_else(|| self.default_benchmark.clone()),
            ),
            other => other.fixed_benchmark().map(str::to_string),
        }
    }

    /// Display name for a ticker when it is in the company or benchmark table.
    pub fn display_name(&self, ticker: &str) -> Option<&str> {
        catalog::find_listing(&self.companies, ticker)
            .or_else(|| catalog::find_listing(&self.benchmarks, ticker))
            .map(|l| l.name.as_str())
    }
}

/// `^GSPC` when listed, otherwise the first listed index. Section order is not
/// preserved by the config reader, so "first" is the lowest ticker.
fn fallback_benchmark(benchmarks: &[Listing]) -> String {
    catalog::find_listing(benchmarks, catalog::DEFAULT_BENCHMARK)
        .or_else(|| benchmarks.first())
        .map(|b| b.ticker.clone())
        .unwrap_or_else(|| catalog::DEFAULT_BENCHMARK.to_string())
}

fn read_listings(config: &dyn ConfigPort, section: &str) -> Vec<Listing> {
    config
        .section_entries(section)
        .into_iter()
        .map(|(ticker, name)| Listing::new(ticker.trim(), name.trim()))
        .collect()
}
