//! CSV file market data adapter.
//!
//! Layout of the data directory:
//! - `<TICKER>.csv` with `date,open,high,low,close,volume` rows
//! - `metrics.csv` with one row of fundamentals per ticker; empty cells are
//!   absent metrics

use crate::domain::error::GuideError;
use crate::domain::price::{HistoryRange, PriceBar};
use crate::domain::snapshot::MetricsSnapshot;
use crate::ports::data_port::MarketDataPort;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const METRICS_FILE: &str = "metrics.csv";

pub struct CsvAdapter {
    base_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct MetricsRow {
    ticker: String,
    #[serde(default)]
    dividend_yield: Option<f64>,
    #[serde(default)]
    payout_ratio: Option<f64>,
    #[serde(default)]
    revenue_growth: Option<f64>,
    #[serde(default)]
    earnings_growth: Option<f64>,
    #[serde(default)]
    trailing_pe: Option<f64>,
    #[serde(default)]
    dividend_growth_5y: Option<f64>,
    #[serde(default)]
    market_cap: Option<f64>,
    #[serde(default)]
    sector: Option<String>,
    #[serde(default)]
    industry: Option<String>,
}

impl From<MetricsRow> for MetricsSnapshot {
    fn from(row: MetricsRow) -> Self {
        let text = |s: Option<String>| s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        MetricsSnapshot {
            dividend_yield: row.dividend_yield,
            payout_ratio: row.payout_ratio,
            revenue_growth: row.revenue_growth,
            earnings_growth: row.earnings_growth,
            trailing_pe: row.trailing_pe,
            dividend_growth_5y: row.dividend_growth_5y,
            market_cap: row.market_cap,
            sector: text(row.sector),
            industry: text(row.industry),
        }
    }
}

impl CsvAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, ticker: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", ticker.to_uppercase()))
    }

    /// Tickers with a price file, sorted.
    pub fn list_tickers(&self) -> Result<Vec<String>, GuideError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| {
            GuideError::upstream(
                "prices",
                format!("failed to read directory {}: {}", self.base_path.display(), e),
            )
        })?;

        let mut tickers = Vec::new();
        for entry in entries {
            let entry = entry
                .map_err(|e| GuideError::upstream("prices", format!("directory entry error: {}", e)))?;
            let name = entry.file_name();
            let name_str = name.to_string_lossy();
            if name_str == METRICS_FILE {
                continue;
            }
            if let Some(ticker) = name_str.strip_suffix(".csv") {
                tickers.push(ticker.to_string());
            }
        }

        tickers.sort();
        Ok(tickers)
    }
}

fn parse_field<T: std::str::FromStr>(
    record: &csv::StringRecord,
    index: usize,
    column: &str,
) -> Result<T, GuideError>
where
    T::Err: std::fmt::Display,
{
    record
        .get(index)
        .ok_or_else(|| GuideError::malformed("prices", format!("missing {} column", column)))?
        .trim()
        .parse()
        .map_err(|e| GuideError::malformed("prices", format!("invalid {} value: {}", column, e)))
}

impl MarketDataPort for CsvAdapter {
    fn fetch_metrics(&self, ticker: &str) -> Result<MetricsSnapshot, GuideError> {
        let path = self.base_path.join(METRICS_FILE);
        let content = fs::read_to_string(&path).map_err(|e| {
            GuideError::upstream("metrics", format!("failed to read {}: {}", path.display(), e))
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        for result in rdr.deserialize::<MetricsRow>() {
            let row = result
                .map_err(|e| GuideError::malformed("metrics", format!("CSV parse error: {}", e)))?;
            if row.ticker.trim().eq_ignore_ascii_case(ticker) {
                return Ok(row.into());
            }
        }

        tracing::warn!(ticker = %ticker, "no metrics row; scoring with absent metrics");
        Ok(MetricsSnapshot::default())
    }

    fn fetch_price_history(
        &self,
        ticker: &str,
        range: HistoryRange,
    ) -> Result<Vec<PriceBar>, GuideError> {
        let path = self.csv_path(ticker);
        let content = fs::read_to_string(&path).map_err(|e| {
            tracing::debug!(path = %path.display(), error = %e, "price file unavailable");
            GuideError::NoData {
                ticker: ticker.to_string(),
            }
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in rdr.records() {
            let record = result
                .map_err(|e| GuideError::malformed("prices", format!("CSV parse error: {}", e)))?;

            let date_str = record
                .get(0)
                .ok_or_else(|| GuideError::malformed("prices", "missing date column"))?;
            let date = NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|e| {
                GuideError::malformed("prices", format!("invalid date format: {}", e))
            })?;

            bars.push(PriceBar {
                date,
                open: parse_field(&record, 1, "open")?,
                high: parse_field(&record, 2, "high")?,
                low: parse_field(&record, 3, "low")?,
                close: parse_field(&record, 4, "close")?,
                volume: parse_field(&record, 5, "volume")?,
            });
        }

        bars.sort_by_key(|b| b.date);

        if let Some(start) = bars.last().and_then(|b| range.start_from(b.date)) {
            bars.retain(|b| b.date >= start);
        }

        tracing::debug!(ticker = %ticker, range = %range, observations = bars.len(), "loaded price history");
        Ok(bars)
    }
}
