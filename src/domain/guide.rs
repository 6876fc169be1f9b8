//! Market guide assembly: strategy scores and historical returns for one
//! ticker, computed independently and presented side by side.

use crate::domain::error::GuideError;
use crate::domain::fear_greed::FearGreedReading;
use crate::domain::price::HistoryRange;
use crate::domain::returns::{ReturnsTable, compute_returns};
use crate::domain::scoring::{StrategyScore, score_all};
use crate::domain::settings::DashboardSettings;
use crate::domain::snapshot::MetricsSnapshot;
use crate::ports::data_port::MarketDataPort;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct MarketGuide {
    pub ticker: String,
    pub name: Option<String>,
    pub as_of: NaiveDate,
    pub metrics: MetricsSnapshot,
    pub scores: Vec<StrategyScore>,
    pub returns: ReturnsTable,
    pub observations: usize,
    pub fear_greed: Option<FearGreedReading>,
}

impl MarketGuide {
    pub fn with_fear_greed(mut self, reading: Option<FearGreedReading>) -> Self {
        self.fear_greed = reading;
        self
    }

    /// Strategies scoring at or above the well-suited threshold.
    pub fn well_suited(&self) -> Vec<&StrategyScore> {
        self.scores
            .iter()
            .filter(|s| s.score >= crate::domain::scoring::WELL_SUITED_THRESHOLD)
            .collect()
    }
}

pub fn build_market_guide(
    data: &dyn MarketDataPort,
    ticker: &str,
    settings: &DashboardSettings,
    as_of: NaiveDate,
) -> Result<MarketGuide, GuideError> {
    let metrics = data.fetch_metrics(ticker)?;
    let history = data.fetch_price_history(ticker, HistoryRange::Max)?;

    let scores = score_all(&metrics, &settings.reference);
    let returns = compute_returns(&history, as_of);

    Ok(MarketGuide {
        ticker: ticker.to_string(),
        name: settings.display_name(ticker).map(str::to_string),
        as_of,
        metrics,
        scores,
        returns,
        observations: history.len(),
        fear_greed: None,
    })
}
