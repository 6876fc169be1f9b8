#![allow(dead_code)]

use chrono::NaiveDate;
use finguide::domain::error::GuideError;
use finguide::domain::fear_greed::FearGreedReading;
use finguide::domain::news::{NewsArticle, NewsQuery, SentimentLabel, SentimentVerdict};
pub use finguide::domain::price::{HistoryRange, PriceBar};
use finguide::domain::snapshot::MetricsSnapshot;
use finguide::ports::data_port::MarketDataPort;
use finguide::ports::news_port::{FearGreedPort, NewsPort, SentimentPort};
use std::collections::HashMap;

pub struct MockMarketData {
    pub metrics: HashMap<String, MetricsSnapshot>,
    pub bars: HashMap<String, Vec<PriceBar>>,
    pub errors: HashMap<String, String>,
}

impl MockMarketData {
    pub fn new() -> Self {
        Self {
            metrics: HashMap::new(),
            bars: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_metrics(mut self, ticker: &str, metrics: MetricsSnapshot) -> Self {
        self.metrics.insert(ticker.to_string(), metrics);
        self
    }

    pub fn with_bars(mut self, ticker: &str, bars: Vec<PriceBar>) -> Self {
        self.bars.insert(ticker.to_string(), bars);
        self
    }

    pub fn with_error(mut self, ticker: &str, reason: &str) -> Self {
        self.errors.insert(ticker.to_string(), reason.to_string());
        self
    }

    fn check(&self, ticker: &str) -> Result<(), GuideError> {
        match self.errors.get(ticker) {
            Some(reason) => Err(GuideError::upstream("market data", reason.clone())),
            None => Ok(()),
        }
    }
}

impl MarketDataPort for MockMarketData {
    fn fetch_metrics(&self, ticker: &str) -> Result<MetricsSnapshot, GuideError> {
        self.check(ticker)?;
        Ok(self.metrics.get(ticker).cloned().unwrap_or_default())
    }

    fn fetch_price_history(
        &self,
        ticker: &str,
        range: HistoryRange,
    ) -> Result<Vec<PriceBar>, GuideError> {
        self.check(ticker)?;
        let mut bars = self
            .bars
            .get(ticker)
            .cloned()
            .ok_or_else(|| GuideError::NoData {
                ticker: ticker.to_string(),
            })?;
        if let Some(start) = bars.last().and_then(|b| range.start_from(b.date)) {
            bars.retain(|b| b.date >= start);
        }
        Ok(bars)
    }
}

pub struct MockNews {
    pub articles: Vec<NewsArticle>,
    pub error: Option<String>,
}

impl MockNews {
    pub fn new(articles: Vec<NewsArticle>) -> Self {
        Self {
            articles,
            error: None,
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            articles: Vec::new(),
            error: Some(reason.to_string()),
        }
    }
}

impl NewsPort for MockNews {
    fn fetch_news(&self, _query: &NewsQuery) -> Result<Vec<NewsArticle>, GuideError> {
        match &self.error {
            Some(reason) => Err(GuideError::upstream("news", reason.clone())),
            None => Ok(self.articles.clone()),
        }
    }
}

/// Classifies every text with the same label.
pub struct FixedSentiment(pub SentimentLabel);

impl SentimentPort for FixedSentiment {
    fn classify(&self, _text: &str) -> Result<SentimentVerdict, GuideError> {
        Ok(SentimentVerdict {
            label: self.0,
            confidence: 0.75,
        })
    }
}

pub struct MockFearGreed(pub Option<FearGreedReading>);

impl FearGreedPort for MockFearGreed {
    fn fetch_current(&self) -> Result<Option<FearGreedReading>, GuideError> {
        Ok(self.0.clone())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn article(title: &str, description: Option<&str>) -> NewsArticle {
    NewsArticle {
        title: title.to_string(),
        description: description.map(str::to_string),
        url: format!("https://news.example/{}", title.to_lowercase().replace(' ', "-")),
        source_id: Some("reuters".to_string()),
        published_at: None,
    }
}

/// Daily bars starting at `start_date`, close rising by `step` each day.
pub fn generate_bars(start_date: &str, count: usize, start_price: f64, step: f64) -> Vec<PriceBar> {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d").unwrap();
    (0..count)
        .map(|i| {
            let close = start_price + i as f64 * step;
            PriceBar {
                date: start + chrono::Duration::days(i as i64),
                open: close - 0.5,
                high: close + 1.0,
                low: close - 1.0,
                close,
                volume: 1000 + i as i64,
            }
        })
        .collect()
}

/// Bars from a list of closes on consecutive days.
pub fn bars_from_closes(start_date: &str, closes: &[f64]) -> Vec<PriceBar> {
    let start = NaiveDate::parse_from_str(start_date, "%Y-%m-%d").unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| PriceBar::from_close(start + chrono::Duration::days(i as i64), c))
        .collect()
}

pub fn dividend_payer() -> MetricsSnapshot {
    MetricsSnapshot {
        dividend_yield: Some(0.05),
        payout_ratio: Some(0.4),
        revenue_growth: Some(0.04),
        earnings_growth: Some(0.06),
        trailing_pe: Some(18.2),
        dividend_growth_5y: Some(0.07),
        market_cap: Some(250_000_000_000.0),
        sector: Some("Consumer Defensive".to_string()),
        industry: Some("Beverages".to_string()),
    }
}

/// Writes `<TICKER>.csv` price files into `dir`.
pub fn write_price_csv(dir: &std::path::Path, ticker: &str, bars: &[PriceBar]) {
    let mut content = String::from("date,open,high,low,close,volume\n");
    for b in bars {
        content.push_str(&format!(
            "{},{},{},{},{},{}\n",
            b.date.format("%Y-%m-%d"),
            b.open,
            b.high,
            b.low,
            b.close,
            b.volume
        ));
    }
    std::fs::write(dir.join(format!("{ticker}.csv")), content).unwrap();
}
