//! News, sentiment and market-mood port traits.

use crate::domain::error::GuideError;
use crate::domain::fear_greed::FearGreedReading;
use crate::domain::news::{NewsArticle, NewsQuery, SentimentVerdict};

pub trait NewsPort {
    fn fetch_news(&self, query: &NewsQuery) -> Result<Vec<NewsArticle>, GuideError>;
}

pub trait SentimentPort {
    fn classify(&self, text: &str) -> Result<SentimentVerdict, GuideError>;
}

pub trait FearGreedPort {
    /// `Ok(None)` when the provider answered without a current reading.
    fn fetch_current(&self) -> Result<Option<FearGreedReading>, GuideError>;
}
