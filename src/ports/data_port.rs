//! Market data access port trait.

use crate::domain::error::GuideError;
use crate::domain::price::{HistoryRange, PriceBar};
use crate::domain::snapshot::MetricsSnapshot;

pub trait MarketDataPort {
    /// Fundamentals for `ticker`. Sparse provider responses are `Ok` with
    /// absent fields.
    fn fetch_metrics(&self, ticker: &str) -> Result<MetricsSnapshot, GuideError>;

    /// Daily bars in ascending date order.
    fn fetch_price_history(
        &self,
        ticker: &str,
        range: HistoryRange,
    ) -> Result<Vec<PriceBar>, GuideError>;
}
