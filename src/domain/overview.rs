//! Market overview statistics: price extremes, trailing 12-month range and
//! benchmark-normalized series.

use crate::domain::price::PriceBar;
use crate::domain::returns::TRADING_DAYS_PER_YEAR;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarketInsights {
    pub highest: PricePoint,
    pub lowest: PricePoint,
    pub opening_price: f64,
    pub closing_price: f64,
    pub high_12m: f64,
    pub low_12m: f64,
    /// (last close / first close - 1) * 100 over the whole series.
    pub period_change_pct: Option<f64>,
}

impl MarketInsights {
    pub fn compute(bars: &[PriceBar]) -> Option<Self> {
        let first = bars.first()?;
        let last = bars.last()?;

        // Earliest bar wins ties.
        let mut highest = first;
        let mut lowest = first;
        for bar in bars {
            if bar.close > highest.close {
                highest = bar;
            }
            if bar.close < lowest.close {
                lowest = bar;
            }
        }

        let window = &bars[bars.len().saturating_sub(TRADING_DAYS_PER_YEAR)..];
        let high_12m = window.iter().map(|b| b.close).fold(f64::NEG_INFINITY, f64::max);
        let low_12m = window.iter().map(|b| b.close).fold(f64::INFINITY, f64::min);

        let period_change_pct = (first.close != 0.0)
            .then(|| (last.close / first.close - 1.0) * 100.0);

        Some(MarketInsights {
            highest: PricePoint {
                date: highest.date,
                value: highest.close,
            },
            lowest: PricePoint {
                date: lowest.date,
                value: lowest.close,
            },
            opening_price: first.open,
            closing_price: last.close,
            high_12m,
            low_12m,
            period_change_pct,
        })
    }
}

/// Close divided by the first close, so series start at 1.0. Empty when the
/// first close is zero.
pub fn normalize(bars: &[PriceBar]) -> Vec<PricePoint> {
    let Some(base) = bars.first().map(|b| b.close).filter(|c| *c != 0.0) else {
        return Vec::new();
    };
    bars.iter()
        .map(|b| PricePoint {
            date: b.date,
            value: b.close / base,
        })
        .collect()
}

/// Normalized asset and benchmark series side by side on common dates.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkComparison {
    pub benchmark: String,
    pub rows: Vec<(NaiveDate, f64, f64)>,
}

impl BenchmarkComparison {
    pub fn build(benchmark: &str, asset: &[PriceBar], bench: &[PriceBar]) -> Self {
        let bench_norm = normalize(bench);
        let rows = normalize(asset)
            .into_iter()
            .filter_map(|a| {
                bench_norm
                    .binary_search_by_key(&a.date, |p| p.date)
                    .ok()
                    .map(|i| (a.date, a.value, bench_norm[i].value))
            })
            .collect();
        Self {
            benchmark: benchmark.to_string(),
            rows,
        }
    }

    /// Normalized asset minus normalized benchmark on the last common date.
    pub fn final_spread(&self) -> Option<f64> {
        self.rows.last().map(|(_, a, b)| a - b)
    }
}
