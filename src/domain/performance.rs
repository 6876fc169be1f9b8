//! Company performance statistics over a selected price history.

use crate::domain::price::PriceBar;
use crate::domain::snapshot::MetricsSnapshot;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyProfile {
    pub ticker: String,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub market_cap: Option<f64>,
    pub trailing_pe: Option<f64>,
}

impl CompanyProfile {
    pub fn new(ticker: &str, name: Option<&str>, metrics: &MetricsSnapshot) -> Self {
        Self {
            ticker: ticker.to_string(),
            name: name.map(str::to_string),
            sector: metrics.sector.clone(),
            industry: metrics.industry.clone(),
            market_cap: metrics.market_cap,
            trailing_pe: metrics.trailing_pe,
        }
    }
}

/// (last - first) / first * 100
pub fn price_change_pct(bars: &[PriceBar]) -> Option<f64> {
    let first = bars.first()?.close;
    let last = bars.last()?.close;
    if first == 0.0 {
        return None;
    }
    Some((last - first) / first * 100.0)
}

pub fn average_volume(bars: &[PriceBar]) -> Option<f64> {
    if bars.is_empty() {
        return None;
    }
    Some(bars.iter().map(|b| b.volume as f64).sum::<f64>() / bars.len() as f64)
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyChange {
    pub date: NaiveDate,
    pub absolute: Option<f64>,
    pub relative_pct: Option<f64>,
}

/// Close-to-close changes. The first bar has no prior close.
pub fn daily_changes(bars: &[PriceBar]) -> Vec<DailyChange> {
    let mut changes = Vec::with_capacity(bars.len());
    let mut prev: Option<f64> = None;
    for bar in bars {
        let (absolute, relative_pct) = match prev {
            Some(p) => {
                let rel = if p != 0.0 {
                    Some((bar.close - p) / p * 100.0)
                } else {
                    None
                };
                (Some(bar.close - p), rel)
            }
            None => (None, None),
        };
        changes.push(DailyChange {
            date: bar.date,
            absolute,
            relative_pct,
        });
        prev = Some(bar.close);
    }
    changes
}

/// Descriptive statistics. `std` is the sample standard deviation (n - 1);
/// quartiles use linear interpolation between order statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub std: Option<f64>,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl SummaryStats {
    pub fn describe(values: &[f64]) -> Option<Self> {
        let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return None;
        }
        sorted.sort_by(|a, b| a.total_cmp(b));

        let n = sorted.len();
        let mean = sorted.iter().sum::<f64>() / n as f64;
        let std = (n > 1).then(|| {
            let var = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
            var.sqrt()
        });

        Some(SummaryStats {
            count: n,
            mean,
            std,
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[n - 1],
        })
    }
}

// `sorted` must be non-empty and ascending.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

pub fn closes(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}

pub fn volumes(bars: &[PriceBar]) -> Vec<f64> {
    bars.iter().map(|b| b.volume as f64).collect()
}
