//! Historical price returns over fixed lookback windows.
//!
//! return(w) = (C[last] / C[len - w] - 1) * 100
//! A window longer than the series is "not available" (`None`).

use crate::domain::price::PriceBar;
use chrono::{Datelike, NaiveDate};
use std::fmt;

pub const TRADING_DAYS_PER_YEAR: usize = 252;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookback {
    TwentyYears,
    FifteenYears,
    TenYears,
    FiveYears,
    OneYear,
    CurrentYear,
}

impl Lookback {
    /// Display order of the returns table.
    pub const ALL: [Lookback; 6] = [
        Lookback::TwentyYears,
        Lookback::FifteenYears,
        Lookback::TenYears,
        Lookback::FiveYears,
        Lookback::OneYear,
        Lookback::CurrentYear,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Lookback::TwentyYears => "20_years",
            Lookback::FifteenYears => "15_years",
            Lookback::TenYears => "10_years",
            Lookback::FiveYears => "5_years",
            Lookback::OneYear => "1_year",
            Lookback::CurrentYear => "current_year",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Lookback::TwentyYears => "20 Years",
            Lookback::FifteenYears => "15 Years",
            Lookback::TenYears => "10 Years",
            Lookback::FiveYears => "5 Years",
            Lookback::OneYear => "1 Year",
            Lookback::CurrentYear => "Current Year",
        }
    }

    /// Window length in trading days; `None` for the calendar-year window,
    /// whose length depends on the series.
    pub fn trading_days(&self) -> Option<usize> {
        let years = match self {
            Lookback::TwentyYears => 20,
            Lookback::FifteenYears => 15,
            Lookback::TenYears => 10,
            Lookback::FiveYears => 5,
            Lookback::OneYear => 1,
            Lookback::CurrentYear => return None,
        };
        Some(years * TRADING_DAYS_PER_YEAR)
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnsTable {
    entries: Vec<(Lookback, Option<f64>)>,
}

impl ReturnsTable {
    pub fn get(&self, lookback: Lookback) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| *l == lookback)
            .and_then(|(_, v)| *v)
    }

    pub fn entries(&self) -> &[(Lookback, Option<f64>)] {
        &self.entries
    }

    pub fn available_count(&self) -> usize {
        self.entries.iter().filter(|(_, v)| v.is_some()).count()
    }
}

/// Compute the returns table for an ascending price series as of `as_of`.
pub fn compute_returns(series: &[PriceBar], as_of: NaiveDate) -> ReturnsTable {
    let entries = Lookback::ALL
        .iter()
        .map(|&lookback| {
            let window = match lookback.trading_days() {
                Some(days) => days,
                None => observations_in_year(series, as_of.year()),
            };
            (lookback, window_return(series, window))
        })
        .collect();
    ReturnsTable { entries }
}

/// Percentage change from the `window`-th close counted back from the end to
/// the last close.
pub fn window_return(series: &[PriceBar], window: usize) -> Option<f64> {
    if window == 0 || series.len() < window {
        return None;
    }
    let last = series.last()?.close;
    let base = series[series.len() - window].close;
    if base == 0.0 {
        return None;
    }
    let pct = (last / base - 1.0) * 100.0;
    pct.is_finite().then_some(pct)
}

fn observations_in_year(series: &[PriceBar], year: i32) -> usize {
    series.iter().filter(|b| b.date.year() == year).count()
}
