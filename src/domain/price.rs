//! Daily price bars and history ranges.

use chrono::{Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl PriceBar {
    /// A bar carrying only a close; open/high/low mirror the close.
    pub fn from_close(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            open: close,
            high: close,
            low: close,
            close,
            volume: 0,
        }
    }
}

/// How much history to request from a market-data provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryRange {
    Max,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    FiveYears,
}

impl HistoryRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryRange::Max => "max",
            HistoryRange::OneMonth => "1mo",
            HistoryRange::ThreeMonths => "3mo",
            HistoryRange::SixMonths => "6mo",
            HistoryRange::OneYear => "1y",
            HistoryRange::FiveYears => "5y",
        }
    }

    /// First date included when the range ends at `end`. `None` means unbounded.
    pub fn start_from(&self, end: NaiveDate) -> Option<NaiveDate> {
        let months = match self {
            HistoryRange::Max => return None,
            HistoryRange::OneMonth => 1,
            HistoryRange::ThreeMonths => 3,
            HistoryRange::SixMonths => 6,
            HistoryRange::OneYear => 12,
            HistoryRange::FiveYears => 60,
        };
        end.checked_sub_months(Months::new(months))
    }
}

impl fmt::Display for HistoryRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "max" => Ok(HistoryRange::Max),
            "1mo" => Ok(HistoryRange::OneMonth),
            "3mo" => Ok(HistoryRange::ThreeMonths),
            "6mo" => Ok(HistoryRange::SixMonths),
            "1y" => Ok(HistoryRange::OneYear),
            "5y" => Ok(HistoryRange::FiveYears),
            other => Err(format!(
                "unknown period '{other}' (expected max, 1mo, 3mo, 6mo, 1y or 5y)"
            )),
        }
    }
}
