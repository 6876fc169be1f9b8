//! Fundamental metrics reported by a market-data provider for one ticker.

pub const NOT_AVAILABLE: &str = "N/A";

/// Point-in-time fundamentals. Any field may be absent when the provider did
/// not report it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub dividend_yield: Option<f64>,
    pub payout_ratio: Option<f64>,
    pub revenue_growth: Option<f64>,
    pub earnings_growth: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub dividend_growth_5y: Option<f64>,
    pub market_cap: Option<f64>,
    pub sector: Option<String>,
    pub industry: Option<String>,
}

impl MetricsSnapshot {
    pub fn is_empty(&self) -> bool {
        *self == MetricsSnapshot::default()
    }
}

/// Fraction rendered as a percentage with two decimals, e.g. `0.0123` -> `1.23%`.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}%", v * 100.0),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn format_ratio(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Whole-dollar amount with thousands separators, e.g. `$3,012,000`.
pub fn format_currency(value: Option<f64>) -> String {
    format_grouped(value, "$")
}

/// Rounded whole number with thousands separators, e.g. `1,250,300`.
pub fn format_thousands(value: Option<f64>) -> String {
    format_grouped(value, "")
}

fn format_grouped(value: Option<f64>, unit: &str) -> String {
    let v = match value {
        Some(v) if v.is_finite() => v.round(),
        _ => return NOT_AVAILABLE.to_string(),
    };
    let digits = format!("{}", v.abs() as u128);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if v < 0.0 { "-" } else { "" };
    format!("{sign}{unit}{grouped}")
}

pub fn format_text(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}
