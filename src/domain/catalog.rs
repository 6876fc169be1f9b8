//! Ticker catalogs: the company list, benchmark indices and per-market
//! instrument lists offered by the dashboard.

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_BENCHMARK: &str = "^GSPC";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub ticker: String,
    pub name: String,
}

impl Listing {
    pub fn new(ticker: &str, name: &str) -> Self {
        Self {
            ticker: ticker.to_uppercase(),
            name: name.to_string(),
        }
    }
}

pub fn default_companies() -> Vec<Listing> {
    [
        ("AAPL", "Apple Inc."),
        ("MSFT", "Microsoft Corporation"),
        ("GOOGL", "Alphabet Inc."),
        ("AMZN", "Amazon.com, Inc."),
        ("TSLA", "Tesla, Inc."),
        ("NVDA", "NVIDIA Corporation"),
        ("JPM", "JPMorgan Chase & Co."),
        ("V", "Visa Inc."),
        ("NFLX", "Netflix, Inc."),
    ]
    .iter()
    .map(|(t, n)| Listing::new(t, n))
    .collect()
}

pub fn default_benchmarks() -> Vec<Listing> {
    [
        ("^GSPC", "S&P 500"),
        ("^IXIC", "NASDAQ Composite"),
        ("^DJI", "Dow Jones Industrial Average"),
    ]
    .iter()
    .map(|(t, n)| Listing::new(t, n))
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketKind {
    Equity,
    Bond,
    Cryptocurrency,
    Commodities,
    Forex,
    RealEstate,
}

impl MarketKind {
    pub const ALL: [MarketKind; 6] = [
        MarketKind::Equity,
        MarketKind::Bond,
        MarketKind::Cryptocurrency,
        MarketKind::Commodities,
        MarketKind::Forex,
        MarketKind::RealEstate,
    ];

    /// Key used in the `[markets]` config section.
    pub fn key(&self) -> &'static str {
        match self {
            MarketKind::Equity => "equity",
            MarketKind::Bond => "bond",
            MarketKind::Cryptocurrency => "cryptocurrency",
            MarketKind::Commodities => "commodities",
            MarketKind::Forex => "forex",
            MarketKind::RealEstate => "real_estate",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MarketKind::Equity => "Equity",
            MarketKind::Bond => "Bond",
            MarketKind::Cryptocurrency => "Cryptocurrency",
            MarketKind::Commodities => "Commodities",
            MarketKind::Forex => "Forex",
            MarketKind::RealEstate => "Real Estate",
        }
    }

    pub fn default_tickers(&self) -> Vec<String> {
        let tickers: &[&str] = match self {
            MarketKind::Equity => &[
                "AAPL", "MSFT", "GOOGL", "AMZN", "TSLA", "NFLX", "NVDA", "JPM", "V",
            ],
            MarketKind::Bond => &["TLT", "BND", "IEF", "AGG", "HYG"],
            MarketKind::Cryptocurrency => &["BTC-USD", "ETH-USD", "XRP-USD", "LTC-USD", "ADA-USD"],
            MarketKind::Commodities => &["GLD", "SLV", "USO", "DBA", "PALL"],
            MarketKind::Forex => &["EURUSD=X", "GBPUSD=X", "JPYUSD=X", "AUDUSD=X", "USDCAD=X"],
            MarketKind::RealEstate => &["VNQ", "SCHH", "IYR", "XLRE", "REZ"],
        };
        tickers.iter().map(|t| t.to_string()).collect()
    }

    /// Fixed benchmark for the market. Equity uses the index the caller picks.
    pub fn fixed_benchmark(&self) -> Option<&'static str> {
        match self {
            MarketKind::Bond => Some("^TNX"),
            MarketKind::Commodities => Some("^SPGSCI"),
            _ => None,
        }
    }

    pub fn supports_benchmark(&self) -> bool {
        matches!(
            self,
            MarketKind::Equity | MarketKind::Bond | MarketKind::Commodities
        )
    }
}

impl fmt::Display for MarketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for MarketKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "equity" | "stocks" => Ok(MarketKind::Equity),
            "bond" | "bonds" => Ok(MarketKind::Bond),
            "cryptocurrency" | "crypto" => Ok(MarketKind::Cryptocurrency),
            "commodities" | "commodity" => Ok(MarketKind::Commodities),
            "forex" | "fx" => Ok(MarketKind::Forex),
            "real_estate" | "realestate" => Ok(MarketKind::RealEstate),
            _ => Err(format!("unknown market '{}'", s.trim())),
        }
    }
}

/// A non-empty custom entry wins over the catalog selection. Tickers are
/// upper-cased.
pub fn resolve_ticker(selection: &str, custom: Option<&str>) -> String {
    match custom.map(str::trim).filter(|c| !c.is_empty()) {
        Some(c) => c.to_uppercase(),
        None => selection.trim().to_uppercase(),
    }
}

/// Look a company up by ticker or by display name (case-insensitive).
pub fn find_listing<'a>(listings: &'a [Listing], query: &str) -> Option<&'a Listing> {
    let query = query.trim();
    listings.iter().find(|l| {
        l.ticker.eq_ignore_ascii_case(query) || l.name.eq_ignore_ascii_case(query)
    })
}
