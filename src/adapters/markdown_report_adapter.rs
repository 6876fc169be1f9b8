//! Markdown report adapter implementing ReportPort.

use crate::domain::fear_greed::{FearGreedReading, gauge};
use crate::domain::guide::MarketGuide;
use crate::domain::scoring::{Strategy, StrategyScore};
use crate::domain::snapshot::{MetricsSnapshot, NOT_AVAILABLE, format_percent, format_ratio};
use crate::ports::report_port::ReportPort;

const GAUGE_WIDTH: usize = 20;

enum Preference {
    Higher,
    Lower,
}

impl Preference {
    fn as_str(&self) -> &'static str {
        match self {
            Preference::Higher => "Higher is better",
            Preference::Lower => "Lower is better",
        }
    }
}

fn metric_rows(strategy: Strategy, m: &MetricsSnapshot) -> Vec<(&'static str, String, Preference)> {
    match strategy {
        Strategy::DividendGrowth => vec![
            ("Dividend Yield", format_percent(m.dividend_yield), Preference::Higher),
            ("Payout Ratio", format_percent(m.payout_ratio), Preference::Lower),
            ("5Y Dividend Growth", format_percent(m.dividend_growth_5y), Preference::Higher),
        ],
        Strategy::DividendYield => vec![(
            "Dividend Yield",
            format_percent(m.dividend_yield),
            Preference::Higher,
        )],
        Strategy::ProfitGrowth => vec![
            ("Revenue Growth", format_percent(m.revenue_growth), Preference::Higher),
            ("Earnings Growth", format_percent(m.earnings_growth), Preference::Higher),
            ("P/E Ratio", format_ratio(m.trailing_pe), Preference::Lower),
        ],
    }
}

pub struct MarkdownReportAdapter;

impl MarkdownReportAdapter {
    pub fn new() -> Self {
        Self
    }

    fn write_strategy(out: &mut String, score: &StrategyScore, metrics: &MetricsSnapshot) {
        out.push_str(&format!("### {} Strategy\n\n", score.strategy));
        out.push_str(&format!("{}\n\n", score.strategy.description()));
        out.push_str(&format!("**{} Score: {}/10**\n\n", score.strategy, score.score));
        out.push_str(&format!("> {}\n\n", score.verdict()));
        out.push_str("| Metric | Value | Guidance |\n");
        out.push_str("|--------|-------|----------|\n");
        for (name, value, pref) in metric_rows(score.strategy, metrics) {
            out.push_str(&format!("| {} | {} | {} |\n", name, value, pref.as_str()));
        }
        out.push_str(&format!("\nReference value: {}\n\n", format_percent(Some(score.reference))));
    }

    fn write_returns(out: &mut String, guide: &MarketGuide, display_name: &str) {
        out.push_str("## Historical Performance\n\n");
        out.push_str(&format!(
            "Price change of {} over different time periods ({} observations).\n\n",
            display_name,
            guide.observations
        ));
        out.push_str("| Time Period | Price Change (%) |\n");
        out.push_str("|-------------|------------------|\n");
        for (lookback, value) in guide.returns.entries() {
            let cell = match value {
                Some(v) => format!("{:.2}", v),
                None => NOT_AVAILABLE.to_string(),
            };
            out.push_str(&format!("| {} | {} |\n", lookback.title(), cell));
        }
        out.push('\n');
    }

    fn write_fear_greed(out: &mut String, reading: &FearGreedReading) {
        let band = reading.band();
        out.push_str("## Fear & Greed Index\n\n");
        out.push_str(&format!(
            "Current index value: {} ({})\n\n",
            reading.value,
            reading.classification
        ));
        out.push_str(&format!("`{}`\n\n", gauge(reading.value, GAUGE_WIDTH)));
        out.push_str(&format!("**{}**: {}\n\n", band, band.interpretation()));
    }
}

impl Default for MarkdownReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportPort for MarkdownReportAdapter {
    fn render(&self, guide: &MarketGuide) -> String {
        let display_name = guide.name.as_deref().unwrap_or(&guide.ticker);
        let mut out = String::new();

        out.push_str(&format!("# Market Guide: {} ({})\n\n", display_name, guide.ticker));
        out.push_str(&format!("As of {}\n\n", guide.as_of.format("%Y-%m-%d")));

        if let Some(reading) = &guide.fear_greed {
            Self::write_fear_greed(&mut out, reading);
        }

        out.push_str("## Investment Strategies\n\n");
        for score in &guide.scores {
            Self::write_strategy(&mut out, score, &guide.metrics);
        }

        Self::write_returns(&mut out, guide, display_name);
        out
    }
}
