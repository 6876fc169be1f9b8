//! Rule-based investment strategy scoring.
//!
//! Each strategy maps a metrics snapshot to an integer suitability score in
//! [0, 10]. A missing input yields the neutral score.

use crate::domain::snapshot::MetricsSnapshot;
use std::fmt;

pub const MAX_SCORE: f64 = 10.0;
pub const NEUTRAL_SCORE: u8 = 5;
pub const WELL_SUITED_THRESHOLD: u8 = 7;

/// Benchmark values shown next to each strategy score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceValues {
    pub dividend_yield: f64,
    pub dividend_growth: f64,
    pub profit_growth: f64,
}

impl Default for ReferenceValues {
    fn default() -> Self {
        Self {
            dividend_yield: 0.015,
            dividend_growth: 0.08,
            profit_growth: 0.10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    DividendGrowth,
    DividendYield,
    ProfitGrowth,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::DividendGrowth,
        Strategy::DividendYield,
        Strategy::ProfitGrowth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::DividendGrowth => "Dividend Growth",
            Strategy::DividendYield => "Dividend Yield",
            Strategy::ProfitGrowth => "Profit Growth",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Strategy::DividendGrowth => {
                "Invests in companies that consistently raise their dividend payouts, \
                 aiming for a steady and growing income stream alongside capital appreciation."
            }
            Strategy::DividendYield => {
                "Selects securities with high dividend yields, prioritising current income \
                 relative to the price paid over capital appreciation."
            }
            Strategy::ProfitGrowth => {
                "Targets businesses with strong and consistent growth in revenue and earnings, \
                 seeking long-term capital appreciation."
            }
        }
    }

    pub fn score(&self, metrics: &MetricsSnapshot, reference: &ReferenceValues) -> StrategyScore {
        match self {
            Strategy::DividendGrowth => score_dividend_growth(metrics, reference),
            Strategy::DividendYield => score_dividend_yield(metrics, reference),
            Strategy::ProfitGrowth => score_profit_growth(metrics, reference),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suitability {
    WellSuited,
    NotIdeal,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyScore {
    pub strategy: Strategy,
    pub score: u8,
    pub reference: f64,
}

impl StrategyScore {
    pub fn suitability(&self) -> Suitability {
        classify(self.score)
    }

    pub fn verdict(&self) -> String {
        match self.suitability() {
            Suitability::WellSuited => {
                format!("This stock is well-suited for a {} Strategy.", self.strategy)
            }
            Suitability::NotIdeal => {
                format!("This stock may not be ideal for a {} Strategy.", self.strategy)
            }
        }
    }
}

pub fn classify(score: u8) -> Suitability {
    if score >= WELL_SUITED_THRESHOLD {
        Suitability::WellSuited
    } else {
        Suitability::NotIdeal
    }
}

/// dg*4 + (1 - payout)*6, requires 5y dividend growth and payout ratio.
pub fn score_dividend_growth(metrics: &MetricsSnapshot, reference: &ReferenceValues) -> StrategyScore {
    let raw = match (present(metrics.dividend_growth_5y), present(metrics.payout_ratio)) {
        (Some(growth), Some(payout)) => Some(growth * 4.0 + (1.0 - payout) * 6.0),
        _ => None,
    };
    StrategyScore {
        strategy: Strategy::DividendGrowth,
        score: finalize(raw),
        reference: reference.dividend_growth,
    }
}

/// yield*15, requires dividend yield.
pub fn score_dividend_yield(metrics: &MetricsSnapshot, reference: &ReferenceValues) -> StrategyScore {
    let raw = present(metrics.dividend_yield).map(|y| y * 15.0);
    StrategyScore {
        strategy: Strategy::DividendYield,
        score: finalize(raw),
        reference: reference.dividend_yield,
    }
}

/// mean(revenue growth, earnings growth)*20, requires both.
pub fn score_profit_growth(metrics: &MetricsSnapshot, reference: &ReferenceValues) -> StrategyScore {
    let raw = match (present(metrics.revenue_growth), present(metrics.earnings_growth)) {
        (Some(revenue), Some(earnings)) => Some((revenue + earnings) / 2.0 * 20.0),
        _ => None,
    };
    StrategyScore {
        strategy: Strategy::ProfitGrowth,
        score: finalize(raw),
        reference: reference.profit_growth,
    }
}

/// All three strategies in display order.
pub fn score_all(metrics: &MetricsSnapshot, reference: &ReferenceValues) -> Vec<StrategyScore> {
    Strategy::ALL
        .iter()
        .map(|s| s.score(metrics, reference))
        .collect()
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

// Clamp to [0, 10], then round half to even.
fn finalize(raw: Option<f64>) -> u8 {
    match raw {
        Some(v) if v.is_finite() => v.clamp(0.0, MAX_SCORE).round_ties_even() as u8,
        _ => NEUTRAL_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop, prop_assert, prop_assert_eq, proptest};
    use proptest::strategy::Strategy as PropStrategy;

    fn full_snapshot() -> MetricsSnapshot {
        MetricsSnapshot {
            dividend_yield: Some(0.005),
            payout_ratio: Some(0.15),
            revenue_growth: Some(0.06),
            earnings_growth: Some(0.11),
            trailing_pe: Some(29.0),
            dividend_growth_5y: Some(0.05),
            market_cap: Some(3.0e12),
            sector: Some("Technology".into()),
            industry: Some("Consumer Electronics".into()),
        }
    }

    #[test]
    fn dividend_yield_small_value_rounds_up() {
        let metrics = MetricsSnapshot {
            dividend_yield: Some(0.04),
            ..Default::default()
        };
        let s = score_dividend_yield(&metrics, &ReferenceValues::default());
        assert_eq!(s.score, 1);
        assert_eq!(s.reference, 0.015);
    }

    #[test]
    fn dividend_yield_clamps_at_ten() {
        let metrics = MetricsSnapshot {
            dividend_yield: Some(1.0),
            ..Default::default()
        };
        assert_eq!(score_dividend_yield(&metrics, &ReferenceValues::default()).score, 10);
    }

    #[test]
    fn dividend_growth_formula() {
        // 0.05*4 + 0.85*6 = 5.3
        let s = score_dividend_growth(&full_snapshot(), &ReferenceValues::default());
        assert_eq!(s.score, 5);
        assert_eq!(s.strategy, Strategy::DividendGrowth);
        assert_eq!(s.reference, 0.08);
    }

    #[test]
    fn dividend_growth_low_payout_scores_high() {
        // 0.5*4 + (1-0.1)*6 = 7.4
        let metrics = MetricsSnapshot {
            dividend_growth_5y: Some(0.5),
            payout_ratio: Some(0.1),
            ..Default::default()
        };
        let s = score_dividend_growth(&metrics, &ReferenceValues::default());
        assert_eq!(s.score, 7);
        assert_eq!(s.suitability(), Suitability::WellSuited);
    }

    #[test]
    fn profit_growth_formula() {
        // (0.06 + 0.11) / 2 * 20 = 1.7
        let s = score_profit_growth(&full_snapshot(), &ReferenceValues::default());
        assert_eq!(s.score, 2);
        assert_eq!(s.reference, 0.10);
    }

    #[test]
    fn missing_inputs_give_neutral_score() {
        let empty = MetricsSnapshot::default();
        for s in score_all(&empty, &ReferenceValues::default()) {
            assert_eq!(s.score, NEUTRAL_SCORE);
        }

        let only_revenue = MetricsSnapshot {
            revenue_growth: Some(0.9),
            ..Default::default()
        };
        assert_eq!(
            score_profit_growth(&only_revenue, &ReferenceValues::default()).score,
            NEUTRAL_SCORE
        );

        let only_payout = MetricsSnapshot {
            payout_ratio: Some(0.0),
            ..Default::default()
        };
        assert_eq!(
            score_dividend_growth(&only_payout, &ReferenceValues::default()).score,
            NEUTRAL_SCORE
        );
    }

    #[test]
    fn non_finite_input_counts_as_missing() {
        let metrics = MetricsSnapshot {
            dividend_yield: Some(f64::NAN),
            ..Default::default()
        };
        assert_eq!(
            score_dividend_yield(&metrics, &ReferenceValues::default()).score,
            NEUTRAL_SCORE
        );
    }

    #[test]
    fn negative_growth_floors_at_zero() {
        let metrics = MetricsSnapshot {
            revenue_growth: Some(-0.4),
            earnings_growth: Some(-0.6),
            ..Default::default()
        };
        assert_eq!(score_profit_growth(&metrics, &ReferenceValues::default()).score, 0);
    }

    #[test]
    fn rounding_is_half_to_even() {
        assert_eq!(finalize(Some(0.5)), 0);
        assert_eq!(finalize(Some(2.5)), 2);
        assert_eq!(finalize(Some(3.5)), 4);
        assert_eq!(finalize(Some(9.6)), 10);
        assert_eq!(finalize(Some(14.0)), 10);
        assert_eq!(finalize(None), NEUTRAL_SCORE);
    }

    #[test]
    fn threshold_boundary() {
        assert_eq!(classify(7), Suitability::WellSuited);
        assert_eq!(classify(6), Suitability::NotIdeal);
        assert_eq!(classify(10), Suitability::WellSuited);
        assert_eq!(classify(0), Suitability::NotIdeal);
    }

    #[test]
    fn verdict_text() {
        let s = StrategyScore {
            strategy: Strategy::DividendYield,
            score: 8,
            reference: 0.015,
        };
        assert_eq!(s.verdict(), "This stock is well-suited for a Dividend Yield Strategy.");
        let s = StrategyScore { score: 3, ..s };
        assert_eq!(
            s.verdict(),
            "This stock may not be ideal for a Dividend Yield Strategy."
        );
    }

    #[test]
    fn score_all_order_and_references() {
        let reference = ReferenceValues {
            dividend_yield: 0.02,
            dividend_growth: 0.05,
            profit_growth: 0.03,
        };
        let scores = score_all(&full_snapshot(), &reference);
        let order: Vec<_> = scores.iter().map(|s| s.strategy).collect();
        assert_eq!(order, Strategy::ALL.to_vec());
        assert_eq!(scores[0].reference, 0.05);
        assert_eq!(scores[1].reference, 0.02);
        assert_eq!(scores[2].reference, 0.03);
    }

    fn metric() -> impl PropStrategy<Value = Option<f64>> {
        prop::option::of(-100.0f64..100.0)
    }

    proptest! {
        #[test]
        fn scores_stay_within_bounds(
            dy in metric(), pr in metric(), rg in metric(),
            eg in metric(), dg in metric(),
        ) {
            let metrics = MetricsSnapshot {
                dividend_yield: dy,
                payout_ratio: pr,
                revenue_growth: rg,
                earnings_growth: eg,
                dividend_growth_5y: dg,
                ..Default::default()
            };
            for s in score_all(&metrics, &ReferenceValues::default()) {
                prop_assert!(s.score <= 10);
            }
        }

        #[test]
        fn missing_yield_is_always_neutral(pr in metric(), rg in metric()) {
            let metrics = MetricsSnapshot {
                dividend_yield: None,
                payout_ratio: pr,
                revenue_growth: rg,
                ..Default::default()
            };
            prop_assert_eq!(
                score_dividend_yield(&metrics, &ReferenceValues::default()).score,
                NEUTRAL_SCORE
            );
        }
    }
}
