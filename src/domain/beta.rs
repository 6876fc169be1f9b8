//! Market beta via ordinary least squares on daily returns.
//!
//! asset_return = alpha + beta * market_return
//! Returns are simple close-to-close changes, aligned on dates present in
//! both series.

use crate::domain::price::PriceBar;
use chrono::NaiveDate;
use std::collections::HashMap;

pub const MIN_REGRESSION_OBSERVATIONS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct BetaRegression {
    pub alpha: f64,
    pub beta: f64,
    pub r_squared: f64,
    pub adj_r_squared: f64,
    pub observations: usize,
}

impl BetaRegression {
    pub fn predict(&self, market_return: f64) -> f64 {
        self.alpha + self.beta * market_return
    }

    pub fn sensitivity(&self) -> BetaSensitivity {
        interpret_beta(self.beta)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetaSensitivity {
    MoreVolatile,
    InLine,
    LessVolatile,
}

pub fn interpret_beta(beta: f64) -> BetaSensitivity {
    if (beta - 1.0).abs() < 1e-9 {
        BetaSensitivity::InLine
    } else if beta > 1.0 {
        BetaSensitivity::MoreVolatile
    } else {
        BetaSensitivity::LessVolatile
    }
}

/// Simple daily returns keyed by the date of the later close.
pub fn daily_returns(bars: &[PriceBar]) -> Vec<(NaiveDate, f64)> {
    bars.windows(2)
        .filter(|w| w[0].close != 0.0)
        .map(|w| (w[1].date, w[1].close / w[0].close - 1.0))
        .collect()
}

/// Pairs of (market, asset) returns on common dates, in asset date order.
pub fn align_returns(asset: &[PriceBar], market: &[PriceBar]) -> Vec<(f64, f64)> {
    let market_by_date: HashMap<NaiveDate, f64> = daily_returns(market).into_iter().collect();
    daily_returns(asset)
        .into_iter()
        .filter_map(|(date, a)| market_by_date.get(&date).map(|&m| (m, a)))
        .collect()
}

/// `None` with fewer than three aligned observations or a flat market.
pub fn regress_beta(asset: &[PriceBar], market: &[PriceBar]) -> Option<BetaRegression> {
    ols(&align_returns(asset, market))
}

fn ols(pairs: &[(f64, f64)]) -> Option<BetaRegression> {
    let n = pairs.len();
    if n < MIN_REGRESSION_OBSERVATIONS {
        return None;
    }
    let nf = n as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / nf;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / nf;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    let mut syy = 0.0;
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxx += dx * dx;
        sxy += dx * dy;
        syy += dy * dy;
    }
    if sxx == 0.0 {
        return None;
    }

    let beta = sxy / sxx;
    let alpha = mean_y - beta * mean_x;
    let r_squared = if syy == 0.0 { 1.0 } else { (sxy * sxy) / (sxx * syy) };
    let adj_r_squared = 1.0 - (1.0 - r_squared) * (nf - 1.0) / (nf - 2.0);

    Some(BetaRegression {
        alpha,
        beta,
        r_squared,
        adj_r_squared,
        observations: n,
    })
}
