//! Fear & Greed index readings and their interpretation bands.

use std::fmt;

pub const MAX_INDEX_VALUE: u8 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct FearGreedReading {
    pub value: u8,
    /// Label reported by the provider, e.g. "Neutral".
    pub classification: String,
    /// Unix seconds, when the provider supplies it.
    pub timestamp: Option<i64>,
}

impl FearGreedReading {
    pub fn band(&self) -> FearGreedBand {
        FearGreedBand::from_value(self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FearGreedBand {
    ExtremeFear,
    Fear,
    Greed,
    ExtremeGreed,
}

impl FearGreedBand {
    /// 0-25 extreme fear, 26-49 fear, 50-74 greed, 75-100 extreme greed.
    pub fn from_value(value: u8) -> Self {
        match value {
            0..=25 => FearGreedBand::ExtremeFear,
            26..=49 => FearGreedBand::Fear,
            50..=74 => FearGreedBand::Greed,
            _ => FearGreedBand::ExtremeGreed,
        }
    }

    pub fn interpretation(&self) -> &'static str {
        match self {
            FearGreedBand::ExtremeFear => {
                "Investors are highly fearful; markets may be under significant stress, \
                 which can signal buying opportunities if the fear is overblown."
            }
            FearGreedBand::Fear => {
                "A general atmosphere of caution; the market may be volatile or under \
                 downward pressure."
            }
            FearGreedBand::Greed => {
                "Investors are optimistic and inclined towards risk; rallies are likely \
                 but the market may be overheating."
            }
            FearGreedBand::ExtremeGreed => {
                "High enthusiasm and risk-taking; a warning sign that the market could be \
                 due for a pullback."
            }
        }
    }
}

impl fmt::Display for FearGreedBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FearGreedBand::ExtremeFear => "Extreme Fear",
            FearGreedBand::Fear => "Fear",
            FearGreedBand::Greed => "Greed",
            FearGreedBand::ExtremeGreed => "Extreme Greed",
        };
        f.write_str(s)
    }
}

/// Horizontal gauge of `width` cells, e.g. `[#####.....] 50/100`.
pub fn gauge(value: u8, width: usize) -> String {
    let value = value.min(MAX_INDEX_VALUE);
    let filled = (value as usize * width + 50) / MAX_INDEX_VALUE as usize;
    format!(
        "[{}{}] {}/{}",
        "#".repeat(filled),
        ".".repeat(width - filled),
        value,
        MAX_INDEX_VALUE
    )
}
