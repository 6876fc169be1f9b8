//! Word-list sentiment classifier with negation handling.

use crate::domain::error::GuideError;
use crate::domain::news::{SentimentLabel, SentimentVerdict, tokenize};
use crate::ports::news_port::SentimentPort;
use std::collections::HashSet;

const POSITIVE_WORDS: &[&str] = &[
    "bullish", "rally", "rallies", "surge", "surges", "gain", "gains", "profit", "growth",
    "beat", "beats", "upgrade", "upgraded", "outperform", "strong", "positive", "rise",
    "rises", "increase", "breakthrough", "success", "exceed", "exceeds", "momentum",
    "optimistic", "record", "advance", "dividend", "buyback", "upside", "recovery",
    "rebound", "expansion", "robust", "accelerating", "raised", "tailwind", "boost", "soar",
    "soars",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bearish", "decline", "declines", "loss", "losses", "fall", "falls", "plunge",
    "plunges", "crash", "miss", "misses", "downgrade", "downgraded", "underperform", "weak",
    "weakens", "negative", "drop", "drops", "decrease", "concern", "concerns", "risk",
    "fail", "disappoint", "slump", "warning", "pessimistic", "retreat", "fear", "fears",
    "trouble", "dilution", "headwind", "lawsuit", "investigation", "probe", "default",
    "bankruptcy", "layoff", "layoffs", "downside", "overvalued", "bubble", "lowered",
    "recession", "selloff", "tumble", "tumbles",
];

const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't",
    "weren't", "won't", "hardly", "barely", "without",
];

/// A polar word within this many tokens after a negation flips polarity.
const NEGATION_WINDOW: usize = 3;

/// Confidence reported when positive and negative hits cancel out.
const MIXED_CONFIDENCE: f64 = 0.5;

pub struct LexiconSentimentAdapter {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    negation: HashSet<&'static str>,
}

impl Default for LexiconSentimentAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconSentimentAdapter {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
            negation: NEGATION_WORDS.iter().copied().collect(),
        }
    }

    /// Net polarity and number of polar words in `text`.
    fn polarity(&self, text: &str) -> (i32, u32) {
        let words = tokenize(text);
        let mut last_negation: Option<usize> = None;
        let mut net = 0;
        let mut hits = 0;

        for (i, word) in words.iter().enumerate() {
            let word = word.as_str();
            if self.negation.contains(word) {
                last_negation = Some(i);
                continue;
            }
            let sign = if self.positive.contains(word) {
                1
            } else if self.negative.contains(word) {
                -1
            } else {
                continue;
            };
            let negated = last_negation.is_some_and(|n| i - n <= NEGATION_WINDOW);
            net += if negated { -sign } else { sign };
            hits += 1;
        }

        (net, hits)
    }
}

impl SentimentPort for LexiconSentimentAdapter {
    fn classify(&self, text: &str) -> Result<SentimentVerdict, GuideError> {
        let (net, hits) = self.polarity(text);
        let verdict = match net.signum() {
            1 => SentimentVerdict {
                label: SentimentLabel::Positive,
                confidence: net as f64 / hits as f64,
            },
            -1 => SentimentVerdict {
                label: SentimentLabel::Negative,
                confidence: -net as f64 / hits as f64,
            },
            _ if hits == 0 => SentimentVerdict {
                label: SentimentLabel::Neutral,
                confidence: 1.0,
            },
            _ => SentimentVerdict {
                label: SentimentLabel::Neutral,
                confidence: MIXED_CONFIDENCE,
            },
        };
        Ok(verdict)
    }
}
