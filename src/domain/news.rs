//! Financial news sentiment digest.
//!
//! Articles are classified on their description; articles without one are
//! skipped. Counts cover every classified article regardless of the active
//! filter.

use crate::domain::error::GuideError;
use crate::ports::news_port::SentimentPort;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct NewsArticle {
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub source_id: Option<String>,
    pub published_at: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsQuery {
    pub keyword: String,
    pub sources: Vec<String>,
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl NewsQuery {
    pub fn new(keyword: &str, sources: Vec<String>, timeframe: Timeframe, today: NaiveDate) -> Self {
        Self {
            keyword: keyword.to_string(),
            sources,
            from: timeframe.from_date(today),
            to: today,
        }
    }

    /// Every keyword term appears in the title or description, ignoring case.
    /// A blank keyword matches everything.
    pub fn matches_keyword(&self, article: &NewsArticle) -> bool {
        let haystack = format!(
            "{} {}",
            article.title,
            article.description.as_deref().unwrap_or("")
        )
        .to_lowercase();
        self.keyword
            .split_whitespace()
            .all(|term| haystack.contains(&term.to_lowercase()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    Today,
    Last7Days,
    Last30Days,
}

impl Timeframe {
    pub fn from_date(&self, today: NaiveDate) -> NaiveDate {
        let days = match self {
            Timeframe::Today => 0,
            Timeframe::Last7Days => 7,
            Timeframe::Last30Days => 30,
        };
        today - Duration::days(days)
    }
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "today" | "1d" => Ok(Timeframe::Today),
            "7d" | "week" | "last7days" => Ok(Timeframe::Last7Days),
            "30d" | "month" | "last30days" => Ok(Timeframe::Last30Days),
            other => Err(format!("unknown timeframe '{other}' (expected today, 7d or 30d)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ];
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        };
        f.write_str(s)
    }
}

impl FromStr for SentimentLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "negative" => Ok(SentimentLabel::Negative),
            "neutral" => Ok(SentimentLabel::Neutral),
            other => Err(format!("unknown sentiment label '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentFilter {
    All,
    Only(SentimentLabel),
}

impl SentimentFilter {
    pub fn matches(&self, label: SentimentLabel) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Only(l) => *l == label,
        }
    }
}

impl FromStr for SentimentFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(SentimentFilter::All);
        }
        s.parse().map(SentimentFilter::Only)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentVerdict {
    pub label: SentimentLabel,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedArticle {
    pub article: NewsArticle,
    pub verdict: SentimentVerdict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentCounts {
    pub fn record(&mut self, label: SentimentLabel) {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, label: SentimentLabel) -> usize {
        match label {
            SentimentLabel::Positive => self.positive,
            SentimentLabel::Negative => self.negative,
            SentimentLabel::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewsDigest {
    pub counts: SentimentCounts,
    pub articles: Vec<ClassifiedArticle>,
    descriptions: Vec<String>,
}

impl NewsDigest {
    pub fn build(
        articles: Vec<NewsArticle>,
        classifier: &dyn SentimentPort,
        filter: SentimentFilter,
    ) -> Result<Self, GuideError> {
        let mut counts = SentimentCounts::default();
        let mut kept = Vec::new();
        let mut descriptions = Vec::new();

        for article in articles {
            let Some(description) = article
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(str::to_string)
            else {
                continue;
            };

            let verdict = classifier.classify(&description)?;
            counts.record(verdict.label);
            if filter.matches(verdict.label) {
                kept.push(ClassifiedArticle { article, verdict });
            }
            descriptions.push(description);
        }

        Ok(NewsDigest {
            counts,
            articles: kept,
            descriptions,
        })
    }

    /// Most frequent words across all descriptions, ties broken
    /// alphabetically.
    pub fn term_frequencies(&self, top_n: usize) -> Vec<(String, usize)> {
        let mut freq: HashMap<String, usize> = HashMap::new();
        for text in &self.descriptions {
            for word in tokenize(text) {
                if word.len() > 2 && !STOP_WORDS.contains(&word.as_str()) {
                    *freq.entry(word).or_default() += 1;
                }
            }
        }
        let mut terms: Vec<(String, usize)> = freq.into_iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        terms.truncate(top_n);
        terms
    }
}

pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.trim_matches('\'').to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
    "one", "our", "out", "has", "have", "his", "how", "its", "may", "new", "now", "own", "say",
    "she", "too", "use", "that", "this", "with", "from", "they", "will", "would", "there",
    "their", "what", "about", "which", "when", "were", "been", "into", "than", "them", "then",
    "these", "those", "also", "after", "over", "more", "most", "such", "some", "said", "says",
    "just", "while", "could", "should", "being", "where", "because", "who", "why", "did",
];
