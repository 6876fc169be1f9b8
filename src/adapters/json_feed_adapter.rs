//! JSON feed adapter for news-API and Fear & Greed API response bodies.
//!
//! Reads response bodies captured to disk and decodes them with the
//! providers' wire shapes.

use crate::domain::error::GuideError;
use crate::domain::fear_greed::{FearGreedReading, MAX_INDEX_VALUE};
use crate::domain::news::{NewsArticle, NewsQuery};
use crate::ports::news_port::{FearGreedPort, NewsPort};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct NewsResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<ArticleDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticleDto {
    #[serde(default)]
    source: Option<SourceDto>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SourceDto {
    #[serde(default)]
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FearGreedResponse {
    #[serde(default)]
    data: Vec<FearGreedDto>,
}

#[derive(Debug, Deserialize)]
struct FearGreedDto {
    value: String,
    value_classification: String,
    #[serde(default)]
    timestamp: Option<String>,
}

impl From<ArticleDto> for NewsArticle {
    fn from(dto: ArticleDto) -> Self {
        NewsArticle {
            title: dto.title.unwrap_or_default(),
            description: dto.description,
            url: dto.url.unwrap_or_default(),
            source_id: dto.source.and_then(|s| s.id),
            // "2024-03-28T14:05:00Z" -> 2024-03-28
            published_at: dto
                .published_at
                .as_deref()
                .and_then(|s| s.get(..10))
                .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()),
        }
    }
}

pub fn parse_news_response(body: &str) -> Result<Vec<NewsArticle>, GuideError> {
    let response: NewsResponse =
        serde_json::from_str(body).map_err(|e| GuideError::malformed("news", e.to_string()))?;
    if response.status != "ok" {
        return Err(GuideError::upstream(
            "news",
            response
                .message
                .unwrap_or_else(|| "Unknown error".to_string()),
        ));
    }
    Ok(response.articles.into_iter().map(NewsArticle::from).collect())
}

pub fn parse_fear_greed_response(body: &str) -> Result<Option<FearGreedReading>, GuideError> {
    let response: FearGreedResponse = serde_json::from_str(body)
        .map_err(|e| GuideError::malformed("fear & greed", e.to_string()))?;
    let Some(entry) = response.data.into_iter().next() else {
        return Ok(None);
    };

    let value: u8 = entry
        .value
        .trim()
        .parse()
        .ok()
        .filter(|v| *v <= MAX_INDEX_VALUE)
        .ok_or_else(|| {
            GuideError::malformed(
                "fear & greed",
                format!("index value '{}' is not in 0..=100", entry.value),
            )
        })?;

    Ok(Some(FearGreedReading {
        value,
        classification: entry.value_classification,
        timestamp: entry.timestamp.and_then(|t| t.trim().parse().ok()),
    }))
}

/// Applies the query's keyword, sources and date window to articles. Articles
/// without a source id or publish date pass those two checks.
pub fn filter_articles(articles: Vec<NewsArticle>, query: &NewsQuery) -> Vec<NewsArticle> {
    articles
        .into_iter()
        .filter(|a| query.matches_keyword(a))
        .filter(|a| {
            query.sources.is_empty()
                || a.source_id
                    .as_ref()
                    .is_none_or(|id| query.sources.iter().any(|s| s.eq_ignore_ascii_case(id)))
        })
        .filter(|a| {
            a.published_at
                .is_none_or(|d| d >= query.from && d <= query.to)
        })
        .collect()
}

pub struct JsonFeedAdapter {
    news_path: Option<PathBuf>,
    fear_greed_path: Option<PathBuf>,
}

impl JsonFeedAdapter {
    pub fn new(news_path: Option<PathBuf>, fear_greed_path: Option<PathBuf>) -> Self {
        Self {
            news_path,
            fear_greed_path,
        }
    }

    fn read(source_name: &str, path: Option<&Path>) -> Result<String, GuideError> {
        let path = path.ok_or_else(|| {
            GuideError::upstream(source_name, "no feed configured")
        })?;
        fs::read_to_string(path).map_err(|e| {
            GuideError::upstream(source_name, format!("failed to read {}: {}", path.display(), e))
        })
    }
}

impl NewsPort for JsonFeedAdapter {
    fn fetch_news(&self, query: &NewsQuery) -> Result<Vec<NewsArticle>, GuideError> {
        let body = Self::read("news", self.news_path.as_deref())?;
        let articles = parse_news_response(&body)?;
        let total = articles.len();
        let kept = filter_articles(articles, query);
        tracing::debug!(keyword = %query.keyword, total, kept = kept.len(), "loaded news feed");
        Ok(kept)
    }
}

impl FearGreedPort for JsonFeedAdapter {
    fn fetch_current(&self) -> Result<Option<FearGreedReading>, GuideError> {
        let body = Self::read("fear & greed", self.fear_greed_path.as_deref())?;
        parse_fear_greed_response(&body)
    }
}
