//! Integration tests for the guide pipeline.
//!
//! Tests cover:
//! - Market guide assembly over mock ports (scores and returns side by side)
//! - Sparse metrics and short histories degrade to neutral scores and N/A cells
//! - The same pipeline over CSV files on disk
//! - Markdown rendering of the assembled guide
//! - News digest over mock feeds and the lexicon classifier

mod common;

use approx::assert_relative_eq;
use common::*;
use finguide::adapters::csv_adapter::{CsvAdapter, METRICS_FILE};
use finguide::adapters::lexicon_sentiment_adapter::LexiconSentimentAdapter;
use finguide::adapters::markdown_report_adapter::MarkdownReportAdapter;
use finguide::domain::beta::regress_beta;
use finguide::domain::error::GuideError;
use finguide::domain::fear_greed::{FearGreedBand, FearGreedReading};
use finguide::domain::guide::build_market_guide;
use finguide::domain::news::{NewsDigest, SentimentFilter, SentimentLabel};
use finguide::domain::overview::{BenchmarkComparison, MarketInsights};
use finguide::domain::returns::Lookback;
use finguide::domain::scoring::{NEUTRAL_SCORE, Strategy, Suitability};
use finguide::domain::settings::DashboardSettings;
use finguide::domain::snapshot::MetricsSnapshot;
use finguide::ports::data_port::MarketDataPort;
use finguide::ports::news_port::FearGreedPort;
use finguide::ports::report_port::ReportPort;

mod guide_pipeline {
    use super::*;

    #[test]
    fn scores_and_returns_for_dividend_payer() {
        let port = MockMarketData::new()
            .with_metrics("KO", dividend_payer())
            .with_bars("KO", generate_bars("2023-06-01", 300, 100.0, 1.0));

        let guide =
            build_market_guide(&port, "KO", &DashboardSettings::default(), date(2024, 3, 26))
                .unwrap();

        let scores: Vec<(Strategy, u8)> = guide.scores.iter().map(|s| (s.strategy, s.score)).collect();
        assert_eq!(
            scores,
            vec![
                (Strategy::DividendGrowth, 4),
                (Strategy::DividendYield, 1),
                (Strategy::ProfitGrowth, 1),
            ]
        );
        assert!(guide.well_suited().is_empty());

        assert_eq!(guide.observations, 300);
        assert_eq!(guide.returns.get(Lookback::FiveYears), None);
        assert_relative_eq!(
            guide.returns.get(Lookback::OneYear).unwrap(),
            (399.0 / 148.0 - 1.0) * 100.0,
            epsilon = 1e-9
        );
        // 86 observations in 2024, base is the 2024-01-01 close
        assert_relative_eq!(
            guide.returns.get(Lookback::CurrentYear).unwrap(),
            (399.0 / 314.0 - 1.0) * 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn missing_metrics_and_short_history() {
        let port = MockMarketData::new().with_bars("NEW", generate_bars("2024-05-01", 10, 20.0, 0.5));
        let guide =
            build_market_guide(&port, "NEW", &DashboardSettings::default(), date(2024, 5, 10))
                .unwrap();

        for score in &guide.scores {
            assert_eq!(score.score, NEUTRAL_SCORE);
            assert_eq!(score.suitability(), Suitability::NotIdeal);
        }
        for lookback in [
            Lookback::TwentyYears,
            Lookback::FifteenYears,
            Lookback::TenYears,
            Lookback::FiveYears,
            Lookback::OneYear,
        ] {
            assert_eq!(guide.returns.get(lookback), None);
        }
        assert!(guide.returns.get(Lookback::CurrentYear).is_some());
    }

    #[test]
    fn as_of_in_a_year_without_data_gives_no_current_year_return() {
        let port = MockMarketData::new().with_bars("OLD", generate_bars("2020-01-01", 30, 50.0, 1.0));
        let guide =
            build_market_guide(&port, "OLD", &DashboardSettings::default(), date(2024, 1, 5))
                .unwrap();
        assert_eq!(guide.returns.get(Lookback::CurrentYear), None);
    }

    #[test]
    fn upstream_error_propagates() {
        let port = MockMarketData::new().with_error("AAPL", "rate limited");
        let err = build_market_guide(&port, "AAPL", &DashboardSettings::default(), date(2024, 1, 5))
            .unwrap_err();
        assert!(matches!(err, GuideError::Upstream { .. }));
    }

    #[test]
    fn unknown_ticker_is_no_data() {
        let port = MockMarketData::new();
        let err = build_market_guide(&port, "ZZZ", &DashboardSettings::default(), date(2024, 1, 5))
            .unwrap_err();
        assert!(matches!(err, GuideError::NoData { ticker } if ticker == "ZZZ"));
    }

    #[test]
    fn high_yield_is_well_suited() {
        let port = MockMarketData::new()
            .with_metrics(
                "T",
                MetricsSnapshot {
                    dividend_yield: Some(0.5),
                    ..Default::default()
                },
            )
            .with_bars("T", generate_bars("2024-01-02", 5, 15.0, 0.1));
        let guide =
            build_market_guide(&port, "T", &DashboardSettings::default(), date(2024, 1, 6)).unwrap();
        let well_suited: Vec<Strategy> = guide.well_suited().iter().map(|s| s.strategy).collect();
        assert_eq!(well_suited, vec![Strategy::DividendYield]);
    }
}

mod csv_pipeline {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> TempDir {
        let dir = TempDir::new().unwrap();
        write_price_csv(dir.path(), "KO", &generate_bars("2023-06-01", 300, 100.0, 1.0));
        write_price_csv(dir.path(), "^GSPC", &generate_bars("2023-06-01", 300, 4000.0, 5.0));
        std::fs::write(
            dir.path().join(METRICS_FILE),
            "ticker,dividend_yield,payout_ratio,revenue_growth,earnings_growth,trailing_pe,dividend_growth_5y,market_cap,sector,industry\n\
             KO,0.05,0.4,0.04,0.06,18.2,0.07,250000000000,Consumer Defensive,Beverages\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn csv_guide_matches_mock_guide() {
        let dir = setup();
        let csv = CsvAdapter::new(dir.path().to_path_buf());
        let mock = MockMarketData::new()
            .with_metrics("KO", dividend_payer())
            .with_bars("KO", generate_bars("2023-06-01", 300, 100.0, 1.0));

        let settings = DashboardSettings::default();
        let as_of = date(2024, 3, 26);
        let from_csv = build_market_guide(&csv, "KO", &settings, as_of).unwrap();
        let from_mock = build_market_guide(&mock, "KO", &settings, as_of).unwrap();

        assert_eq!(from_csv.metrics, from_mock.metrics);
        assert_eq!(from_csv.scores, from_mock.scores);
        assert_eq!(from_csv.observations, from_mock.observations);
        for ((l1, a), (l2, b)) in from_csv.returns.entries().iter().zip(from_mock.returns.entries()) {
            assert_eq!(l1, l2);
            match (a, b) {
                (Some(x), Some(y)) => assert_relative_eq!(*x, *y, epsilon = 1e-9),
                (None, None) => {}
                other => panic!("mismatch for {l1}: {other:?}"),
            }
        }
    }

    #[test]
    fn ticker_without_metrics_row_scores_neutral() {
        let dir = setup();
        write_price_csv(dir.path(), "NEW", &generate_bars("2024-01-02", 20, 10.0, 0.1));
        let csv = CsvAdapter::new(dir.path().to_path_buf());
        let guide =
            build_market_guide(&csv, "NEW", &DashboardSettings::default(), date(2024, 1, 21))
                .unwrap();
        assert!(guide.metrics.is_empty());
        assert!(guide.scores.iter().all(|s| s.score == NEUTRAL_SCORE));
    }

    #[test]
    fn overview_and_beta_over_csv() {
        let dir = setup();
        let csv = CsvAdapter::new(dir.path().to_path_buf());
        let ko = csv
            .fetch_price_history("KO", finguide::domain::price::HistoryRange::Max)
            .unwrap();
        let index = csv
            .fetch_price_history("^GSPC", finguide::domain::price::HistoryRange::Max)
            .unwrap();

        let insights = MarketInsights::compute(&ko).unwrap();
        assert_relative_eq!(insights.highest.value, 399.0);
        assert_relative_eq!(insights.lowest.value, 100.0);
        assert_relative_eq!(insights.high_12m, 399.0);
        assert_relative_eq!(insights.low_12m, 148.0);

        let comparison = BenchmarkComparison::build("^GSPC", &ko, &index);
        assert_eq!(comparison.rows.len(), 300);
        let (_, asset, bench) = comparison.rows[299];
        assert_relative_eq!(asset, 3.99);
        assert_relative_eq!(bench, 5495.0 / 4000.0);

        let reg = regress_beta(&ko, &index).unwrap();
        assert_eq!(reg.observations, 299);
        assert!(reg.beta > 0.0);
    }
}

mod reporting {
    use super::*;

    #[test]
    fn markdown_report_for_assembled_guide() {
        let port = MockMarketData::new()
            .with_metrics("KO", dividend_payer())
            .with_bars("KO", generate_bars("2023-06-01", 300, 100.0, 1.0));
        let fear_greed = MockFearGreed(Some(FearGreedReading {
            value: 22,
            classification: "Extreme Fear".to_string(),
            timestamp: Some(1_711_411_200),
        }));

        let reading = fear_greed.fetch_current().unwrap();
        assert_eq!(reading.as_ref().map(|r| r.band()), Some(FearGreedBand::ExtremeFear));

        let guide =
            build_market_guide(&port, "KO", &DashboardSettings::default(), date(2024, 3, 26))
                .unwrap()
                .with_fear_greed(reading);
        let report = MarkdownReportAdapter::new().render(&guide);

        assert!(report.starts_with("# Market Guide: KO (KO)"));
        assert!(report.contains("**Dividend Growth Score: 4/10**"));
        assert!(report.contains("| Dividend Yield | 5.00% | Higher is better |"));
        assert!(report.contains("| 5 Years | N/A |"));
        assert!(report.contains("Current index value: 22 (Extreme Fear)"));
    }
}

mod news_digest {
    use super::*;
    use finguide::domain::news::NewsQuery;
    use finguide::domain::news::Timeframe;
    use finguide::ports::news_port::NewsPort;

    fn feed() -> MockNews {
        MockNews::new(vec![
            article("Rally", Some("Stocks rally as earnings beat forecasts")),
            article("Slump", Some("Shares slump on recession fears")),
            article("Quiet", Some("Trading volumes were light on Monday")),
            article("Headline only", None),
        ])
    }

    fn query() -> NewsQuery {
        NewsQuery::new("stock market", vec![], Timeframe::Last7Days, date(2024, 3, 28))
    }

    #[test]
    fn lexicon_digest_counts_every_label() {
        let articles = feed().fetch_news(&query()).unwrap();
        let digest = NewsDigest::build(
            articles,
            &LexiconSentimentAdapter::new(),
            SentimentFilter::Only(SentimentLabel::Positive),
        )
        .unwrap();

        assert_eq!(digest.counts.positive, 1);
        assert_eq!(digest.counts.negative, 1);
        assert_eq!(digest.counts.neutral, 1);
        assert_eq!(digest.articles.len(), 1);
        assert_eq!(digest.articles[0].article.title, "Rally");
    }

    #[test]
    fn fixed_classifier_with_all_filter() {
        let articles = feed().fetch_news(&query()).unwrap();
        let digest = NewsDigest::build(
            articles,
            &FixedSentiment(SentimentLabel::Neutral),
            SentimentFilter::All,
        )
        .unwrap();
        assert_eq!(digest.counts.neutral, 3);
        assert_eq!(digest.articles.len(), 3);
    }

    #[test]
    fn failing_feed_is_upstream_error() {
        let err = MockNews::failing("apiKeyInvalid").fetch_news(&query()).unwrap_err();
        assert!(matches!(err, GuideError::Upstream { .. }));
    }
}
