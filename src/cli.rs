//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_feed_adapter::JsonFeedAdapter;
use crate::adapters::lexicon_sentiment_adapter::LexiconSentimentAdapter;
use crate::adapters::markdown_report_adapter::MarkdownReportAdapter;
use crate::domain::beta::{BetaSensitivity, MIN_REGRESSION_OBSERVATIONS, regress_beta};
use crate::domain::catalog::{MarketKind, find_listing, resolve_ticker};
use crate::domain::config_validation::validate_data_dir;
use crate::domain::error::GuideError;
use crate::domain::fear_greed::gauge;
use crate::domain::guide::{MarketGuide, build_market_guide};
use crate::domain::news::{NewsDigest, NewsQuery, SentimentFilter, SentimentLabel, Timeframe};
use crate::domain::overview::{BenchmarkComparison, MarketInsights};
use crate::domain::performance::{
    CompanyProfile, SummaryStats, average_volume, closes, daily_changes, price_change_pct, volumes,
};
use crate::domain::price::HistoryRange;
use crate::domain::returns::{ReturnsTable, compute_returns};
use crate::domain::settings::DashboardSettings;
use crate::domain::snapshot::{
    NOT_AVAILABLE, format_currency, format_ratio, format_text, format_thousands,
};
use crate::ports::data_port::MarketDataPort;
use crate::ports::news_port::{FearGreedPort, NewsPort, SentimentPort};
use crate::ports::report_port::ReportPort;

const DEFAULT_NEWS_KEYWORD: &str = "stock market";
const GAUGE_WIDTH: usize = 20;

#[derive(Parser, Debug)]
#[command(name = "finguide", about = "Investment strategy guide and market dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Strategy scores and historical returns for one ticker
    Guide {
        #[arg(short, long)]
        config: PathBuf,
        /// Ticker or company name from the configured table
        #[arg(short, long)]
        ticker: String,
        /// Reference date for the current-year window (YYYY-MM-DD)
        #[arg(long)]
        as_of: Option<NaiveDate>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Historical returns table
    Returns {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        ticker: String,
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Company profile, price statistics and market beta
    Company {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        ticker: String,
        #[arg(short, long, default_value = "1y")]
        period: HistoryRange,
        /// Market index for the beta regression (defaults to the first benchmark)
        #[arg(short, long)]
        benchmark: Option<String>,
    },
    /// Market overview against the market's benchmark
    Overview {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long, default_value = "equity")]
        market: MarketKind,
        /// Custom ticker; defaults to the first ticker of the market
        #[arg(short, long)]
        ticker: Option<String>,
        #[arg(short, long, default_value = "1y")]
        period: HistoryRange,
        /// Equity index to compare against
        #[arg(short, long)]
        benchmark: Option<String>,
    },
    /// News sentiment digest
    News {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long, default_value = DEFAULT_NEWS_KEYWORD)]
        keyword: String,
        /// Comma-separated source ids
        #[arg(short, long)]
        sources: Option<String>,
        #[arg(long, default_value = "7d")]
        timeframe: Timeframe,
        #[arg(short, long, default_value = "all")]
        filter: SentimentFilter,
        /// Number of frequent terms to list
        #[arg(long, default_value_t = 10)]
        top: usize,
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Current Fear & Greed index
    FearGreed {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// List configured companies, benchmarks and market tickers
    Tickers {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Guide {
            config,
            ticker,
            as_of,
            output,
        } => run_guide(&config, &ticker, as_of, output.as_deref()),
        Command::Returns {
            config,
            ticker,
            as_of,
        } => run_returns(&config, &ticker, as_of),
        Command::Company {
            config,
            ticker,
            period,
            benchmark,
        } => run_company(&config, &ticker, period, benchmark.as_deref()),
        Command::Overview {
            config,
            market,
            ticker,
            period,
            benchmark,
        } => run_overview(&config, market, ticker.as_deref(), period, benchmark.as_deref()),
        Command::News {
            config,
            keyword,
            sources,
            timeframe,
            filter,
            top,
            as_of,
        } => run_news(
            &config,
            &keyword,
            sources.as_deref(),
            timeframe,
            filter,
            top,
            as_of,
        ),
        Command::FearGreed { config } => run_fear_greed(&config),
        Command::Tickers { config } => run_tickers(config.as_deref()),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &Path) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| report_error(&e))
}

pub fn load_settings(path: &Path) -> Result<DashboardSettings, ExitCode> {
    tracing::debug!(path = %path.display(), "loading config");
    let config = load_config(path)?;
    DashboardSettings::from_config(&config).map_err(|e| report_error(&e))
}

fn report_error(err: &GuideError) -> ExitCode {
    eprintln!("error: {err}");
    err.into()
}

/// Prints a rendered result to stdout or reports the error.
fn emit(result: Result<String, GuideError>) -> ExitCode {
    match result {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => report_error(&e),
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn data_adapter(settings: &DashboardSettings) -> Result<CsvAdapter, GuideError> {
    let dir = settings.data.dir.clone().ok_or_else(|| GuideError::ConfigMissing {
        section: "data".to_string(),
        key: "dir".to_string(),
    })?;
    Ok(CsvAdapter::new(dir))
}

pub fn feed_adapter(settings: &DashboardSettings) -> JsonFeedAdapter {
    JsonFeedAdapter::new(
        settings.data.news_feed.clone(),
        settings.data.fear_greed_feed.clone(),
    )
}

/// A company name from the configured table resolves to its ticker; anything
/// else is taken as a ticker.
pub fn resolve_company(settings: &DashboardSettings, query: &str) -> String {
    find_listing(&settings.companies, query)
        .or_else(|| find_listing(&settings.benchmarks, query))
        .map(|l| l.ticker.clone())
        .unwrap_or_else(|| resolve_ticker(query, None))
}

fn fmt_opt(value: Option<f64>, suffix: &str) -> String {
    match value {
        Some(v) => format!("{:.2}{}", v, suffix),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Builds the guide and attaches the current Fear & Greed reading when a
/// feed is given. A failing feed only warns.
pub fn assemble_guide(
    data: &dyn MarketDataPort,
    fear_greed: Option<&dyn FearGreedPort>,
    settings: &DashboardSettings,
    ticker: &str,
    as_of: NaiveDate,
) -> Result<MarketGuide, GuideError> {
    let mut guide = build_market_guide(data, ticker, settings, as_of)?;
    tracing::info!(
        ticker = %guide.ticker,
        observations = guide.observations,
        well_suited = guide.well_suited().len(),
        "built market guide"
    );

    if let Some(port) = fear_greed {
        match port.fetch_current() {
            Ok(reading) => guide = guide.with_fear_greed(reading),
            Err(e) => tracing::warn!(error = %e, "fear & greed index unavailable"),
        }
    }
    Ok(guide)
}

pub fn guide_report(
    data: &dyn MarketDataPort,
    fear_greed: Option<&dyn FearGreedPort>,
    settings: &DashboardSettings,
    ticker: &str,
    as_of: NaiveDate,
) -> Result<String, GuideError> {
    let guide = assemble_guide(data, fear_greed, settings, ticker, as_of)?;
    Ok(MarkdownReportAdapter::new().render(&guide))
}

fn run_guide(
    config_path: &Path,
    query: &str,
    as_of: Option<NaiveDate>,
    output: Option<&Path>,
) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let data = match data_adapter(&settings) {
        Ok(d) => d,
        Err(e) => return report_error(&e),
    };
    let feeds = feed_adapter(&settings);
    let fear_greed: Option<&dyn FearGreedPort> = settings
        .data
        .fear_greed_feed
        .as_ref()
        .map(|_| &feeds as &dyn FearGreedPort);

    let ticker = resolve_company(&settings, query);
    let guide = match assemble_guide(
        &data,
        fear_greed,
        &settings,
        &ticker,
        as_of.unwrap_or_else(today),
    ) {
        Ok(g) => g,
        Err(e) => return report_error(&e),
    };

    let reporter = MarkdownReportAdapter::new();
    match output {
        Some(path) => match reporter.write(&guide, &path.to_string_lossy()) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "report written");
                ExitCode::SUCCESS
            }
            Err(e) => report_error(&e),
        },
        None => {
            print!("{}", reporter.render(&guide));
            ExitCode::SUCCESS
        }
    }
}

pub fn format_returns_table(ticker: &str, table: &ReturnsTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("Historical returns for {ticker}\n"));
    for (lookback, value) in table.entries() {
        out.push_str(&format!("  {:<14} {:>10}\n", lookback.title(), fmt_opt(*value, "%")));
    }
    out
}

pub fn returns_report(
    data: &dyn MarketDataPort,
    ticker: &str,
    as_of: NaiveDate,
) -> Result<String, GuideError> {
    let history = data.fetch_price_history(ticker, HistoryRange::Max)?;
    let table = compute_returns(&history, as_of);
    tracing::debug!(ticker = %ticker, available = table.available_count(), "computed returns");
    Ok(format_returns_table(ticker, &table))
}

fn run_returns(config_path: &Path, query: &str, as_of: Option<NaiveDate>) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let ticker = resolve_company(&settings, query);
    emit(
        data_adapter(&settings)
            .and_then(|data| returns_report(&data, &ticker, as_of.unwrap_or_else(today))),
    )
}

fn write_stats(out: &mut String, title: &str, stats: Option<SummaryStats>) {
    let Some(stats) = stats else {
        return;
    };
    out.push_str(&format!("\n{title} statistics\n"));
    out.push_str(&format!("  count  {}\n", stats.count));
    out.push_str(&format!("  mean   {:.2}\n", stats.mean));
    out.push_str(&format!("  std    {}\n", fmt_opt(stats.std, "")));
    out.push_str(&format!("  min    {:.2}\n", stats.min));
    out.push_str(&format!("  25%    {:.2}\n", stats.q25));
    out.push_str(&format!("  50%    {:.2}\n", stats.median));
    out.push_str(&format!("  75%    {:.2}\n", stats.q75));
    out.push_str(&format!("  max    {:.2}\n", stats.max));
}

pub fn company_report(
    data: &dyn MarketDataPort,
    settings: &DashboardSettings,
    ticker: &str,
    period: HistoryRange,
    benchmark: &str,
) -> Result<String, GuideError> {
    let metrics = data.fetch_metrics(ticker)?;
    let bars = data.fetch_price_history(ticker, period)?;
    if bars.is_empty() {
        return Err(GuideError::NoData {
            ticker: ticker.to_string(),
        });
    }

    let profile = CompanyProfile::new(ticker, settings.display_name(ticker), &metrics);
    let mut out = String::new();

    out.push_str(&format!("Company: {}\n", profile.name.as_deref().unwrap_or(&profile.ticker)));
    out.push_str(&format!("  Ticker:       {}\n", profile.ticker));
    out.push_str(&format!("  Sector:       {}\n", format_text(profile.sector.as_deref())));
    out.push_str(&format!("  Industry:     {}\n", format_text(profile.industry.as_deref())));
    out.push_str(&format!("  Market Cap:   {}\n", format_currency(profile.market_cap)));
    out.push_str(&format!("  P/E Ratio:    {}\n", format_ratio(profile.trailing_pe)));

    out.push_str(&format!("\nPerformance ({period}, {} observations)\n", bars.len()));
    out.push_str(&format!("  Price Change: {}\n", fmt_opt(price_change_pct(&bars), "%")));
    out.push_str(&format!("  Avg Volume:   {}\n", format_thousands(average_volume(&bars))));
    if let Some(last) = daily_changes(&bars).last() {
        out.push_str(&format!(
            "  Last Change:  {} ({}) on {}\n",
            fmt_opt(last.absolute, ""),
            fmt_opt(last.relative_pct, "%"),
            last.date
        ));
    }

    write_stats(&mut out, "Close", SummaryStats::describe(&closes(&bars)));
    write_stats(&mut out, "Volume", SummaryStats::describe(&volumes(&bars)));

    out.push_str(&format!("\nMarket beta against {benchmark}\n"));
    let regression = data
        .fetch_price_history(benchmark, period)
        .map(|market| regress_beta(&bars, &market));
    match regression {
        Ok(Some(reg)) => {
            out.push_str(&format!("  Beta:            {:.2}\n", reg.beta));
            out.push_str(&format!("  Alpha:           {:.6}\n", reg.alpha));
            out.push_str(&format!("  R-squared:       {:.2}\n", reg.r_squared));
            out.push_str(&format!("  Adj. R-squared:  {:.2}\n", reg.adj_r_squared));
            out.push_str(&format!("  Observations:    {}\n", reg.observations));
            let reading = match reg.sensitivity() {
                BetaSensitivity::MoreVolatile => "more volatile than the market",
                BetaSensitivity::InLine => "moving in line with the market",
                BetaSensitivity::LessVolatile => "less volatile than the market",
            };
            out.push_str(&format!("  The stock is {reading}.\n"));
        }
        Ok(None) => {
            let err = GuideError::InsufficientData {
                ticker: ticker.to_string(),
                observations: bars.len().saturating_sub(1),
                minimum: MIN_REGRESSION_OBSERVATIONS,
            };
            tracing::warn!(error = %err, "beta regression skipped");
            out.push_str(&format!("  Beta:            {NOT_AVAILABLE}\n"));
        }
        Err(e) => {
            tracing::warn!(benchmark = %benchmark, error = %e, "benchmark history unavailable");
            out.push_str(&format!("  Beta:            {NOT_AVAILABLE}\n"));
        }
    }

    Ok(out)
}

fn run_company(
    config_path: &Path,
    query: &str,
    period: HistoryRange,
    benchmark: Option<&str>,
) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let ticker = resolve_company(&settings, query);
    let benchmark = settings
        .benchmark_for(MarketKind::Equity, benchmark)
        .unwrap_or_default();
    emit(
        data_adapter(&settings)
            .and_then(|data| company_report(&data, &settings, &ticker, period, &benchmark)),
    )
}

pub fn overview_report(
    data: &dyn MarketDataPort,
    settings: &DashboardSettings,
    market: MarketKind,
    ticker: Option<&str>,
    period: HistoryRange,
    equity_benchmark: Option<&str>,
) -> Result<String, GuideError> {
    let selection = settings
        .market_tickers(market)
        .first()
        .cloned()
        .unwrap_or_default();
    let ticker = resolve_ticker(&selection, ticker);
    if ticker.is_empty() {
        return Err(GuideError::ConfigMissing {
            section: "markets".to_string(),
            key: market.key().to_string(),
        });
    }

    let bars = data.fetch_price_history(&ticker, period)?;
    let insights = MarketInsights::compute(&bars).ok_or_else(|| GuideError::NoData {
        ticker: ticker.clone(),
    })?;

    let mut out = String::new();
    out.push_str(&format!("{} market: {} ({period})\n", market.title(), ticker));
    out.push_str(&format!(
        "  Highest Close:  {:.2} on {}\n",
        insights.highest.value,
        insights.highest.date
    ));
    out.push_str(&format!(
        "  Lowest Close:   {:.2} on {}\n",
        insights.lowest.value,
        insights.lowest.date
    ));
    out.push_str(&format!("  Opening Price:  {:.2}\n", insights.opening_price));
    out.push_str(&format!("  Closing Price:  {:.2}\n", insights.closing_price));
    out.push_str(&format!("  12M High:       {:.2}\n", insights.high_12m));
    out.push_str(&format!("  12M Low:        {:.2}\n", insights.low_12m));
    out.push_str(&format!("  Period Change:  {}\n", fmt_opt(insights.period_change_pct, "%")));

    write_stats(&mut out, "Close", SummaryStats::describe(&closes(&bars)));
    write_stats(&mut out, "Volume", SummaryStats::describe(&volumes(&bars)));

    if !market.supports_benchmark() {
        return Ok(out);
    }
    let Some(benchmark) = settings.benchmark_for(market, equity_benchmark) else {
        return Ok(out);
    };

    match data.fetch_price_history(&benchmark, period) {
        Ok(bench) => {
            let comparison = BenchmarkComparison::build(&benchmark, &bars, &bench);
            out.push_str(&format!(
                "\nNormalized against {} ({} common dates)\n",
                comparison.benchmark,
                comparison.rows.len()
            ));
            if let Some((date, asset, index)) = comparison.rows.last() {
                out.push_str(&format!(
                    "  {date}: {ticker} {asset:.4}, {} {index:.4}\n",
                    comparison.benchmark
                ));
            }
            out.push_str(&format!("  Spread: {}\n", fmt_opt(comparison.final_spread(), "")));
        }
        Err(e) => {
            tracing::warn!(benchmark = %benchmark, error = %e, "benchmark history unavailable");
        }
    }

    Ok(out)
}

fn run_overview(
    config_path: &Path,
    market: MarketKind,
    ticker: Option<&str>,
    period: HistoryRange,
    benchmark: Option<&str>,
) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => s,
        Err(code) => return code,
    };
    emit(data_adapter(&settings).and_then(|data| {
        overview_report(&data, &settings, market, ticker, period, benchmark)
    }))
}

pub fn news_report(
    news: &dyn NewsPort,
    classifier: &dyn SentimentPort,
    query: &NewsQuery,
    filter: SentimentFilter,
    top: usize,
) -> Result<String, GuideError> {
    let articles = news.fetch_news(query)?;
    let digest = NewsDigest::build(articles, classifier, filter)?;
    tracing::info!(
        keyword = %query.keyword,
        classified = digest.counts.total(),
        shown = digest.articles.len(),
        "built news digest"
    );

    let mut out = String::new();
    out.push_str(&format!("News for \"{}\" ({} to {})\n", query.keyword, query.from, query.to));
    out.push_str("\nSentiment distribution\n");
    for label in SentimentLabel::ALL {
        out.push_str(&format!("  {:<9} {}\n", label.to_string(), digest.counts.get(label)));
    }

    let terms = digest.term_frequencies(top);
    if !terms.is_empty() {
        out.push_str("\nFrequent terms\n");
        for (term, count) in terms {
            out.push_str(&format!("  {term} ({count})\n"));
        }
    }

    out.push_str("\nArticles\n");
    if digest.articles.is_empty() {
        out.push_str("  none\n");
    }
    for item in &digest.articles {
        out.push_str(&format!("\n  {}\n", item.article.title));
        out.push_str(&format!("  {}\n", item.article.url));
        if let Some(description) = &item.article.description {
            out.push_str(&format!("  {description}\n"));
        }
        out.push_str(&format!(
            "  Sentiment: {}, Confidence: {:.2}\n",
            item.verdict.label,
            item.verdict.confidence
        ));
    }
    Ok(out)
}

fn run_news(
    config_path: &Path,
    keyword: &str,
    sources: Option<&str>,
    timeframe: Timeframe,
    filter: SentimentFilter,
    top: usize,
    as_of: Option<NaiveDate>,
) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => s,
        Err(code) => return code,
    };
    let sources: Vec<String> = sources
        .map(|s| {
            s.split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect()
        })
        .unwrap_or_default();
    let query = NewsQuery::new(keyword, sources, timeframe, as_of.unwrap_or_else(today));
    emit(news_report(
        &feed_adapter(&settings),
        &LexiconSentimentAdapter::new(),
        &query,
        filter,
        top,
    ))
}

pub fn fear_greed_report(port: &dyn FearGreedPort) -> Result<String, GuideError> {
    let mut out = String::new();
    match port.fetch_current()? {
        Some(reading) => {
            let band = reading.band();
            out.push_str(&format!(
                "Fear & Greed Index: {} ({})\n",
                reading.value,
                reading.classification
            ));
            out.push_str(&format!("{}\n", gauge(reading.value, GAUGE_WIDTH)));
            out.push_str(&format!("{band}: {}\n", band.interpretation()));
        }
        None => {
            out.push_str("Fear & Greed Index: no current reading\n");
        }
    }
    Ok(out)
}

fn run_fear_greed(config_path: &Path) -> ExitCode {
    let settings = match load_settings(config_path) {
        Ok(s) => s,
        Err(code) => return code,
    };
    emit(fear_greed_report(&feed_adapter(&settings)))
}

pub fn tickers_report(settings: &DashboardSettings) -> String {
    let mut out = String::new();
    out.push_str("Companies\n");
    for listing in &settings.companies {
        out.push_str(&format!("  {:<10} {}\n", listing.ticker, listing.name));
    }
    out.push_str("\nBenchmarks\n");
    for listing in &settings.benchmarks {
        out.push_str(&format!("  {:<10} {}\n", listing.ticker, listing.name));
    }
    out.push_str("\nMarkets\n");
    for kind in MarketKind::ALL {
        let benchmark = settings
            .benchmark_for(kind, None)
            .filter(|_| kind.supports_benchmark())
            .map(|b| format!(" [benchmark {b}]"))
            .unwrap_or_default();
        out.push_str(&format!(
            "  {:<14} {}{}\n",
            kind.title(),
            settings.market_tickers(kind).join(", "),
            benchmark
        ));
    }
    out
}

fn run_tickers(config_path: Option<&Path>) -> ExitCode {
    let settings = match config_path {
        Some(path) => match load_settings(path) {
            Ok(s) => s,
            Err(code) => return code,
        },
        None => DashboardSettings::default(),
    };
    print!("{}", tickers_report(&settings));

    if let Ok(data) = data_adapter(&settings) {
        match data.list_tickers() {
            Ok(available) if available.is_empty() => {
                eprintln!("No price files found");
            }
            Ok(available) => {
                println!("\nPrice files");
                for ticker in &available {
                    println!("  {ticker}");
                }
                eprintln!("{} tickers with price data", available.len());
            }
            Err(e) => return report_error(&e),
        }
    }
    ExitCode::SUCCESS
}

fn run_validate(config_path: &Path) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let settings = match DashboardSettings::from_config(&config) {
        Ok(s) => s,
        Err(e) => return report_error(&e),
    };

    if let Err(e) = validate_data_dir(&config) {
        return report_error(&e);
    }

    eprintln!("Sections: {}", config.sections().join(", "));

    eprintln!("\nReference values:");
    eprintln!("  dividend_yield:  {}", settings.reference.dividend_yield);
    eprintln!("  dividend_growth: {}", settings.reference.dividend_growth);
    eprintln!("  profit_growth:   {}", settings.reference.profit_growth);
    eprintln!(
        "\n{} companies, {} benchmarks",
        settings.companies.len(),
        settings.benchmarks.len()
    );
    if let Some(dir) = &settings.data.dir {
        eprintln!("Data directory: {}", dir.display());
    }
    for (name, feed) in [
        ("news feed", &settings.data.news_feed),
        ("fear & greed feed", &settings.data.fear_greed_feed),
    ] {
        match feed {
            Some(path) => eprintln!("{name}: {}", path.display()),
            None => eprintln!("{name}: not configured"),
        }
    }

    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}
