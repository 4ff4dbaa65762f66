//! The sentiment trend pipeline: query → articles → polarity samples →
//! monthly buckets → one headline percentage.
//!
//! Averaging is bucket-first by construction: each calendar month is reduced
//! to its mean polarity before the months are averaged, so a month with many
//! articles weighs no more than a quiet one.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::{
    core::{CacheMode, DashClient, DashError, client::RetryConfig},
    news::{Article, NewsBuilder},
    sentiment::{
        analyzer::SentimentAnalyzer,
        model::{SentimentBucket, SentimentRecord, SentimentSample, SentimentSummary, store_key},
        store::SentimentStore,
    },
};

/// Turns a query string into a [`SentimentSummary`].
///
/// A fetch failure surfaces as `Err`; a successful fetch with nothing to
/// score yields the empty summary. Callers can always tell "the news source
/// was unreachable" apart from "no sentiment today".
pub struct SentimentPipeline {
    client: DashClient,
    analyzer: SentimentAnalyzer,
    store: Option<Arc<dyn SentimentStore>>,
    page_size: u32,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl SentimentPipeline {
    /// Creates a pipeline with the default analyzer and no durable store.
    pub fn new(client: &DashClient) -> Self {
        Self {
            client: client.clone(),
            analyzer: SentimentAnalyzer::new(),
            store: None,
            page_size: 100,
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Replaces the polarity analyzer.
    #[must_use]
    pub fn analyzer(mut self, analyzer: SentimentAnalyzer) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Attaches a durable store; each run then writes the query's record
    /// under `"<query>_news_sentiment"`, overwriting any prior record.
    #[must_use]
    pub fn store(mut self, store: Arc<dyn SentimentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Sets the maximum number of articles to request.
    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.page_size = n;
        self
    }

    /// Sets the cache mode for the underlying news fetch.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the retry policy for the underlying news fetch.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Runs the pipeline for `query`.
    ///
    /// # Errors
    ///
    /// Returns a `DashError` if the news fetch fails or, when a store is
    /// attached, the record write fails. Zero qualifying articles is not an
    /// error: it yields the empty summary.
    pub async fn run(&self, query: &str) -> Result<SentimentSummary, DashError> {
        let articles = NewsBuilder::new(&self.client, query)
            .page_size(self.page_size)
            .cache_mode(self.cache_mode)
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await?;

        let samples = score_articles(&self.analyzer, &articles);
        let summary = summarize(&samples);

        tracing::debug!(
            %query,
            articles = articles.len(),
            samples = samples.len(),
            buckets = summary.series.len(),
            average_percent = summary.average_percent,
            "sentiment pipeline complete"
        );

        if let Some(store) = &self.store {
            let record = SentimentRecord {
                query: query.to_string(),
                average_percent: summary.average_percent,
            };
            if let Err(e) = store.put(&store_key(query), &record).await {
                tracing::warn!(%query, error = %e, "failed to persist sentiment record");
                return Err(e);
            }
        }

        Ok(summary)
    }
}

/// Scores every article with a non-empty description, one sample per article.
///
/// The sample keeps the publication date at day granularity only.
pub fn score_articles(analyzer: &SentimentAnalyzer, articles: &[Article]) -> Vec<SentimentSample> {
    articles
        .iter()
        .filter_map(|article| {
            let text = article.usable_description()?;
            Some(SentimentSample {
                date: article.published_at.date_naive(),
                polarity: analyzer.polarity(text),
            })
        })
        .collect()
}

/// Aggregates samples into the monthly series and the headline percentage.
///
/// Months with no samples are omitted; the series holds only populated
/// buckets, ordered by period ascending. With no samples at all the result is
/// the empty summary.
pub fn summarize(samples: &[SentimentSample]) -> SentimentSummary {
    if samples.is_empty() {
        return SentimentSummary::empty();
    }

    let mut months: BTreeMap<NaiveDate, (f64, u32)> = BTreeMap::new();
    for sample in samples {
        let period = month_start(sample.date);
        let acc = months.entry(period).or_insert((0.0, 0));
        acc.0 += sample.polarity;
        acc.1 += 1;
    }

    let series: Vec<SentimentBucket> = months
        .into_iter()
        .map(|(period, (sum, n))| SentimentBucket {
            period,
            mean_polarity: sum / f64::from(n),
        })
        .collect();

    let mean_of_means =
        series.iter().map(|b| b.mean_polarity).sum::<f64>() / series.len() as f64;

    SentimentSummary {
        average_percent: round2(mean_of_means * 100.0),
        series,
    }
}

fn month_start(date: NaiveDate) -> NaiveDate {
    // from_ymd_opt with day 1 cannot fail for a date that already exists.
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
