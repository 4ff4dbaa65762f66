use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One scored article: publication day plus its polarity.
///
/// Time-of-day is discarded; the pipeline only ever buckets by calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentSample {
    pub date: NaiveDate,
    /// Polarity in `[-1, 1]`.
    pub polarity: f64,
}

/// Mean polarity over all samples in one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentBucket {
    /// The first day of the month, identifying the bucket.
    pub period: NaiveDate,
    pub mean_polarity: f64,
}

/// The pipeline's output: a time-bucketed series plus one scalar headline.
///
/// Months without any qualifying article are omitted from `series`; the
/// series therefore only ever contains buckets with at least one sample,
/// ordered by period ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSummary {
    /// `round(mean(bucket means) * 100, 2)`; `0.0` when no samples exist.
    pub average_percent: f64,
    pub series: Vec<SentimentBucket>,
}

impl SentimentSummary {
    /// The empty summary: no buckets, zero average. Returned when a fetch
    /// succeeded but produced no scoreable article.
    pub fn empty() -> Self {
        Self {
            average_percent: 0.0,
            series: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// The small durable record persisted per query, overwrite-on-write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub query: String,
    pub average_percent: f64,
}

/// The store key for a query, e.g. `"AAPL_news_sentiment"`.
pub fn store_key(query: &str) -> String {
    format!("{query}_news_sentiment")
}
