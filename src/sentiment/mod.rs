//! News sentiment: the polarity analyzer, the trend pipeline and the
//! durable per-query record store.

mod analyzer;
mod model;
mod pipeline;
mod store;

pub use analyzer::SentimentAnalyzer;
pub use model::{SentimentBucket, SentimentRecord, SentimentSample, SentimentSummary, store_key};
pub use pipeline::{SentimentPipeline, score_articles, summarize};
pub use store::{JsonFileStore, MemoryStore, SentimentStore};
