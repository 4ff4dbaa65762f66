//! findash: data engine for a financial dashboard.
//!
//! Given a ticker symbol, this crate fetches price history, financial
//! statements, ESG scores and news, derives the dashboard's metrics
//! (percent change, the monthly news-sentiment trend, what-if scenario
//! projections), and exposes a narrative-assistant boundary for free-text
//! summaries. Rendering is left to the caller; every panel is plain data.

pub mod assistant;
pub mod core;
pub mod dashboard;
pub mod esg;
pub mod history;
pub mod news;
pub mod reports;
pub mod scenario;
pub mod sentiment;

pub use assistant::{Assistant, NARRATIVE_PLACEHOLDER};
pub use crate::core::{Backoff, CacheMode, DashClient, DashClientBuilder, DashError, RetryConfig};
pub use dashboard::{Dashboard, DashboardSnapshot};
pub use esg::{EsgBuilder, EsgScores};
pub use history::{AnnualBar, Candle, HistoryBuilder, PriceHistory, Range};
pub use news::{Article, NewsBuilder};
pub use reports::{FinancialReports, ReportsBuilder, Statement, StatementRow};
pub use scenario::{ScenarioInputs, ScenarioProjection};
pub use sentiment::{
    JsonFileStore, MemoryStore, SentimentAnalyzer, SentimentBucket, SentimentPipeline,
    SentimentRecord, SentimentSample, SentimentStore, SentimentSummary,
};
