mod snapshot;

pub use snapshot::DashboardSnapshot;

use crate::{
    assistant::Assistant,
    core::{CacheMode, DashClient, DashError, client::RetryConfig},
    esg::{EsgBuilder, EsgScores},
    history::{AnnualBar, HistoryBuilder, PriceHistory, Range},
    news::{Article, NewsBuilder},
    reports::{FinancialReports, ReportsBuilder},
    sentiment::{SentimentPipeline, SentimentSummary},
};

/// A high-level interface for one dashboard symbol, providing convenient
/// access to every panel's data.
///
/// A `Dashboard` is created with a [`DashClient`] and a symbol, and delegates
/// to the per-domain builders while sharing one cache-mode/retry setting.
///
/// # Example
///
/// ```no_run
/// # use findash::{Dashboard, DashClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = DashClient::builder().news_api_key("key").build()?;
/// let board = Dashboard::new(&client, "AAPL");
///
/// let history = board.history().await?;
/// if let Some((latest, change)) = history.latest() {
///     println!("close {} ({:?}%)", latest.close, change);
/// }
///
/// let sentiment = board.sentiment().await?;
/// println!("news sentiment: {}%", sentiment.average_percent);
/// # Ok(())
/// # }
/// ```
pub struct Dashboard {
    client: DashClient,
    symbol: String,
    range: Range,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl Dashboard {
    /// Creates a new `Dashboard` for a given symbol.
    pub fn new(client: &DashClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            range: Range::Y5,
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the lookback window used by the history panel.
    #[must_use]
    pub const fn range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }

    /// Sets the cache mode for all subsequent calls made through this
    /// `Dashboard` instance.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the client's default retry policy for all subsequent calls
    /// made through this `Dashboard` instance.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// The symbol this dashboard is bound to.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Fetches daily price history with the percent-change column.
    pub async fn history(&self) -> Result<PriceHistory, DashError> {
        HistoryBuilder::new(&self.client, &self.symbol)
            .range(self.range)
            .cache_mode(self.cache_mode)
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await
    }

    /// Fetches the history window aggregated to calendar-year means.
    pub async fn annual_history(&self) -> Result<Vec<AnnualBar>, DashError> {
        HistoryBuilder::new(&self.client, &self.symbol)
            .range(self.range)
            .cache_mode(self.cache_mode)
            .retry_policy(self.retry_override.clone())
            .fetch_annual()
            .await
    }

    /// Fetches the three financial statement tables.
    pub async fn reports(&self) -> Result<FinancialReports, DashError> {
        ReportsBuilder::new(&self.client, &self.symbol)
            .cache_mode(self.cache_mode)
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await
    }

    /// Fetches the ESG sub-scores.
    pub async fn esg(&self) -> Result<EsgScores, DashError> {
        EsgBuilder::new(&self.client, &self.symbol)
            .cache_mode(self.cache_mode)
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await
    }

    /// Fetches recent articles mentioning the symbol.
    pub async fn news(&self) -> Result<Vec<Article>, DashError> {
        NewsBuilder::new(&self.client, &self.symbol)
            .cache_mode(self.cache_mode)
            .retry_policy(self.retry_override.clone())
            .fetch()
            .await
    }

    /// Runs the sentiment trend pipeline for the symbol.
    pub async fn sentiment(&self) -> Result<SentimentSummary, DashError> {
        SentimentPipeline::new(&self.client)
            .cache_mode(self.cache_mode)
            .retry_policy(self.retry_override.clone())
            .run(&self.symbol)
            .await
    }

    /// Asks the narrative assistant for free text, containing any failure as
    /// the placeholder message.
    pub async fn narrative(&self, prompt: &str) -> String {
        Assistant::new(&self.client)
            .retry_policy(self.retry_override.clone())
            .generate_or_placeholder(prompt)
            .await
    }

    /// Fetches every panel for this symbol, with per-panel failure isolation.
    pub async fn snapshot(&self) -> DashboardSnapshot {
        snapshot::fetch_snapshot(
            &self.client,
            &self.symbol,
            self.range,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }
}
