mod api;
mod model;
mod wire;

pub use model::{FinancialReports, Statement, StatementRow};

use crate::core::{CacheMode, DashClient, DashError, client::RetryConfig};

/// A builder for fetching the three financial statement tables for a symbol.
pub struct ReportsBuilder<'a> {
    client: &'a DashClient,
    symbol: String,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl<'a> ReportsBuilder<'a> {
    /// Creates a new `ReportsBuilder` for a given symbol.
    pub fn new(client: &'a DashClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Fetches the balance sheet, income statement and cash flow tables.
    ///
    /// A symbol with no statements on file yields empty tables.
    ///
    /// # Errors
    ///
    /// Returns a `DashError` if the upstream request fails or the response
    /// cannot be parsed.
    pub async fn fetch(self) -> Result<FinancialReports, DashError> {
        api::fetch_reports(
            self.client,
            &self.symbol,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }
}
