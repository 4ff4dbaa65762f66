mod api;
mod model;
mod wire;

pub use model::EsgScores;

use crate::core::{CacheMode, DashClient, DashError, client::RetryConfig};

/// A builder for fetching ESG (Environmental, Social, and Governance) scores
/// for a specific symbol.
pub struct EsgBuilder<'a> {
    client: &'a DashClient,
    symbol: String,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl<'a> EsgBuilder<'a> {
    /// Creates a new `EsgBuilder` for a given symbol.
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

    /// Fetches the ESG sub-scores for the symbol.
    ///
    /// Symbols without ESG coverage yield all-`None` scores.
    ///
    /// # Errors
    ///
    /// Returns a `DashError` if the upstream request fails or the response
    /// cannot be parsed.
    pub async fn fetch(self) -> Result<EsgScores, DashError> {
        api::fetch_esg_scores(
            self.client,
            &self.symbol,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }
}
