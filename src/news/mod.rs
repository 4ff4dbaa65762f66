mod api;
mod model;
mod wire;

pub use model::Article;

use crate::core::{CacheMode, DashClient, DashError, client::RetryConfig};

/// A builder for fetching recent articles mentioning a free-text query.
///
/// The language filter is fixed to English, matching the sentiment lexicon.
pub struct NewsBuilder {
    client: DashClient,
    query: String,
    page_size: u32,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a given query (usually a ticker symbol).
    pub fn new(client: &DashClient, query: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            page_size: 100,
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the maximum number of articles to request.
    #[must_use]
    pub const fn page_size(mut self, n: u32) -> Self {
        self.page_size = n;
        self
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

    /// Executes the request and fetches the articles.
    ///
    /// A successful response with zero articles is an empty `Vec`, not an
    /// error; callers can rely on `Err` meaning the fetch itself failed.
    ///
    /// # Errors
    ///
    /// Returns a `DashError` if no API key is configured, the request fails,
    /// the response is non-2xx, or the body cannot be parsed.
    pub async fn fetch(self) -> Result<Vec<Article>, DashError> {
        api::fetch_news(
            &self.client,
            &self.query,
            "en",
            self.page_size,
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }
}
