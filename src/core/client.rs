//! Public client surface + builder.
//!
//! The `DashClient` is the one configuration object the whole crate hangs off:
//! base URLs, API keys, timeouts, the response cache and the retry policy all
//! live here and are injected into each fetcher at construction. There is no
//! process-wide singleton.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::sync::RwLock;
use url::Url;

use crate::core::DashError;

const USER_AGENT: &str = "findash/0.3 (+https://github.com/findash-rs/findash)";

const DEFAULT_BASE_MARKET: &str = "https://query1.finance.yahoo.com/v8/finance/chart/";
const DEFAULT_BASE_SUMMARY: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary/";
const DEFAULT_BASE_NEWS: &str = "https://newsapi.org/v2/";
const DEFAULT_BASE_ASSISTANT: &str = "https://bedrock-runtime.us-west-2.amazonaws.com/";

/// Specifies the backoff strategy for retrying failed requests.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Uses a fixed delay between retries.
    Fixed(Duration),
    /// Uses an exponential delay between retries.
    /// The delay is calculated as `base * (factor ^ attempt)`.
    Exponential {
        /// The initial backoff duration.
        base: Duration,
        /// The multiplicative factor for each subsequent retry.
        factor: f64,
        /// The maximum duration to wait between retries.
        max: Duration,
        /// Whether to apply random jitter (+/- 50%) to the delay.
        jitter: bool,
    },
}

/// Configuration for the automatic retry mechanism.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Enables or disables the retry mechanism.
    pub enabled: bool,
    /// The maximum number of retries. The total number of attempts is `max_retries + 1`.
    pub max_retries: u32,
    /// The backoff strategy to use between retries.
    pub backoff: Backoff,
    /// A list of HTTP status codes that should trigger a retry.
    pub retry_on_status: Vec<u16>,
    /// Whether to retry on request timeouts.
    pub retry_on_timeout: bool,
    /// Whether to retry on connection errors.
    pub retry_on_connect: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 3,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(200),
                factor: 2.0,
                max: Duration::from_secs(3),
                jitter: true,
            },
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

/// Defines the behavior of the in-memory cache for an API call.
///
/// The cache is keyed by the full request URL, so a key always captures the
/// symbol together with the mode (range, interval, query parameters) of the
/// request. Entries expire after the client's TTL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheMode {
    /// Read from the cache if a non-expired entry is present; otherwise fetch
    /// from the network and write the response to the cache. (Default)
    Use,
    /// Always fetch from the network, bypassing any cached entry, and write
    /// the new response to the cache.
    Refresh,
    /// Always fetch from the network and do not read from or write to the cache.
    Bypass,
}

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

/// The shared HTTP client and configuration for all fetchers.
#[derive(Debug, Clone)]
pub struct DashClient {
    http: Client,
    base_market: Url,
    base_summary: Url,
    base_news: Url,
    base_assistant: Url,

    news_api_key: Option<String>,
    assistant_api_key: Option<String>,

    retry: RetryConfig,
    cache: Option<Arc<CacheStore>>,
}

impl Default for DashClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl DashClient {
    /// Create a new builder.
    pub fn builder() -> DashClientBuilder {
        DashClientBuilder::default()
    }

    /* -------- internal getters used by the fetcher modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_market(&self) -> &Url {
        &self.base_market
    }
    pub(crate) fn base_summary(&self) -> &Url {
        &self.base_summary
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_assistant(&self) -> &Url {
        &self.base_assistant
    }
    pub(crate) fn news_api_key(&self) -> Option<&str> {
        self.news_api_key.as_deref()
    }
    pub(crate) fn assistant_api_key(&self) -> Option<&str> {
        self.assistant_api_key.as_deref()
    }

    /// Whether response caching is enabled on this client.
    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        let store = self.cache.as_ref()?;
        let guard = store.map.read().await;
        if let Some(entry) = guard.get(url.as_str())
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.body.clone());
        }
        None
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str) {
        let store = match &self.cache {
            Some(s) => s.clone(),
            None => return,
        };
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at: Instant::now() + store.default_ttl,
        };
        let mut guard = store.map.write().await;
        guard.insert(url.as_str().to_string(), entry);
    }

    /// Send a request, retrying per the client's (or an override) retry policy.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, DashError> {
        let cfg = retry_override.unwrap_or(&self.retry);

        if !cfg.enabled {
            return Ok(req.send().await?);
        }

        let mut attempt: u32 = 0;
        loop {
            let this_try = req
                .try_clone()
                .ok_or_else(|| DashError::MissingData("request body is not cloneable".into()))?;

            match this_try.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if attempt < cfg.max_retries && cfg.retry_on_status.contains(&status) {
                        tracing::debug!(status, attempt, "retryable status, backing off");
                        tokio::time::sleep(backoff_delay(&cfg.backoff, attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Ok(resp);
                }
                Err(e) => {
                    let retryable = (e.is_timeout() && cfg.retry_on_timeout)
                        || (e.is_connect() && cfg.retry_on_connect);
                    if attempt < cfg.max_retries && retryable {
                        tracing::debug!(error = %e, attempt, "retryable transport error, backing off");
                        tokio::time::sleep(backoff_delay(&cfg.backoff, attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }
}

fn backoff_delay(backoff: &Backoff, attempt: u32) -> Duration {
    match backoff {
        Backoff::Fixed(d) => *d,
        Backoff::Exponential {
            base,
            factor,
            max,
            jitter,
        } => {
            let mut d = base.as_secs_f64() * factor.powi(attempt as i32);
            if *jitter {
                // Sub-second clock noise stands in for a RNG; enough to
                // spread out retry storms without another dependency.
                let noise = std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map_or(0, |t| t.subsec_nanos());
                let scale = 0.5 + (f64::from(noise % 1000) / 1000.0);
                d *= scale;
            }
            Duration::from_secs_f64(d.min(max.as_secs_f64()))
        }
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`DashClient`].
#[derive(Default)]
pub struct DashClientBuilder {
    user_agent: Option<String>,
    base_market: Option<Url>,
    base_summary: Option<Url>,
    base_news: Option<Url>,
    base_assistant: Option<Url>,

    news_api_key: Option<String>,
    assistant_api_key: Option<String>,

    retry: Option<RetryConfig>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
}

impl DashClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the market-data (chart) API base.
    pub fn base_market(mut self, url: Url) -> Self {
        self.base_market = Some(url);
        self
    }

    /// Override the summary API base used for financial reports and ESG data.
    pub fn base_summary(mut self, url: Url) -> Self {
        self.base_summary = Some(url);
        self
    }

    /// Override the news API base.
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the narrative-assistant API base.
    pub fn base_assistant(mut self, url: Url) -> Self {
        self.base_assistant = Some(url);
        self
    }

    /// Set the API key for the news source. Required by the news fetcher.
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Set the API key for the narrative assistant.
    pub fn assistant_api_key(mut self, key: impl Into<String>) -> Self {
        self.assistant_api_key = Some(key.into());
        self
    }

    /// Replace the default retry policy.
    pub fn retry_policy(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Enable in-memory response caching with a default TTL.
    /// If not set, caching is disabled.
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default base URL fails to parse or the underlying
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<DashClient, DashError> {
        let base_market = self.base_market.unwrap_or(Url::parse(DEFAULT_BASE_MARKET)?);
        let base_summary = self
            .base_summary
            .unwrap_or(Url::parse(DEFAULT_BASE_SUMMARY)?);
        let base_news = self.base_news.unwrap_or(Url::parse(DEFAULT_BASE_NEWS)?);
        let base_assistant = self
            .base_assistant
            .unwrap_or(Url::parse(DEFAULT_BASE_ASSISTANT)?);

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(DashClient {
            http,
            base_market,
            base_summary,
            base_news,
            base_assistant,
            news_api_key: self.news_api_key,
            assistant_api_key: self.assistant_api_key,
            retry: self.retry.unwrap_or_default(),
            cache: self.cache_ttl.map(|ttl| {
                Arc::new(CacheStore {
                    map: RwLock::new(HashMap::new()),
                    default_ttl: ttl,
                })
            }),
        })
    }
}
