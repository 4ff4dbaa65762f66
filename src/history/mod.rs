mod api;
mod model;
mod wire;

pub use model::{AnnualBar, Candle, PriceHistory};

use crate::core::{CacheMode, DashClient, DashError, client::RetryConfig};

/// A lookback window for a history request.
#[derive(Debug, Clone, Copy, Default)]
pub enum Range {
    D5,
    M1,
    M3,
    M6,
    Y1,
    #[default]
    Y5,
    Max,
}

impl Range {
    fn as_str(self) -> &'static str {
        match self {
            Range::D5 => "5d",
            Range::M1 => "1mo",
            Range::M3 => "3mo",
            Range::M6 => "6mo",
            Range::Y1 => "1y",
            Range::Y5 => "5y",
            Range::Max => "max",
        }
    }
}

/// A builder for fetching historical prices for a specific symbol.
///
/// `fetch` returns daily bars with the derived percent-change column;
/// `fetch_annual` returns the same window aggregated to calendar-year means.
/// Both modes share one underlying request and cache entry.
pub struct HistoryBuilder<'a> {
    client: &'a DashClient,
    symbol: String,
    range: Option<Range>,
    period: Option<(i64, i64)>,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl<'a> HistoryBuilder<'a> {
    /// Creates a new `HistoryBuilder` for a given symbol.
    ///
    /// The default lookback is five years of daily bars, matching the
    /// dashboard's KPI panel.
    pub fn new(client: &'a DashClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            range: Some(Range::Y5),
            period: None,
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Sets the lookback window. Clears any explicit period.
    #[must_use]
    pub fn range(mut self, range: Range) -> Self {
        self.period = None;
        self.range = Some(range);
        self
    }

    /// Sets an explicit start/end window. Clears any range.
    #[must_use]
    pub fn between(
        mut self,
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.range = None;
        self.period = Some((start.timestamp(), end.timestamp()));
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

    /// Fetches daily price history with the percent-change column.
    ///
    /// # Errors
    ///
    /// Returns a `DashError` if the upstream request fails, the response
    /// cannot be parsed, or an invalid date window was set.
    pub async fn fetch(self) -> Result<PriceHistory, DashError> {
        api::fetch_history(
            self.client,
            &self.symbol,
            self.range,
            self.period,
            "1d",
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await
    }

    /// Fetches the same window aggregated to per-calendar-year means.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`HistoryBuilder::fetch`].
    pub async fn fetch_annual(self) -> Result<Vec<AnnualBar>, DashError> {
        let history = api::fetch_history(
            self.client,
            &self.symbol,
            self.range,
            self.period,
            "1d",
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await?;
        Ok(api::aggregate_annual(&history.candles))
    }
}
