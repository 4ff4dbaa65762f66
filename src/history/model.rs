use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// One OHLCV bar of price history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    /// Unix timestamp (seconds, UTC) of the bar.
    pub ts: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: Option<u64>,
}

impl Candle {
    /// The bar's timestamp as a UTC datetime.
    pub fn datetime_utc(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.ts, 0).single().unwrap()
    }
}

/// Price history for a symbol, with the derived day-over-day change column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceHistory {
    /// Bars ordered by timestamp ascending.
    pub candles: Vec<Candle>,
    /// `(close[t] / close[t-1] - 1) * 100`, aligned with `candles`.
    /// The first element is always `None`; an element is also `None` when the
    /// prior close is zero.
    pub percent_change: Vec<Option<f64>>,
}

impl PriceHistory {
    /// The most recent bar together with its percent change, if any bars exist.
    pub fn latest(&self) -> Option<(&Candle, Option<f64>)> {
        let candle = self.candles.last()?;
        let change = self.percent_change.last().copied().flatten();
        Some((candle, change))
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }
}

/// One calendar year of history, each field the arithmetic mean of the daily
/// values that fell in that year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnualBar {
    pub year: i32,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Mean daily volume. A float because it is an average, not a count.
    pub volume: f64,
}
