use chrono::{Datelike, TimeZone, Utc};

use crate::{
    core::{
        CacheMode, DashClient, DashError, net,
        client::RetryConfig,
    },
    history::{
        Range,
        model::{AnnualBar, Candle, PriceHistory},
        wire::ChartEnvelope,
    },
};

pub(super) async fn fetch_history(
    client: &DashClient,
    symbol: &str,
    range: Option<Range>,
    period: Option<(i64, i64)>,
    interval: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<PriceHistory, DashError> {
    let mut url = client.base_market().join(symbol)?;
    {
        let mut qp = url.query_pairs_mut();
        if let Some((p1, p2)) = period {
            if p1 >= p2 {
                return Err(DashError::InvalidDates);
            }
            qp.append_pair("period1", &p1.to_string());
            qp.append_pair("period2", &p2.to_string());
        } else if let Some(r) = range {
            qp.append_pair("range", r.as_str());
        } else {
            return Err(DashError::MissingData("no range or period set".into()));
        }
        qp.append_pair("interval", interval);
    }

    if cache_mode == CacheMode::Use
        && let Some(body) = client.cache_get(&url).await
    {
        tracing::debug!(%symbol, "history served from cache");
        return decode_chart(&body);
    }

    let resp = client
        .send_with_retry(client.http().get(url.clone()), retry_override)
        .await?;
    let body = net::ok_text(resp).await?;

    if cache_mode != CacheMode::Bypass {
        client.cache_put(&url, &body).await;
    }

    decode_chart(&body)
}

fn decode_chart(body: &str) -> Result<PriceHistory, DashError> {
    let parsed: ChartEnvelope = serde_json::from_str(body)?;

    let chart = parsed
        .chart
        .ok_or_else(|| DashError::MissingData("missing chart node".into()))?;

    if let Some(err) = chart.error {
        return Err(DashError::MissingData(format!(
            "chart error: {} - {}",
            err.code, err.description
        )));
    }

    let mut results = chart
        .result
        .ok_or_else(|| DashError::MissingData("missing chart result".into()))?;
    let r0 = results
        .pop()
        .ok_or_else(|| DashError::MissingData("empty chart result".into()))?;

    let ts = r0.timestamp.unwrap_or_default();
    let quote = r0
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| DashError::MissingData("missing quote block".into()))?;

    let mut candles = Vec::with_capacity(ts.len());
    for (i, &t) in ts.iter().enumerate() {
        let open = quote.open.get(i).copied().flatten();
        let high = quote.high.get(i).copied().flatten();
        let low = quote.low.get(i).copied().flatten();
        let close = quote.close.get(i).copied().flatten();
        let volume = quote.volume.get(i).copied().flatten();

        // Rows with any missing price are dropped, matching the upstream
        // convention of null-padded arrays for halted sessions.
        if let (Some(open), Some(high), Some(low), Some(close)) = (open, high, low, close) {
            candles.push(Candle {
                ts: t,
                open,
                high,
                low,
                close,
                volume,
            });
        }
    }
    candles.sort_by_key(|c| c.ts);

    let percent_change = percent_change_column(&candles);
    Ok(PriceHistory {
        candles,
        percent_change,
    })
}

/// `(close[t] / close[t-1] - 1) * 100`; the first element is undefined.
pub(super) fn percent_change_column(candles: &[Candle]) -> Vec<Option<f64>> {
    candles
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i == 0 {
                return None;
            }
            let prev = candles[i - 1].close;
            if prev == 0.0 {
                None
            } else {
                Some((c.close / prev - 1.0) * 100.0)
            }
        })
        .collect()
}

/// Mean of each OHLCV field grouped by calendar year (UTC), years ascending.
pub(super) fn aggregate_annual(candles: &[Candle]) -> Vec<AnnualBar> {
    struct Acc {
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        n: u32,
    }

    let mut years: std::collections::BTreeMap<i32, Acc> = std::collections::BTreeMap::new();
    for c in candles {
        let year = match Utc.timestamp_opt(c.ts, 0).single() {
            Some(dt) => dt.year(),
            None => continue,
        };
        let acc = years.entry(year).or_insert(Acc {
            open: 0.0,
            high: 0.0,
            low: 0.0,
            close: 0.0,
            volume: 0.0,
            n: 0,
        });
        acc.open += c.open;
        acc.high += c.high;
        acc.low += c.low;
        acc.close += c.close;
        acc.volume += c.volume.unwrap_or(0) as f64;
        acc.n += 1;
    }

    years
        .into_iter()
        .map(|(year, acc)| {
            let n = f64::from(acc.n);
            AnnualBar {
                year,
                open: acc.open / n,
                high: acc.high / n,
                low: acc.low / n,
                close: acc.close / n,
                volume: acc.volume / n,
            }
        })
        .collect()
}
