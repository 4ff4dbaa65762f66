use serde::Deserialize;

use crate::core::{CacheMode, DashClient, DashError, client::RetryConfig, net};

#[derive(Deserialize)]
pub(crate) struct SummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    pub(crate) quote_summary: Option<SummaryNode>,
}

#[derive(Deserialize)]
pub(crate) struct SummaryNode {
    pub(crate) result: Option<Vec<serde_json::Value>>,
    pub(crate) error: Option<SummaryError>,
}

#[derive(Deserialize)]
pub(crate) struct SummaryError {
    pub(crate) description: String,
}

/// Fetch one or more summary modules for a symbol.
///
/// Returns `Ok(None)` when the source has no data for the symbol (missing or
/// empty result, or an in-envelope error such as "quote not found") so callers
/// can map that to their empty model. Transport failures and non-2xx statuses
/// are real errors.
pub(crate) async fn fetch_modules(
    client: &DashClient,
    symbol: &str,
    modules: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Option<serde_json::Value>, DashError> {
    let mut url = client.base_summary().join(symbol)?;
    url.query_pairs_mut().append_pair("modules", modules);

    let body = if cache_mode == CacheMode::Use
        && let Some(text) = client.cache_get(&url).await
    {
        text
    } else {
        let resp = client
            .send_with_retry(client.http().get(url.clone()), retry_override)
            .await?;
        let text = net::ok_text(resp).await?;
        if cache_mode != CacheMode::Bypass {
            client.cache_put(&url, &text).await;
        }
        text
    };

    let envelope: SummaryEnvelope = serde_json::from_str(&body)?;
    let node = envelope
        .quote_summary
        .ok_or_else(|| DashError::MissingData("missing quoteSummary node".into()))?;

    if let Some(err) = node.error {
        tracing::debug!(%symbol, %modules, "summary endpoint reported no data: {}", err.description);
        return Ok(None);
    }

    Ok(node.result.and_then(|mut r| {
        if r.is_empty() {
            None
        } else {
            Some(r.swap_remove(0))
        }
    }))
}
