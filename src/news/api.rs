use crate::{
    core::{CacheMode, DashClient, DashError, client::RetryConfig, net},
    news::{model::Article, wire},
};

pub(super) async fn fetch_news(
    client: &DashClient,
    query: &str,
    language: &str,
    page_size: u32,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<Article>, DashError> {
    let api_key = client
        .news_api_key()
        .ok_or_else(|| DashError::MissingData("news API key is not configured".into()))?;

    let mut url = client.base_news().join("everything")?;
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("language", language)
        .append_pair("pageSize", &page_size.to_string())
        .append_pair("apiKey", api_key);

    let mut fetched = false;
    let body = if cache_mode == CacheMode::Use
        && let Some(text) = client.cache_get(&url).await
    {
        text
    } else {
        fetched = true;
        let resp = client
            .send_with_retry(client.http().get(url.clone()), retry_override)
            .await?;
        net::ok_text(resp).await?
    };

    let envelope: wire::NewsEnvelope = serde_json::from_str(&body)?;

    if envelope.status.as_deref() != Some("ok") {
        return Err(DashError::MissingData(format!(
            "news source rejected the query: {}",
            envelope.message.unwrap_or_else(|| "unknown error".into())
        )));
    }

    // Only accepted envelopes enter the cache; an in-body rejection must not
    // be replayed for the TTL.
    if fetched && cache_mode != CacheMode::Bypass {
        client.cache_put(&url, &body).await;
    }

    let articles = envelope
        .articles
        .into_iter()
        .filter_map(|raw| {
            let published_str = raw.published_at?;
            let published_at = match chrono::DateTime::parse_from_rfc3339(&published_str) {
                Ok(dt) => dt.with_timezone(&chrono::Utc),
                Err(e) => {
                    tracing::warn!(%query, timestamp = %published_str, error = %e, "skipping article with unparseable publication time");
                    return None;
                }
            };
            Some(Article {
                title: raw.title,
                source: raw.source.and_then(|s| s.name),
                description: raw.description,
                published_at,
                link: raw.url,
            })
        })
        .collect();

    Ok(articles)
}
