use crate::{
    core::{CacheMode, DashClient, DashError, client::RetryConfig},
    esg::{EsgBuilder, EsgScores},
    history::{HistoryBuilder, PriceHistory, Range},
    reports::{FinancialReports, ReportsBuilder},
    sentiment::{SentimentPipeline, SentimentSummary},
};

/// One symbol's worth of dashboard panels, fetched together.
///
/// Every panel carries its own `Result`: an upstream failure in one data
/// category is contained there and never prevents the other panels from
/// being fetched or reported.
#[derive(Debug)]
pub struct DashboardSnapshot {
    pub history: Result<PriceHistory, DashError>,
    pub reports: Result<FinancialReports, DashError>,
    pub esg: Result<EsgScores, DashError>,
    pub sentiment: Result<SentimentSummary, DashError>,
}

impl DashboardSnapshot {
    /// Whether every panel failed; the one condition worth treating as a
    /// whole-query failure upstream.
    pub fn all_failed(&self) -> bool {
        self.history.is_err()
            && self.reports.is_err()
            && self.esg.is_err()
            && self.sentiment.is_err()
    }
}

pub(super) async fn fetch_snapshot(
    client: &DashClient,
    symbol: &str,
    range: Range,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> DashboardSnapshot {
    let history = HistoryBuilder::new(client, symbol)
        .range(range)
        .cache_mode(cache_mode)
        .retry_policy(retry_override.cloned())
        .fetch();

    let reports = ReportsBuilder::new(client, symbol)
        .cache_mode(cache_mode)
        .retry_policy(retry_override.cloned())
        .fetch();

    let esg = EsgBuilder::new(client, symbol)
        .cache_mode(cache_mode)
        .retry_policy(retry_override.cloned())
        .fetch();

    let pipeline = SentimentPipeline::new(client)
        .cache_mode(cache_mode)
        .retry_policy(retry_override.cloned());

    let (history, reports, esg, sentiment) =
        tokio::join!(history, reports, esg, pipeline.run(symbol));

    for (panel, failed) in [
        ("history", history.is_err()),
        ("reports", reports.is_err()),
        ("esg", esg.is_err()),
        ("sentiment", sentiment.is_err()),
    ] {
        if failed {
            tracing::warn!(%symbol, panel, "panel fetch failed; other panels unaffected");
        }
    }

    DashboardSnapshot {
        history,
        reports,
        esg,
        sentiment,
    }
}
