use crate::{
    core::{CacheMode, DashClient, DashError, client::RetryConfig, summary},
    esg::{
        model::EsgScores,
        wire::{V10Modules, from_raw},
    },
};

pub(super) async fn fetch_esg_scores(
    client: &DashClient,
    symbol: &str,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<EsgScores, DashError> {
    let root =
        summary::fetch_modules(client, symbol, "esgScores", cache_mode, retry_override).await?;

    // No ESG coverage for this symbol: all-None scores, not an error.
    let Some(root) = root else {
        return Ok(EsgScores::default());
    };

    let modules: V10Modules = serde_json::from_value(root)?;
    let Some(node) = modules.esg_scores else {
        return Ok(EsgScores::default());
    };

    Ok(EsgScores {
        environment: from_raw(node.environment_score),
        social: from_raw(node.social_score),
        governance: from_raw(node.governance_score),
    })
}
