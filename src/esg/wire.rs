use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct V10Modules {
    #[serde(rename = "esgScores")]
    pub(crate) esg_scores: Option<EsgScoresNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EsgScoresNode {
    // These are objects: { "raw": ... }
    pub(crate) environment_score: Option<RawNum>,
    pub(crate) social_score: Option<RawNum>,
    pub(crate) governance_score: Option<RawNum>,
}

#[derive(Deserialize, Clone, Copy)]
pub(crate) struct RawNum {
    pub(crate) raw: Option<f64>,
}

pub(crate) fn from_raw(raw: Option<RawNum>) -> Option<f64> {
    raw.and_then(|n| n.raw)
}
