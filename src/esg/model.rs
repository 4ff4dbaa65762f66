use serde::Serialize;

/// Sustainability sub-scores for a company.
///
/// Each score is on the source's 0..=100 scale. All three are `None` when the
/// source has no ESG coverage for the symbol, which is not an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EsgScores {
    pub environment: Option<f64>,
    pub social: Option<f64>,
    pub governance: Option<f64>,
}

impl EsgScores {
    /// Whether the source reported at least one component score.
    pub fn has_any(&self) -> bool {
        self.environment.is_some() || self.social.is_some() || self.governance.is_some()
    }
}
