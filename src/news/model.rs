use chrono::{DateTime, Utc};
use serde::Serialize;

/// One news article returned for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// The headline, if the source provided one.
    pub title: Option<String>,
    /// The publishing outlet's display name.
    pub source: Option<String>,
    /// The article's summary text. Articles without a description carry no
    /// sentiment signal and are skipped by the pipeline.
    pub description: Option<String>,
    /// Publication time, UTC.
    pub published_at: DateTime<Utc>,
    /// A direct link to the article.
    pub link: Option<String>,
}

impl Article {
    /// The description, if present and non-empty after trimming.
    pub fn usable_description(&self) -> Option<&str> {
        let text = self.description.as_deref()?.trim();
        if text.is_empty() { None } else { Some(text) }
    }
}
