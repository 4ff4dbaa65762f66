use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    pub(crate) status: Option<String>,
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) articles: Vec<ArticleNode>,
}

#[derive(Deserialize)]
pub(crate) struct ArticleNode {
    pub(crate) title: Option<String>,
    pub(crate) source: Option<SourceNode>,
    pub(crate) description: Option<String>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
    pub(crate) url: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct SourceNode {
    pub(crate) name: Option<String>,
}
