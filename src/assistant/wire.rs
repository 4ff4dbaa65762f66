use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub(crate) input_text: &'a str,
    #[serde(rename = "maxTokenCount", skip_serializing_if = "Option::is_none")]
    pub(crate) max_token_count: Option<u32>,
}

#[derive(Deserialize)]
pub(crate) struct GenerateResponse {
    #[serde(default)]
    pub(crate) results: Vec<GenerateResult>,
}

#[derive(Deserialize)]
pub(crate) struct GenerateResult {
    pub(crate) generated_text: Option<String>,
}
