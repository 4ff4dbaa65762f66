use crate::{
    assistant::wire::{GenerateRequest, GenerateResponse},
    core::{DashClient, DashError, client::RetryConfig},
};

pub(super) async fn generate(
    client: &DashClient,
    model: &str,
    prompt: &str,
    max_token_count: Option<u32>,
    retry_override: Option<&RetryConfig>,
) -> Result<String, DashError> {
    let url = client
        .base_assistant()
        .join(&format!("model/{model}/invoke"))?;

    let payload = GenerateRequest {
        input_text: prompt,
        max_token_count,
    };

    let mut req = client.http().post(url.clone()).json(&payload);
    if let Some(key) = client.assistant_api_key() {
        req = req.bearer_auth(key);
    }

    let resp = client.send_with_retry(req, retry_override).await?;
    if !resp.status().is_success() {
        return Err(DashError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body: GenerateResponse = resp.json().await?;
    body.results
        .into_iter()
        .next()
        .and_then(|r| r.generated_text)
        .ok_or_else(|| DashError::MissingData("model response contained no generated text".into()))
}
