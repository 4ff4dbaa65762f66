//! The narrative assistant: a hosted generative model treated as an opaque
//! text-in/text-out collaborator. Nothing here assumes deterministic output,
//! fixed latency, or availability.

mod api;
mod wire;

use crate::core::{DashClient, DashError, client::RetryConfig};

/// Shown in place of a narrative whenever the model call fails. A model
/// outage must never abort a dashboard render.
pub const NARRATIVE_PLACEHOLDER: &str = "Narrative summary is currently unavailable.";

const DEFAULT_MODEL: &str = "amazon.titan-text-express-v1";

/// A client for the hosted narrative model.
pub struct Assistant {
    client: DashClient,
    model: String,
    max_token_count: Option<u32>,
    retry_override: Option<RetryConfig>,
}

impl Assistant {
    /// Creates an assistant using the default model.
    pub fn new(client: &DashClient) -> Self {
        Self {
            client: client.clone(),
            model: DEFAULT_MODEL.to_string(),
            max_token_count: None,
            retry_override: None,
        }
    }

    /// Selects a different hosted model.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Caps the generated output length.
    #[must_use]
    pub const fn max_token_count(mut self, n: u32) -> Self {
        self.max_token_count = Some(n);
        self
    }

    /// Overrides the default retry policy for model calls.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Sends `prompt` to the model and returns the generated text.
    ///
    /// # Errors
    ///
    /// Returns a `DashError` if the request fails, the model responds with a
    /// non-2xx status, or the response carries no generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, DashError> {
        api::generate(
            &self.client,
            &self.model,
            prompt,
            self.max_token_count,
            self.retry_override.as_ref(),
        )
        .await
    }

    /// Like [`Assistant::generate`], but contains every failure: on error the
    /// warning is logged and the caller gets [`NARRATIVE_PLACEHOLDER`] back.
    pub async fn generate_or_placeholder(&self, prompt: &str) -> String {
        match self.generate(prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(model = %self.model, error = %e, "narrative model call failed; using placeholder");
                NARRATIVE_PLACEHOLDER.to_string()
            }
        }
    }
}
