//! Diagnostic entry point: perform one narrative-model invocation and print
//! whether it succeeded. Useful for verifying credentials and connectivity
//! before wiring the assistant into a dashboard.
//!
//! Configuration comes from the environment:
//! - `FINDASH_ASSISTANT_URL`   override the model endpoint base (optional)
//! - `FINDASH_ASSISTANT_KEY`   API key for the model service (optional)
//! - `FINDASH_ASSISTANT_MODEL` model identifier (optional)

use std::process::ExitCode;

use findash::{Assistant, DashClient};
use tracing_subscriber::EnvFilter;

const PROBE_PROMPT: &str = "Summarize the purpose of a financial report in one sentence.";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut builder = DashClient::builder().timeout(std::time::Duration::from_secs(60));

    if let Ok(base) = std::env::var("FINDASH_ASSISTANT_URL") {
        match url::Url::parse(&base) {
            Ok(u) => builder = builder.base_assistant(u),
            Err(e) => {
                eprintln!("invalid FINDASH_ASSISTANT_URL: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    if let Ok(key) = std::env::var("FINDASH_ASSISTANT_KEY") {
        builder = builder.assistant_api_key(key);
    }

    let client = match builder.build() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("failed to build client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut assistant = Assistant::new(&client);
    if let Ok(model) = std::env::var("FINDASH_ASSISTANT_MODEL") {
        assistant = assistant.model(model);
    }

    match assistant.generate(PROBE_PROMPT).await {
        Ok(text) => {
            println!("model invocation succeeded:\n{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("model invocation failed: {e}");
            ExitCode::FAILURE
        }
    }
}
