#![allow(dead_code)]

use findash::{DashClient, DashClientBuilder};
use httpmock::MockServer;
use url::Url;

/// A client builder with every base URL pointed at the mock server.
pub fn builder_for(server: &MockServer) -> DashClientBuilder {
    DashClient::builder()
        .base_market(Url::parse(&format!("{}/v8/finance/chart/", server.base_url())).unwrap())
        .base_summary(
            Url::parse(&format!("{}/v10/finance/quoteSummary/", server.base_url())).unwrap(),
        )
        .base_news(Url::parse(&format!("{}/v2/", server.base_url())).unwrap())
        .base_assistant(Url::parse(&format!("{}/", server.base_url())).unwrap())
        .news_api_key("test-key")
}

pub fn client_for(server: &MockServer) -> DashClient {
    builder_for(server).build().unwrap()
}

/// A minimal chart body: three consecutive daily closes.
pub fn chart_body(ts: &[i64], closes: &[f64]) -> String {
    let opens: Vec<f64> = closes.iter().map(|c| c - 1.0).collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 1.0).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 2.0).collect();
    let volumes: Vec<u64> = closes.iter().map(|_| 1_000).collect();
    serde_json::json!({
        "chart": {
            "result": [{
                "timestamp": ts,
                "indicators": {
                    "quote": [{
                        "open": opens,
                        "high": highs,
                        "low": lows,
                        "close": closes,
                        "volume": volumes
                    }]
                }
            }],
            "error": null
        }
    })
    .to_string()
}
