use findash::EsgBuilder;
use httpmock::{Method::GET, MockServer};
use serde_json::json;

use crate::common;

#[tokio::test]
async fn esg_fetch_maps_component_scores() {
    let server = MockServer::start();
    let sym = "MSFT";

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{sym}"))
            .query_param("modules", "esgScores");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({
                    "quoteSummary": {
                        "result": [{
                            "esgScores": {
                                "environmentScore": {"raw": 45.1},
                                "socialScore": {"raw": 60.0},
                                "governanceScore": {"raw": 72.3}
                            }
                        }],
                        "error": null
                    }
                })
                .to_string(),
            );
    });

    let client = common::client_for(&server);
    let esg = EsgBuilder::new(&client, sym).fetch().await.unwrap();

    mock.assert();
    assert_eq!(esg.environment, Some(45.1));
    assert_eq!(esg.social, Some(60.0));
    assert_eq!(esg.governance, Some(72.3));
    assert!(esg.has_any());
}

#[tokio::test]
async fn missing_esg_coverage_yields_all_none_not_an_error() {
    let server = MockServer::start();
    let sym = "PRIVCO";

    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{sym}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({
                    "quoteSummary": {
                        "result": null,
                        "error": {"description": "No fundamentals data found"}
                    }
                })
                .to_string(),
            );
    });

    let client = common::client_for(&server);
    let esg = EsgBuilder::new(&client, sym).fetch().await.unwrap();

    assert!(!esg.has_any());
    assert_eq!(esg.environment, None);
    assert_eq!(esg.social, None);
    assert_eq!(esg.governance, None);
}

#[tokio::test]
async fn partial_scores_keep_present_components() {
    let server = MockServer::start();
    let sym = "PARTIAL";

    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{sym}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({
                    "quoteSummary": {
                        "result": [{
                            "esgScores": {
                                "environmentScore": {"raw": 12.0},
                                "socialScore": null,
                                "governanceScore": {"raw": null}
                            }
                        }],
                        "error": null
                    }
                })
                .to_string(),
            );
    });

    let client = common::client_for(&server);
    let esg = EsgBuilder::new(&client, sym).fetch().await.unwrap();

    assert_eq!(esg.environment, Some(12.0));
    assert_eq!(esg.social, None);
    assert_eq!(esg.governance, None);
}
