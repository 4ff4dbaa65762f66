use findash::ReportsBuilder;
use httpmock::{Method::GET, MockServer};
use serde_json::json;

use crate::common;

#[tokio::test]
async fn reports_fetch_builds_three_labeled_tables() {
    let server = MockServer::start();
    let sym = "AAPL";

    let body = json!({
        "quoteSummary": {
            "result": [{
                "balanceSheetHistory": {
                    "balanceSheetStatements": [
                        {
                            "endDate": {"raw": 1_703_980_800, "fmt": "2023-12-31"},
                            "totalAssets": {"raw": 500.0},
                            "totalLiab": {"raw": 300.0}
                        },
                        {
                            "endDate": {"raw": 1_672_444_800, "fmt": "2022-12-31"},
                            "totalAssets": {"raw": 450.0}
                        }
                    ]
                },
                "incomeStatementHistory": {
                    "incomeStatementHistory": [
                        {
                            "endDate": {"fmt": "2023-12-31"},
                            "totalRevenue": {"raw": 100.0},
                            "netIncome": {"raw": 25.0}
                        }
                    ]
                },
                "cashflowStatementHistory": {
                    "cashflowStatements": [
                        {
                            "endDate": {"fmt": "2023-12-31"},
                            "totalCashFromOperatingActivities": {"raw": 42.0}
                        }
                    ]
                }
            }],
            "error": null
        }
    });

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{sym}"))
            .query_param(
                "modules",
                "balanceSheetHistory,incomeStatementHistory,cashflowStatementHistory",
            );
        then.status(200)
            .header("content-type", "application/json")
            .body(body.to_string());
    });

    let client = common::client_for(&server);
    let reports = ReportsBuilder::new(&client, sym).fetch().await.unwrap();

    mock.assert();

    assert_eq!(reports.balance_sheet.periods, vec!["2023-12-31", "2022-12-31"]);
    let assets = reports.balance_sheet.row("totalAssets").unwrap();
    assert_eq!(assets.values, vec![Some(500.0), Some(450.0)]);
    // totalLiab is absent in the older period.
    let liab = reports.balance_sheet.row("totalLiab").unwrap();
    assert_eq!(liab.values, vec![Some(300.0), None]);

    assert_eq!(
        reports.income_statement.row("netIncome").unwrap().values,
        vec![Some(25.0)]
    );
    assert_eq!(
        reports
            .cash_flow
            .row("totalCashFromOperatingActivities")
            .unwrap()
            .values,
        vec![Some(42.0)]
    );
}

#[tokio::test]
async fn symbol_without_statements_yields_empty_tables() {
    let server = MockServer::start();
    let sym = "NODATA";

    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v10/finance/quoteSummary/{sym}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({
                    "quoteSummary": {
                        "result": null,
                        "error": {"code": "Not Found", "description": "Quote not found"}
                    }
                })
                .to_string(),
            );
    });

    let client = common::client_for(&server);
    let reports = ReportsBuilder::new(&client, sym).fetch().await.unwrap();

    assert!(reports.balance_sheet.is_empty());
    assert!(reports.income_statement.is_empty());
    assert!(reports.cash_flow.is_empty());
}

#[tokio::test]
async fn reports_upstream_error_is_a_status_failure() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v10/finance/quoteSummary/BROKEN");
        then.status(502).body("bad gateway");
    });

    let client = common::client_for(&server);
    let err = ReportsBuilder::new(&client, "BROKEN")
        .retry_policy(Some(findash::RetryConfig {
            enabled: false,
            ..Default::default()
        }))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, findash::DashError::Status { status: 502, .. }));
}
