use findash::{CacheMode, HistoryBuilder, Range};
use httpmock::{Method::GET, MockServer};

use crate::common;

// 2020-06-01, 2020-06-02, 2021-06-01 (UTC midnights).
const TS: [i64; 3] = [1_590_969_600, 1_591_056_000, 1_622_505_600];

#[tokio::test]
async fn history_fetch_builds_percent_change_column() {
    let server = MockServer::start();
    let sym = "AAPL";

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(format!("/v8/finance/chart/{sym}"))
            .query_param("range", "5y")
            .query_param("interval", "1d");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::chart_body(&TS, &[100.0, 110.0, 99.0]));
    });

    let client = common::client_for(&server);
    let history = HistoryBuilder::new(&client, sym).fetch().await.unwrap();

    mock.assert();

    assert_eq!(history.len(), 3);
    assert!(history.percent_change[0].is_none());
    assert!((history.percent_change[1].unwrap() - 10.0).abs() < 1e-9);
    assert!((history.percent_change[2].unwrap() - (-10.0)).abs() < 1e-9);

    let (latest, change) = history.latest().unwrap();
    assert_eq!(latest.close, 99.0);
    assert!((change.unwrap() - (-10.0)).abs() < 1e-9);
}

#[tokio::test]
async fn annual_mode_averages_each_field_per_year() {
    let server = MockServer::start();
    let sym = "MSFT";

    server.mock(|when, then| {
        when.method(GET).path(format!("/v8/finance/chart/{sym}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(common::chart_body(&TS, &[10.0, 20.0, 30.0]));
    });

    let client = common::client_for(&server);
    let bars = HistoryBuilder::new(&client, sym)
        .range(Range::Max)
        .fetch_annual()
        .await
        .unwrap();

    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].year, 2020);
    assert!((bars[0].close - 15.0).abs() < 1e-9);
    assert!((bars[0].volume - 1_000.0).abs() < 1e-9);
    assert_eq!(bars[1].year, 2021);
    assert!((bars[1].close - 30.0).abs() < 1e-9);
}

#[tokio::test]
async fn history_upstream_error_is_a_status_failure() {
    let server = MockServer::start();
    let sym = "FAIL";

    server.mock(|when, then| {
        when.method(GET).path(format!("/v8/finance/chart/{sym}"));
        then.status(404).body("not found");
    });

    let client = common::client_for(&server);
    let err = HistoryBuilder::new(&client, sym).fetch().await.unwrap_err();

    match err {
        findash::DashError::Status { status, .. } => assert_eq!(status, 404),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_window_is_rejected_before_any_request() {
    let server = MockServer::start();
    let client = common::client_for(&server);

    let start = chrono::DateTime::from_timestamp(2_000, 0).unwrap();
    let end = chrono::DateTime::from_timestamp(1_000, 0).unwrap();

    let err = HistoryBuilder::new(&client, "AAPL")
        .between(start, end)
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, findash::DashError::InvalidDates));
}

#[tokio::test]
async fn cached_history_is_served_without_a_second_request() {
    let server = MockServer::start();
    let sym = "CACHED";

    let mock = server.mock(|when, then| {
        when.method(GET).path(format!("/v8/finance/chart/{sym}"));
        then.status(200)
            .header("content-type", "application/json")
            .body(common::chart_body(&TS, &[10.0, 11.0, 12.0]));
    });

    let client = common::builder_for(&server)
        .cache_ttl(std::time::Duration::from_secs(300))
        .build()
        .unwrap();

    let first = HistoryBuilder::new(&client, sym).fetch().await.unwrap();
    let second = HistoryBuilder::new(&client, sym).fetch().await.unwrap();
    assert_eq!(first, second);
    mock.assert_hits(1);

    // Refresh bypasses the cached entry and hits the network again.
    let _ = HistoryBuilder::new(&client, sym)
        .cache_mode(CacheMode::Refresh)
        .fetch()
        .await
        .unwrap();
    mock.assert_hits(2);
}

#[tokio::test]
async fn retryable_status_is_retried_until_success() {
    let server = MockServer::start();
    let sym = "RETRY";

    let fail = server.mock(|when, then| {
        when.method(GET).path(format!("/v8/finance/chart/{sym}"));
        then.status(503).body("busy");
    });

    let client = common::builder_for(&server)
        .retry_policy(findash::RetryConfig {
            enabled: true,
            max_retries: 2,
            backoff: findash::Backoff::Fixed(std::time::Duration::from_millis(1)),
            retry_on_status: vec![503],
            retry_on_timeout: true,
            retry_on_connect: true,
        })
        .build()
        .unwrap();

    let err = HistoryBuilder::new(&client, sym).fetch().await.unwrap_err();
    // All attempts exhausted against the failing mock.
    fail.assert_hits(3);
    assert!(matches!(err, findash::DashError::Status { status: 503, .. }));
}
