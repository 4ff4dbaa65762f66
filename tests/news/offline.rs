use findash::NewsBuilder;
use httpmock::{Method::GET, MockServer};
use serde_json::json;

use crate::common;

fn article(desc: Option<&str>, published: &str) -> serde_json::Value {
    json!({
        "source": {"id": null, "name": "Newswire"},
        "title": "A headline",
        "description": desc,
        "url": "https://example.com/a",
        "publishedAt": published
    })
}

#[tokio::test]
async fn news_fetch_parses_articles_and_sends_fixed_language() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", "AAPL")
            .query_param("language", "en")
            .query_param("pageSize", "100")
            .query_param("apiKey", "test-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({
                    "status": "ok",
                    "totalResults": 2,
                    "articles": [
                        article(Some("shares surge on strong growth"), "2024-01-03T08:30:00Z"),
                        article(None, "2024-01-04T10:00:00Z")
                    ]
                })
                .to_string(),
            );
    });

    let client = common::client_for(&server);
    let articles = NewsBuilder::new(&client, "AAPL").fetch().await.unwrap();

    mock.assert();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].source.as_deref(), Some("Newswire"));
    assert_eq!(
        articles[0].usable_description(),
        Some("shares surge on strong growth")
    );
    assert!(articles[1].usable_description().is_none());
    assert_eq!(
        articles[0].published_at.date_naive(),
        chrono::NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    );
}

#[tokio::test]
async fn unparseable_timestamps_are_skipped_not_fatal() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({
                    "status": "ok",
                    "articles": [
                        article(Some("good news"), "not-a-timestamp"),
                        article(Some("more news"), "2024-02-01T00:00:00Z")
                    ]
                })
                .to_string(),
            );
    });

    let client = common::client_for(&server);
    let articles = NewsBuilder::new(&client, "TSLA").fetch().await.unwrap();
    assert_eq!(articles.len(), 1);
}

#[tokio::test]
async fn non_success_status_is_a_hard_failure() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(401).body(r#"{"status":"error"}"#);
    });

    let client = common::client_for(&server);
    let err = NewsBuilder::new(&client, "AAPL").fetch().await.unwrap_err();
    assert!(matches!(err, findash::DashError::Status { status: 401, .. }));
}

#[tokio::test]
async fn rejected_query_in_body_is_a_failure() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({"status": "error", "message": "apiKey invalid"}).to_string(),
            );
    });

    let client = common::client_for(&server);
    let err = NewsBuilder::new(&client, "AAPL").fetch().await.unwrap_err();
    match err {
        findash::DashError::MissingData(msg) => assert!(msg.contains("apiKey invalid")),
        other => panic!("expected MissingData, got {other:?}"),
    }
}

#[tokio::test]
async fn rejected_body_is_not_cached() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                json!({"status": "error", "message": "apiKey invalid"}).to_string(),
            );
    });

    let client = common::client_for(&server);
    NewsBuilder::new(&client, "AAPL").fetch().await.unwrap_err();
    NewsBuilder::new(&client, "AAPL").fetch().await.unwrap_err();

    // Both rejections reached the server; neither was replayed from the cache.
    mock.assert_hits(2);
}

#[tokio::test]
async fn missing_api_key_fails_before_any_request() {
    let server = MockServer::start();
    let client = findash::DashClient::builder()
        .base_news(url::Url::parse(&format!("{}/v2/", server.base_url())).unwrap())
        .build()
        .unwrap();

    let err = NewsBuilder::new(&client, "AAPL").fetch().await.unwrap_err();
    assert!(matches!(err, findash::DashError::MissingData(_)));
}

#[tokio::test]
async fn zero_articles_is_an_empty_vec_not_an_error() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body(json!({"status": "ok", "articles": []}).to_string());
    });

    let client = common::client_for(&server);
    let articles = NewsBuilder::new(&client, "QUIET").fetch().await.unwrap();
    assert!(articles.is_empty());
}
