//! Production wiring: `IngestionCoordinator::for_x` built from an `AppConfig`
//! and a `FileConfig`, talking to a fake recent-search endpoint.
//!
//! Checks that every configured value (api base, query, budget, request
//! timeout, credential) actually reaches the wire.

mod harness;

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use serde_json::json;

use harness::FakeX;
use newswire_common::{AppConfig, FileConfig, IngestError, Platform};
use newswire_ingest::IngestionCoordinator;

fn app(token: &str) -> AppConfig {
    AppConfig {
        twitter_bearer_token: token.to_string(),
    }
}

fn file_config(api_base: &str) -> FileConfig {
    let mut config = FileConfig::default();
    config.x.api_base = api_base.to_string();
    config.ingest.query = "bunker fuel OR tanker".to_string();
    config.ingest.max_results = 30;
    config
}

#[tokio::test]
async fn configured_values_reach_the_request() {
    let fake = FakeX::start(
        StatusCode::OK,
        json!({"data": [
            {
                "id": "9", "text": "Bunker prices ease",
                "author_id": "5", "created_at": "2026-10-15T08:00:00.000Z"
            }
        ]}),
    )
    .await;

    let config = file_config(&fake.base_url);
    let coordinator = IngestionCoordinator::for_x(&app("wired-token"), &config);
    let docs = coordinator.ingest().await.unwrap();

    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].platform(), Platform::X);
    assert_eq!(docs[0].id(), "9");

    let request = fake.seen.only();
    assert_eq!(request.query["query"], "bunker fuel OR tanker");
    assert_eq!(request.query["max_results"], "30");
    assert_eq!(request.authorization.as_deref(), Some("Bearer wired-token"));
}

#[tokio::test]
async fn configured_request_timeout_is_applied() {
    let fake =
        FakeX::start_delayed(StatusCode::OK, json!({"data": []}), Duration::from_secs(5)).await;

    let mut config = file_config(&fake.base_url);
    config.x.request_timeout_secs = 1;

    let started = Instant::now();
    let err = IngestionCoordinator::for_x(&app("t"), &config)
        .ingest()
        .await
        .unwrap_err();

    assert!(
        matches!(err, IngestError::Transport { platform: Platform::X, .. }),
        "got {err:?}"
    );
    assert!(started.elapsed() < Duration::from_secs(4));
    assert_eq!(fake.seen.all().len(), 1);
}

#[tokio::test]
async fn configured_ingest_deadline_is_applied() {
    let fake =
        FakeX::start_delayed(StatusCode::OK, json!({"data": []}), Duration::from_secs(5)).await;

    let mut config = file_config(&fake.base_url);
    config.ingest.timeout_secs = Some(1);

    let err = IngestionCoordinator::for_x(&app("t"), &config)
        .ingest()
        .await
        .unwrap_err();

    assert!(matches!(err, IngestError::Timeout { .. }), "got {err:?}");
}

#[tokio::test]
async fn blank_credential_sends_nothing() {
    let fake = FakeX::start(StatusCode::OK, json!({"data": []})).await;

    let err = IngestionCoordinator::for_x(&app(""), &file_config(&fake.base_url))
        .ingest()
        .await
        .unwrap_err();

    assert!(matches!(err, IngestError::Configuration(_)));
    assert!(fake.seen.all().is_empty());
}
