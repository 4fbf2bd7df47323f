//! In-process fake of the X recent-search endpoint.
//!
//! Serves one canned status + JSON body for every request and records what it
//! was sent, so tests can assert on clamping, the recency window and auth.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use x_client::XClient;

use newswire_ingest::XConnector;

#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
}

#[derive(Clone, Default)]
pub struct Seen(Arc<Mutex<Vec<SeenRequest>>>);

impl Seen {
    pub fn all(&self) -> Vec<SeenRequest> {
        self.0.lock().unwrap().clone()
    }

    pub fn only(&self) -> SeenRequest {
        let all = self.all();
        assert_eq!(all.len(), 1, "expected exactly one upstream request");
        all.into_iter().next().unwrap()
    }
}

pub struct FakeX {
    pub base_url: String,
    pub seen: Seen,
}

impl FakeX {
    pub async fn start(status: StatusCode, body: Value) -> Self {
        Self::start_delayed(status, body, Duration::ZERO).await
    }

    /// Like `start`, but every response is held back by `delay` after the
    /// request has been recorded.
    pub async fn start_delayed(status: StatusCode, body: Value, delay: Duration) -> Self {
        let seen = Seen::default();
        let app = Router::new()
            .route(
                "/2/tweets/search/recent",
                get(
                    move |State(seen): State<Seen>,
                          Query(query): Query<HashMap<String, String>>,
                          headers: HeaderMap| {
                        let body = body.clone();
                        async move {
                            let authorization = headers
                                .get(header::AUTHORIZATION)
                                .and_then(|v| v.to_str().ok())
                                .map(|v| v.to_string());
                            seen.0.lock().unwrap().push(SeenRequest {
                                query,
                                authorization,
                            });
                            tokio::time::sleep(delay).await;
                            (status, Json(body))
                        }
                    },
                ),
            )
            .with_state(seen.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            seen,
        }
    }

    /// Connector pointed at this fake with the given bearer token.
    pub fn connector(&self, token: &str) -> XConnector {
        XConnector::new(XClient::new(token.to_string()).with_api_base(self.base_url.clone()))
    }
}
