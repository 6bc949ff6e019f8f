//! Mock Bolt token endpoint and Fleet Integration API for tests
//!
//! `/token` issues `tok-1`, `tok-2`, ... on each call unless a failure is
//! scripted. Every other path records the request and replies with the next
//! scripted response (default `200 {"data":{}}`).

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use tokio::net::TcpListener;

use crate::config::Credentials;

/// A request received by the mock resource API.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Default)]
struct MockState {
    tokens_issued: AtomicUsize,
    token_failure: Mutex<Option<(StatusCode, String)>>,
    responses: Mutex<VecDeque<(StatusCode, String)>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockApi {
    pub base_url: String,
    state: Arc<MockState>,
}

impl MockApi {
    pub async fn start() -> Self {
        let state = Arc::new(MockState::default());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = axum::Router::new()
            .route("/token", post(token_handler))
            .fallback(resource_handler)
            .with_state(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new("fleet-id", "fleet-secret", format!("{}/fleet/v1", self.base_url))
            .with_token_url(format!("{}/token", self.base_url))
    }

    /// Queue a resource response.
    pub fn respond(&self, status: u16, body: impl Into<String>) {
        self.state.responses.lock().unwrap().push_back((
            StatusCode::from_u16(status).unwrap(),
            body.into(),
        ));
    }

    /// Make every subsequent token request fail.
    pub fn fail_tokens(&self, status: u16, body: impl Into<String>) {
        *self.state.token_failure.lock().unwrap() =
            Some((StatusCode::from_u16(status).unwrap(), body.into()));
    }

    pub fn tokens_issued(&self) -> usize {
        self.state.tokens_issued.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

async fn token_handler(State(state): State<Arc<MockState>>) -> Response {
    if let Some((status, body)) = state.token_failure.lock().unwrap().clone() {
        return (status, body).into_response();
    }
    let n = state.tokens_issued.fetch_add(1, Ordering::SeqCst) + 1;
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "access_token": format!("tok-{n}"),
            "expires_in": 600,
            "token_type": "Bearer",
        })),
    )
        .into_response()
}

async fn resource_handler(State(state): State<Arc<MockState>>, request: Request<Body>) -> Response {
    let path = request.uri().path().to_string();
    let authorization = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = axum::body::to_bytes(request.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    state.requests.lock().unwrap().push(RecordedRequest {
        path,
        authorization,
        body,
    });

    let (status, body) = state
        .responses
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((StatusCode::OK, r#"{"data":{}}"#.to_string()));
    (
        status,
        [(axum::http::header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}
