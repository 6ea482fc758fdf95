//! In-process API stand-in for tests: replays canned responses per path and
//! records every request it receives.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::to_bytes;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tokio::net::TcpListener;

use super::{ClientConfig, HeliumClient};

const PREFIX: &str = "/v1";

#[derive(Clone, Debug)]
pub(crate) struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Recorded {
    /// Decoded query pairs, in the order they were sent.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let url = format!("http://mock{}?{}", self.path, self.query.as_deref().unwrap_or(""));
        reqwest::Url::parse(&url)
            .unwrap()
            .query_pairs()
            .into_owned()
            .collect()
    }
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    delay: Option<Duration>,
}

#[derive(Default)]
struct Shared {
    routes: Mutex<HashMap<String, Canned>>,
    requests: Mutex<Vec<Recorded>>,
}

pub(crate) struct MockServer {
    addr: SocketAddr,
    shared: Arc<Shared>,
}

impl MockServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let shared = Arc::new(Shared::default());
        let app = Router::new().fallback(replay).with_state(shared.clone());
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        Self { addr, shared }
    }

    /// Answer `path` (relative to the API prefix) with `status` and `body`.
    pub fn respond(&self, path: &str, status: StatusCode, body: impl Into<String>) -> &Self {
        self.insert(path, status, body.into(), None)
    }

    pub fn ok(&self, path: &str, body: impl Into<String>) -> &Self {
        self.respond(path, StatusCode::OK, body)
    }

    pub fn respond_after(&self, path: &str, delay: Duration, body: impl Into<String>) -> &Self {
        self.insert(path, StatusCode::OK, body.into(), Some(delay))
    }

    fn insert(&self, path: &str, status: StatusCode, body: String, delay: Option<Duration>) -> &Self {
        self.shared.routes.lock().unwrap().insert(
            format!("{PREFIX}{path}"),
            Canned {
                status,
                body,
                delay,
            },
        );
        self
    }

    /// Client configuration pointing at this server over plain HTTP.
    pub fn config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_host(format!("{}{PREFIX}", self.addr))
            .plain_http()
    }

    pub fn client(&self) -> HeliumClient {
        HeliumClient::new(self.config()).unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.shared.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().expect("no request was received")
    }
}

async fn replay(State(shared): State<Arc<Shared>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, usize::MAX).await.unwrap_or_default().to_vec();
    let path = parts.uri.path().to_string();

    shared.requests.lock().unwrap().push(Recorded {
        method: parts.method.to_string(),
        path: path.clone(),
        query: parts.uri.query().map(str::to_string),
        headers: parts.headers,
        body,
    });

    let canned = shared.routes.lock().unwrap().get(&path).cloned();
    let Some(canned) = canned else {
        return (StatusCode::NOT_FOUND, "not found").into_response();
    };
    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body,
    )
        .into_response()
}
