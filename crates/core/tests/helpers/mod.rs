//! Test harness for client integration tests.
//!
//! Spawns an axum server on an ephemeral port that imitates the VideoVault
//! backend under `/api`, records every request it sees, and answers with
//! whatever reply the test has configured.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::Value;
use videovault_core::{ClientConfig, SearchClient};

/// How the mock answers an endpoint.
#[derive(Clone, Debug)]
pub enum Reply {
    Json(Value),
    Status(u16),
    /// 200 with a body that isn't the expected JSON.
    Raw(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Recorded {
    pub path: String,
    pub query: Vec<(String, String)>,
}

struct Backend {
    categories: Mutex<Reply>,
    search: Mutex<Reply>,
    requests: Mutex<Vec<Recorded>>,
}

pub struct MockBackend {
    backend: Arc<Backend>,
    pub addr: SocketAddr,
}

impl MockBackend {
    pub async fn start() -> Self {
        let backend = Arc::new(Backend {
            categories: Mutex::new(Reply::Json(serde_json::json!([]))),
            search: Mutex::new(Reply::Json(serde_json::json!({ "videos": [], "totalResults": 0 }))),
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/videos/categories", get(categories))
            .route("/api/videos/search", get(search))
            .with_state(backend.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend crashed");
        });

        MockBackend { backend, addr }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    pub fn client(&self) -> SearchClient {
        SearchClient::new(ClientConfig::new(&self.base_url()).expect("valid base url"))
            .expect("build client")
    }

    pub fn on_categories(&self, reply: Reply) {
        *self.backend.categories.lock().unwrap() = reply;
    }

    pub fn on_search(&self, reply: Reply) {
        *self.backend.search.lock().unwrap() = reply;
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.backend.requests.lock().unwrap().clone()
    }

    pub fn search_requests(&self) -> Vec<Recorded> {
        self.requests().into_iter().filter(|r| r.path.ends_with("/search")).collect()
    }
}

/// A client whose base URL points at a port nothing listens on.
pub async fn unreachable_client() -> SearchClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    SearchClient::new(ClientConfig::new(&format!("http://{addr}/api")).expect("valid base url"))
        .expect("build client")
}

pub fn video(id: &str, title: &str) -> Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "channel": "TechMaster",
        "thumbnail": format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"),
        "publishedAt": "Mar 14, 2025",
    })
}

fn record(backend: &Backend, uri: &Uri) {
    let query = url::form_urlencoded::parse(uri.query().unwrap_or("").as_bytes())
        .into_owned()
        .collect();
    backend.requests.lock().unwrap().push(Recorded {
        path: uri.path().to_string(),
        query,
    });
}

fn respond(reply: Reply) -> Response {
    match reply {
        Reply::Json(v) => Json(v).into_response(),
        Reply::Status(code) => StatusCode::from_u16(code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Reply::Raw(body) => (StatusCode::OK, body).into_response(),
    }
}

async fn categories(State(backend): State<Arc<Backend>>, uri: Uri) -> Response {
    record(&backend, &uri);
    let reply = backend.categories.lock().unwrap().clone();
    respond(reply)
}

async fn search(State(backend): State<Arc<Backend>>, uri: Uri) -> Response {
    record(&backend, &uri);
    let reply = backend.search.lock().unwrap().clone();
    respond(reply)
}
