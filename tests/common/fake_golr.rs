//! Fake Golr select endpoint for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1, serving `GET /select` with canned documents. The handler
//! honours `rows` and `fl` the way a real Solr instance would (row cap,
//! field restriction) and records every received parameter set so tests can
//! assert on the exact query string the client sent.
//!
//! # Example
//!
//! ```rust,no_run
//! # tokio_test::block_on(async {
//! use common::fake_golr::FakeGolr;
//!
//! let golr = FakeGolr::start().await.unwrap();
//! golr.seed(serde_json::json!({"subject": "MGI:95886", "object": "DOID:4"})).await;
//!
//! // Point a SolrClient at golr.base_url()
//! let url = golr.base_url();
//! # });
//! ```

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use gaq_core::Document;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// State shared between the router and test code.
#[derive(Default)]
struct GolrState {
    docs: Vec<Document>,
    /// Every parameter set received on /select, in arrival order.
    requests: Vec<HashMap<String, String>>,
}

/// Handle to the running fake Golr server.
pub struct FakeGolr {
    addr: SocketAddr,
    state: Arc<Mutex<GolrState>>,
}

impl FakeGolr {
    /// Start the fake server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(GolrState::default()));

        let app = Router::new()
            .route("/select", get(select))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL for the endpoint (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Seed a document into the index. Panics unless `doc` is a JSON object.
    pub async fn seed(&self, doc: serde_json::Value) {
        let doc = doc
            .as_object()
            .expect("seeded document must be a JSON object")
            .clone();
        self.state.lock().await.docs.push(doc);
    }

    /// Parameters of the most recent /select request, if any.
    pub async fn last_request(&self) -> Option<HashMap<String, String>> {
        self.state.lock().await.requests.last().cloned()
    }
}

// ---------------------------------------------------------------------------
// Route handler
// ---------------------------------------------------------------------------

async fn select(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<Mutex<GolrState>>>,
) -> impl IntoResponse {
    let mut state = state.lock().await;
    state.requests.push(params.clone());

    let rows: usize = params
        .get("rows")
        .and_then(|r| r.parse().ok())
        .unwrap_or(10);

    let fl: Option<Vec<&str>> = params
        .get("fl")
        .map(|fl| fl.split(',').collect());

    let docs: Vec<Document> = state
        .docs
        .iter()
        .take(rows)
        .map(|doc| match &fl {
            Some(fields) => doc
                .iter()
                .filter(|(k, _)| fields.contains(&k.as_str()))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            None => doc.clone(),
        })
        .collect();

    axum::Json(serde_json::json!({
        "responseHeader": {"status": 0, "QTime": 1},
        "response": {
            "numFound": state.docs.len(),
            "start": 0,
            "docs": docs
        }
    }))
}
