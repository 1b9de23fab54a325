// In-process registry and station servers for transport tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

/// Serve `router` on an ephemeral local port from a background thread
///
/// The socket is bound before returning, so requests made right away queue
/// until the runtime starts accepting.
pub fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");
    listener.set_nonblocking(true).expect("nonblocking");

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("test runtime");
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).expect("tokio listener");
            axum::serve(listener, router).await.expect("serve");
        });
    });

    format!("http://{}", addr)
}

/// A local port nothing is listening on
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test listener");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}

/// Registry serving fixed `name -> endpoint` bindings
pub fn spawn_registry(bindings: &[(&str, &str)]) -> String {
    let table: HashMap<String, String> = bindings
        .iter()
        .map(|(name, endpoint)| (name.to_string(), endpoint.to_string()))
        .collect();

    let router = Router::new()
        .route("/bindings/:name", get(binding))
        .with_state(Arc::new(table));
    spawn(router)
}

async fn binding(
    State(table): State<Arc<HashMap<String, String>>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    table
        .get(&name)
        .map(|endpoint| Json(json!({ "name": name, "endpoint": endpoint })))
        .ok_or(StatusCode::NOT_FOUND)
}

/// Scripted replies and the requests a fake station received
pub struct StationScript {
    pub record_id: Option<String>,
    pub counts: String,
    pub updated: bool,
    pub received: Mutex<Vec<(String, Value)>>,
}

impl StationScript {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            record_id: Some("CR00001".to_string()),
            counts: "PD 3, SPB 0".to_string(),
            updated: true,
            received: Mutex::new(Vec::new()),
        })
    }

    pub fn with(record_id: Option<&str>, counts: &str, updated: bool) -> Arc<Self> {
        Arc::new(Self {
            record_id: record_id.map(str::to_string),
            counts: counts.to_string(),
            updated,
            received: Mutex::new(Vec::new()),
        })
    }

    fn observe(&self, op: &str, body: Value) {
        self.received
            .lock()
            .expect("received lock")
            .push((op.to_string(), body));
    }

    pub fn received(&self) -> Vec<(String, Value)> {
        self.received.lock().expect("received lock").clone()
    }
}

pub fn spawn_station(script: Arc<StationScript>) -> String {
    let router = Router::new()
        .route("/createCRecord", post(create_criminal))
        .route("/createMRecord", post(create_missing))
        .route("/getRecordCounts", post(record_counts))
        .route("/editCRecord", post(edit_criminal))
        .with_state(script);
    spawn(router)
}

async fn create_criminal(
    State(script): State<Arc<StationScript>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    script.observe("createCRecord", body);
    Json(json!({ "record_id": script.record_id }))
}

async fn create_missing(
    State(script): State<Arc<StationScript>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    script.observe("createMRecord", body);
    Json(json!({ "record_id": script.record_id }))
}

async fn record_counts(
    State(script): State<Arc<StationScript>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    script.observe("getRecordCounts", body);
    Json(json!({ "counts": script.counts }))
}

async fn edit_criminal(
    State(script): State<Arc<StationScript>>,
    Json(body): Json<Value>,
) -> Json<Value> {
    script.observe("editCRecord", body);
    Json(json!({ "updated": script.updated }))
}

/// Station that fails every call with the given status
pub fn spawn_failing_station(status: StatusCode) -> String {
    let router = Router::new().fallback(move || async move { status });
    spawn(router)
}

/// Station whose replies are not the expected JSON shape
pub fn spawn_garbled_station() -> String {
    let router = Router::new().fallback(|| async { "<html>maintenance</html>" });
    spawn(router)
}

/// Station that answers `getRecordCounts` only after `delay`
pub fn spawn_slow_station(delay: Duration, counts: &'static str) -> String {
    let router = Router::new().route(
        "/getRecordCounts",
        post(move |Json(_): Json<Value>| async move {
            tokio::time::sleep(delay).await;
            Json(json!({ "counts": counts }))
        }),
    );
    spawn(router)
}
