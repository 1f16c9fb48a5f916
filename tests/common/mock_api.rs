//! In-process PokeAPI stand-in for client tests.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{Response, StatusCode};
use axum::routing::get;
use axum::Router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A canned response.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

/// Minimal `/api/v2/pokemon/{name}` body.
pub fn pokemon_json(id: u32, name: &str, hp: u32) -> String {
    format!(
        r#"{{
            "id": {id},
            "name": "{name}",
            "height": 4,
            "weight": 60,
            "stats": [
                {{"base_stat": {hp}, "effort": 0, "stat": {{"name": "hp", "url": ""}}}},
                {{"base_stat": 55, "effort": 0, "stat": {{"name": "attack", "url": ""}}}},
                {{"base_stat": 40, "effort": 0, "stat": {{"name": "defense", "url": ""}}}}
            ],
            "types": [{{"slot": 1, "type": {{"name": "electric", "url": ""}}}}],
            "abilities": [{{"ability": {{"name": "static", "url": ""}}, "is_hidden": false, "slot": 1}}],
            "sprites": {{"front_default": null}}
        }}"#
    )
}

#[derive(Clone, Default)]
struct MockState {
    requested: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
}

pub struct MockPokeApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockPokeApi {
    pub async fn start() -> Self {
        let state = MockState::default();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/api/v2/pokemon/{name}", get(handle_pokemon))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Answer lookups of `name` with `resp`. Unknown names get a 404.
    pub async fn respond(&self, name: &str, resp: MockResponse) {
        self.state
            .responses
            .lock()
            .await
            .insert(name.to_string(), resp);
    }

    /// Names requested so far, in order.
    pub async fn requested(&self) -> Vec<String> {
        self.state.requested.lock().await.clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockPokeApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_pokemon(
    State(state): State<MockState>,
    Path(name): Path<String>,
) -> Response<Body> {
    state.requested.lock().await.push(name.clone());

    let resp = state
        .responses
        .lock()
        .await
        .get(&name)
        .cloned()
        .unwrap_or_else(|| MockResponse::error(404, "Not Found"));

    if resp.delay_ms > 0 {
        tokio::time::sleep(tokio::time::Duration::from_millis(resp.delay_ms)).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(resp.status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(resp.body))
        .unwrap()
}
