//! In-process stand-in for a PostgREST backend.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use club_rota::{Backend, Config};
use serde_json::{json, Value};

pub const API_KEY: &str = "test-anon-key";

/// Query strings received by the fake backend, in arrival order.
#[derive(Clone, Default)]
pub struct Recorded(Arc<Mutex<Vec<Vec<(String, String)>>>>);

impl Recorded {
    pub fn push(&self, params: Vec<(String, String)>) {
        self.0.lock().unwrap().push(params);
    }

    pub fn last(&self) -> Vec<(String, String)> {
        self.0.lock().unwrap().last().cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

/// Values of `key` in a recorded query, in order.
pub fn param<'a>(params: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    params
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}

/// Reject requests without the expected `apikey` and bearer token.
pub fn unauthorized(headers: &HeaderMap) -> Option<Response> {
    let apikey = headers.get("apikey").and_then(|v| v.to_str().ok());
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    let expected_bearer = format!("Bearer {API_KEY}");
    if apikey == Some(API_KEY) && bearer == Some(expected_bearer.as_str()) {
        return None;
    }
    Some(
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid API key", "hint": null })),
        )
            .into_response(),
    )
}

/// JSON rows with a PostgREST-style `Content-Range`.
pub fn rows(rows: Value) -> Response {
    let total = rows.as_array().map(Vec::len).unwrap_or_default();
    let range = match total {
        0 => "*/0".to_string(),
        n => format!("0-{}/{}", n - 1, n),
    };
    ([(header::CONTENT_RANGE, range)], Json(rows)).into_response()
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing listens on.
pub async fn closed_port() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn config_for(backend: Backend, url: &str, api_key: &str) -> Config {
    let values = HashMap::from([
        (backend.url_key().to_string(), url.to_string()),
        (backend.api_key_key().to_string(), api_key.to_string()),
    ]);
    Config::new().with_layer(values)
}
