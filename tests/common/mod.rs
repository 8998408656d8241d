//! Scripted in-memory connection and request helpers shared by the API tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use homz_api::{app, AppError, AppState, Connection, Database, SqlView};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const ORIGIN: &str = "http://api.test:8181";

type Responder = Box<dyn FnMut(&str) -> Result<SqlView, AppError> + Send>;

/// Answers every statement through `responder` and records what it saw.
pub struct Scripted {
    responder: Responder,
    pub log: Arc<Mutex<Vec<String>>>,
    pub inserts: Arc<Mutex<Vec<(i64, String)>>>,
}

#[async_trait]
impl Connection for Scripted {
    async fn query(&mut self, statement: &str) -> Result<SqlView, AppError> {
        self.log.lock().unwrap().push(statement.to_string());
        (self.responder)(statement)
    }

    async fn insert_request(&mut self, timestamp: i64, data: &str) -> Result<(), AppError> {
        self.inserts.lock().unwrap().push((timestamp, data.to_string()));
        Ok(())
    }
}

pub struct Harness {
    pub app: axum::Router,
    pub log: Arc<Mutex<Vec<String>>>,
    pub inserts: Arc<Mutex<Vec<(i64, String)>>>,
}

impl Harness {
    pub fn new<F>(responder: F) -> Self
    where
        F: FnMut(&str) -> Result<SqlView, AppError> + Send + 'static,
    {
        let log = Arc::new(Mutex::new(Vec::new()));
        let inserts = Arc::new(Mutex::new(Vec::new()));
        let conn = Scripted {
            responder: Box::new(responder),
            log: log.clone(),
            inserts: inserts.clone(),
        };
        let state = AppState::with_defaults(Database::new(conn), ORIGIN);
        Harness {
            app: app(state),
            log,
            inserts,
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Vec<u8>) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();
        let res = self.app.clone().oneshot(req).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, bytes) = self.send(Method::GET, uri, None).await;
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    pub fn statements(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

fn owned(values: Vec<&str>) -> Vec<Option<String>> {
    values.into_iter().map(|v| Some(v.to_string())).collect()
}

/// Sparse listing columns for a listing at (`lat`, `lng`).
pub fn listing_row(id: i64, builder_id: i64, active: i64, lat: f64, lng: f64) -> Vec<Option<String>> {
    let (id, builder_id, active, lat, lng) = (
        id.to_string(),
        builder_id.to_string(),
        active.to_string(),
        lat.to_string(),
        lng.to_string(),
    );
    let name = format!("Listing {}", id);
    owned(vec![
        &id,
        &name,
        "https://cdn.test/listing.jpg",
        &active,
        &lat,
        &lng,
        &builder_id,
        "Starting at",
        "199000",
        "259000",
        "1500",
        "2200",
        "3",
        "4",
        "2",
        "3",
    ])
}

/// Detail columns appended to a sparse row.
pub fn detail_tail() -> Vec<Option<String>> {
    vec![
        Some("Single Family".into()),
        Some("Round Rock".into()),
        Some("Williamson".into()),
        Some("TX".into()),
        Some("78664".into()),
        Some("Brand new community".into()),
        Some("info@oaks.test".into()),
        Some("https://oaks.test".into()),
        Some("512-555-0199".into()),
        None,
        Some("RRISD".into()),
    ]
}

pub fn builder_row(id: i64, name: &str, paid: bool) -> Vec<Option<String>> {
    let id = id.to_string();
    vec![
        Some(id),
        Some(name.to_string()),
        Some("512-555-0100".into()),
        None,
        Some("sales@builder.test".into()),
        Some(if paid { "1" } else { "0" }.into()),
        Some("https://builder.test/logo.png".into()),
        Some("https://builder.test".into()),
        Some("1".into()),
    ]
}

pub fn image_row(url: &str, caption: Option<&str>, order: i64, listing_id: i64) -> Vec<Option<String>> {
    vec![
        Some(url.to_string()),
        caption.map(str::to_string),
        Some(order.to_string()),
        Some(listing_id.to_string()),
    ]
}

/// The two bounds of `column BETWEEN a AND b` in `sql`.
pub fn between(sql: &str, column: &str) -> (f64, f64) {
    let marker = format!("{} BETWEEN ", column);
    let start = sql.find(&marker).unwrap() + marker.len();
    let rest = &sql[start..];
    let end = rest.find(')').unwrap();
    let mut parts = rest[..end].split(" AND ");
    let lo = parts.next().unwrap().trim().parse().unwrap();
    let hi = parts.next().unwrap().trim().parse().unwrap();
    (lo, hi)
}
