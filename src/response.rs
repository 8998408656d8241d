//! Response shapes: named collections, single objects, and the empty result.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// `{"<key>": [...]}`.
pub fn collection<T: Serialize>(key: &'static str, items: Vec<T>) -> (StatusCode, Json<BTreeMap<&'static str, Vec<T>>>) {
    (StatusCode::OK, Json(BTreeMap::from([(key, items)])))
}

/// The object itself, or `[]` when nothing matched. Zero rows is still a 200.
pub fn single_or_empty<T: Serialize>(item: Option<T>) -> Response {
    match item {
        Some(item) => (StatusCode::OK, Json(item)).into_response(),
        None => empty(),
    }
}

pub fn empty() -> Response {
    (StatusCode::OK, Json(serde_json::json!([]))).into_response()
}
