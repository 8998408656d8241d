//! Hypermedia root handler.

use crate::resource::RootResource;
use crate::state::AppState;
use axum::{extract::State, Json};

/// GET /v1: hypermedia entry point.
pub async fn root(State(state): State<AppState>) -> Json<RootResource> {
    Json(RootResource::new(&state.links))
}
