//! Listing handlers: map search, featured, detail, images, information requests.

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::model::{ImageKind, MapRegion};
use crate::resource::{listing_resources, ListingResource};
use crate::response::{collection, single_or_empty};
use crate::service::{ImageService, ListingService};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use std::collections::HashMap;

fn coordinate_param(params: &HashMap<String, String>, name: &str) -> Result<f64, AppError> {
    let raw = params
        .get(name)
        .ok_or_else(|| AppError::BadRequest(format!("missing query parameter {}", name)))?;
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::BadRequest(format!("invalid {}: {}", name, raw)))
}

/// GET /listings?latStart&latStop&lonStart&lonStop
pub async fn map(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let region = MapRegion::new(
        coordinate_param(&params, "latStart")?,
        coordinate_param(&params, "latStop")?,
        coordinate_param(&params, "lonStart")?,
        coordinate_param(&params, "lonStop")?,
    );
    let listings = ListingService::find_in_region(&state.db, &state.options, &region).await?;
    Ok(collection("listings", listing_resources(&listings, &state.links)).into_response())
}

/// GET /listings/featured
pub async fn featured(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let listings = ListingService::featured(&state.db, &state.options).await?;
    Ok(collection("listings", listing_resources(&listings, &state.links)).into_response())
}

/// GET /listing/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let detail = ListingService::by_id(&state.db, &state.options, id).await?;
    if !detail.enrichment.is_complete() {
        tracing::warn!(listing_id = id, failed = ?detail.enrichment.failed, "listing served without some images");
    }
    if detail.listing.is_none() {
        tracing::info!(listing_id = id, "no listing found");
    }
    let resource = detail.listing.as_ref().map(|l| ListingResource::new(l, &state.links));
    Ok(single_or_empty(resource))
}

async fn images(state: &AppState, id_str: &str, kind: ImageKind) -> Result<axum::response::Response, AppError> {
    let id = parse_id(id_str)?;
    let images = ImageService::for_listing(&state.db, &state.options, id, kind).await?;
    Ok(collection(kind.collection(), images).into_response())
}

/// GET /listing/:id/gallery
pub async fn gallery(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    images(&state, &id_str, ImageKind::Gallery).await
}

/// GET /listing/:id/floorplans
pub async fn floorplans(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    images(&state, &id_str, ImageKind::Floorplan).await
}

/// PUT /listing/:id/infoRequest. Body is JSON with a string `data` field; stored as sent.
pub async fn info_request(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: String,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let parsed: Value =
        serde_json::from_str(&body).map_err(|e| AppError::BadRequest(format!("body must be JSON: {}", e)))?;
    if parsed.get("data").and_then(Value::as_str).is_none() {
        return Err(AppError::BadRequest("body must have a string 'data' field".into()));
    }
    ListingService::request_info(&state.db, id, &body).await?;
    Ok(StatusCode::NO_CONTENT)
}
