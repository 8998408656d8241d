//! Builder handlers.

use crate::error::AppError;
use crate::handlers::parse_id;
use crate::resource::{builder_resources, listing_resources, Resource};
use crate::response::{collection, single_or_empty};
use crate::service::{BuilderService, ListingService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

/// GET /builders
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let builders = BuilderService::all(&state.db, &state.options).await?;
    Ok(collection("builders", builder_resources(&builders, &state.links)).into_response())
}

/// GET /builders/featured
pub async fn featured(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let builders = BuilderService::featured(&state.db, &state.options).await?;
    Ok(collection("builders", builder_resources(&builders, &state.links)).into_response())
}

/// GET /builder/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let builder = BuilderService::by_id(&state.db, &state.options, id).await?;
    if builder.is_none() {
        tracing::info!(builder_id = id, "no builder found");
    }
    Ok(single_or_empty(builder.as_ref().map(|b| Resource::new(b, &state.links))))
}

/// GET /builder/:id/listings
pub async fn listings(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let listings = ListingService::for_builder(&state.db, &state.options, id).await?;
    Ok(collection("listings", listing_resources(&listings, &state.links)).into_response())
}
