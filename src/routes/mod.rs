//! Router assembly. Every catalog route lives under `/v1` and is registered from the
//! templates in `paths`.

pub mod common;
pub mod paths;

use crate::handlers::{builder, listing, root};
use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};
use paths::axum_path;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub use common::common_routes;

/// Catalog routes under the versioned base path.
pub fn api_routes(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;
    Router::new()
        .route(paths::BASE_PATH, get(root::root))
        .route(&axum_path(paths::ROOT), get(root::root))
        .route(&axum_path(paths::LISTINGS), get(listing::map))
        .route(&axum_path(paths::FEATURED_LISTINGS), get(listing::featured))
        .route(&axum_path(paths::LISTING), get(listing::read))
        .route(&axum_path(paths::LISTING_GALLERY), get(listing::gallery))
        .route(&axum_path(paths::LISTING_FLOORPLANS), get(listing::floorplans))
        .route(
            &axum_path(paths::LISTING_INFO_REQUEST),
            put(listing::info_request).layer(RequestBodyLimitLayer::new(body_limit)),
        )
        .route(&axum_path(paths::BUILDERS), get(builder::list))
        .route(&axum_path(paths::FEATURED_BUILDERS), get(builder::featured))
        .route(&axum_path(paths::BUILDER), get(builder::read))
        .route(&axum_path(paths::BUILDER_LISTINGS), get(builder::listings))
        .with_state(state)
}

/// Full application: probes, catalog routes and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(TraceLayer::new_for_http())
}
