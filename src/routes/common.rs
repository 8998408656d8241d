//! Health, readiness and version routes, served outside the versioned catalog paths.

use crate::routes::paths::BASE_PATH;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct CheckBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct VersionBody {
    name: &'static str,
    version: &'static str,
    api: &'static str,
}

async fn health() -> Json<CheckBody> {
    Json(CheckBody {
        status: "ok",
        database: None,
    })
}

/// 503 until the catalog connection answers a trivial statement.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<CheckBody>) {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(CheckBody {
                status: "ok",
                database: Some("ok"),
            }),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(CheckBody {
                    status: "degraded",
                    database: Some("unavailable"),
                }),
            )
        }
    }
}

async fn version() -> Json<VersionBody> {
    Json(VersionBody {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        api: BASE_PATH,
    })
}

/// GET /health, GET /ready, GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
