//! Shared application state for all routes. Built once at startup from the loaded config.

use crate::config::{AppConfig, DEFAULT_MAX_BODY_BYTES};
use crate::db::Database;
use crate::links::LinkBuilder;
use crate::service::FetchOptions;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub links: Arc<LinkBuilder>,
    pub options: FetchOptions,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(db: Database, config: &AppConfig) -> Self {
        AppState {
            db,
            links: Arc::new(LinkBuilder::new(&config.server.origin())),
            options: FetchOptions::from_config(config),
            max_body_bytes: config.max_body_bytes,
        }
    }

    /// State with default options; links are rooted at `origin`.
    pub fn with_defaults(db: Database, origin: &str) -> Self {
        AppState {
            db,
            links: Arc::new(LinkBuilder::new(origin)),
            options: FetchOptions::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
