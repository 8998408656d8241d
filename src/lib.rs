//! Homz API: read-mostly REST API over the new-home listings and builders catalog.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod links;
pub mod model;
pub mod resource;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;

pub use config::{load_from_path, AppConfig, Cli, RowPolicy};
pub use db::{Connection, Database, SqlView};
pub use error::{AppError, ConfigError};
pub use links::LinkBuilder;
pub use routes::{api_routes, app, common_routes};
pub use state::AppState;
