//! Config types: the raw property-list shape and the validated runtime config.

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_HOSTNAME: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8181;
pub const DEFAULT_IMAGE_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// A plist scalar that older config files write as a string and newer ones as an integer.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum PlistScalar {
    Int(i64),
    Text(String),
}

impl PlistScalar {
    pub fn as_text(&self) -> String {
        match self {
            PlistScalar::Int(n) => n.to_string(),
            PlistScalar::Text(s) => s.trim().to_string(),
        }
    }
}

/// Keys as they appear in the property list. Everything optional; validation happens in `AppConfig::from_raw`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawConfig {
    #[serde(default)]
    pub db_host: Option<String>,
    #[serde(default)]
    pub db_port: Option<PlistScalar>,
    #[serde(default)]
    pub db_username: Option<String>,
    #[serde(default)]
    pub db_password: Option<String>,
    #[serde(default)]
    pub db_name: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(default)]
    pub port: Option<PlistScalar>,
    #[serde(default)]
    pub skip_undecodable_rows: Option<bool>,
    #[serde(default)]
    pub image_timeout_ms: Option<PlistScalar>,
    #[serde(default)]
    pub max_body_bytes: Option<PlistScalar>,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub hostname: String,
    pub port: u16,
}

impl ServerConfig {
    /// Public origin used for hypermedia links, e.g. `http://api.example.com:8181`.
    pub fn origin(&self) -> String {
        format!("http://{}:{}", self.hostname, self.port)
    }
}

/// What to do with a row that fails to decode inside an otherwise good result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowPolicy {
    /// Drop the row and keep going.
    Skip,
    /// Fail the whole batch.
    Fail,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub row_policy: RowPolicy,
    /// Deadline for each branch of the gallery/floorplan fan-out.
    pub image_timeout: Duration,
    pub max_body_bytes: usize,
}
