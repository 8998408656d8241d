//! Load config from a property-list file named on the command line.

use crate::config::types::*;
use crate::error::ConfigError;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "homz-api", version, about = "Listings and builders REST API")]
pub struct Cli {
    /// Property-list config file, absolute or relative to the working directory.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse process arguments, accepting the legacy single-dash `-config` spelling.
    pub fn from_env() -> Self {
        Self::parse_from(normalize_args(std::env::args()))
    }
}

/// Rewrite `-config` to `--config`; everything else passes through untouched.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|a| if a == "-config" { "--config".to_string() } else { a })
        .collect()
}

/// Absolute paths are used as given; relative ones are joined to `cwd`.
pub fn resolve_path(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Read and validate the config file at `path` (relative to the current directory).
pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let cwd = std::env::current_dir().map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let full = resolve_path(path, &cwd);
    tracing::info!(path = %full.display(), "reading config file");
    let raw: RawConfig = plist::from_file(&full).map_err(|e| ConfigError::Read {
        path: full.display().to_string(),
        message: e.to_string(),
    })?;
    AppConfig::from_raw(raw)
}

/// Parse config from in-memory plist bytes (XML or binary).
pub fn load_from_bytes(bytes: &[u8]) -> Result<AppConfig, ConfigError> {
    let raw: RawConfig = plist::from_bytes(bytes).map_err(|e| ConfigError::Read {
        path: "<memory>".into(),
        message: e.to_string(),
    })?;
    AppConfig::from_raw(raw)
}

impl AppConfig {
    pub fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let database = DatabaseConfig {
            host: required(raw.db_host, "db_host")?,
            port: parse_port(raw.db_port.as_ref(), "db_port")?
                .ok_or(ConfigError::Missing("db_port"))?,
            username: required(raw.db_username, "db_username")?,
            password: required(raw.db_password, "db_password")?,
            name: required(raw.db_name, "db_name")?,
        };
        let server = ServerConfig {
            hostname: raw
                .hostname
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string()),
            port: parse_port(raw.port.as_ref(), "port")?.unwrap_or(DEFAULT_PORT),
        };
        let row_policy = if raw.skip_undecodable_rows.unwrap_or(true) {
            RowPolicy::Skip
        } else {
            RowPolicy::Fail
        };
        let image_timeout_ms = match &raw.image_timeout_ms {
            Some(v) => parse_number::<u64>(v, "image_timeout_ms")?,
            None => DEFAULT_IMAGE_TIMEOUT_MS,
        };
        let max_body_bytes = match &raw.max_body_bytes {
            Some(v) => parse_number::<usize>(v, "max_body_bytes")?,
            None => DEFAULT_MAX_BODY_BYTES,
        };
        Ok(AppConfig {
            database,
            server,
            row_policy,
            image_timeout: Duration::from_millis(image_timeout_ms),
            max_body_bytes,
        })
    }
}

fn required(value: Option<String>, key: &'static str) -> Result<String, ConfigError> {
    value.ok_or(ConfigError::Missing(key))
}

fn parse_port(value: Option<&PlistScalar>, key: &'static str) -> Result<Option<u16>, ConfigError> {
    value.map(|v| parse_number::<u16>(v, key)).transpose()
}

fn parse_number<T: std::str::FromStr>(value: &PlistScalar, key: &'static str) -> Result<T, ConfigError> {
    let text = value.as_text();
    text.parse().map_err(|_| ConfigError::Invalid { key, value: text })
}
