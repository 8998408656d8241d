//! MySQL connection used by the gateway.

use crate::config::DatabaseConfig;
use crate::db::gateway::{Connection, Database, SqlView};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::Row;

/// A pool capped at one connection. The pool replaces the connection after the server drops it;
/// the gateway lock still serializes every statement on it.
pub struct MySqlCatalog {
    pool: MySqlPool,
}

impl MySqlCatalog {
    pub fn new(pool: MySqlPool) -> Self {
        MySqlCatalog { pool }
    }
}

/// Open the connection the server shares between all requests.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, AppError> {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.username)
        .password(&config.password)
        .database(&config.name);
    let pool = MySqlPoolOptions::new()
        .max_connections(1)
        .test_before_acquire(true)
        .connect_with(options)
        .await
        .map_err(|e| {
            tracing::error!(host = %config.host, db = %config.name, error = %e, "unable to connect to database");
            e
        })?;
    tracing::info!(host = %config.host, port = config.port, db = %config.name, "connected to database");
    Ok(Database::new(MySqlCatalog::new(pool)))
}

#[async_trait]
impl Connection for MySqlCatalog {
    async fn query(&mut self, statement: &str) -> Result<SqlView, AppError> {
        // Unprepared statements come back over the text protocol, so any column reads as a string.
        let rows: Vec<MySqlRow> = sqlx::raw_sql(statement).fetch_all(&self.pool).await?;
        rows.iter().map(row_to_text).collect()
    }

    async fn insert_request(&mut self, timestamp: i64, data: &str) -> Result<(), AppError> {
        sqlx::query("INSERT INTO requests (ts, data) VALUES (?, ?)")
            .bind(timestamp)
            .bind(data)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

fn row_to_text(row: &MySqlRow) -> Result<Vec<Option<String>>, AppError> {
    (0..row.len())
        .map(|i| row.try_get_unchecked::<Option<String>, _>(i).map_err(AppError::from))
        .collect()
}
