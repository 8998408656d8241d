//! Single-connection gateway. Every statement runs send-then-fetch under one lock.

use crate::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Result set as returned by the text protocol: ordered rows of nullable strings.
pub type SqlView = Vec<Vec<Option<String>>>;

/// One physical database connection.
#[async_trait]
pub trait Connection: Send {
    /// Run a statement and collect every row before returning.
    async fn query(&mut self, statement: &str) -> Result<SqlView, AppError>;

    /// Store an information request.
    async fn insert_request(&mut self, timestamp: i64, data: &str) -> Result<(), AppError>;
}

/// Shared handle over one connection. Clones share the connection and its lock.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Box<dyn Connection>>>,
}

impl Database {
    pub fn new<C: Connection + 'static>(conn: C) -> Self {
        Database {
            conn: Arc::new(Mutex::new(Box::new(conn))),
        }
    }

    pub async fn perform_query(&self, statement: &str) -> Result<SqlView, AppError> {
        tracing::debug!(sql = %statement, "query");
        let mut conn = self.conn.lock().await;
        let view = conn.query(statement).await;
        drop(conn);
        log_outcome(statement, &view);
        view
    }

    /// Like `perform_query`, but the statement must finish within `deadline`. The clock starts
    /// once the connection is held, so time spent queued behind other statements does not count.
    pub async fn perform_query_within(&self, statement: &str, deadline: Duration) -> Result<SqlView, AppError> {
        tracing::debug!(sql = %statement, ?deadline, "query");
        let mut conn = self.conn.lock().await;
        let view = match tokio::time::timeout(deadline, conn.query(statement)).await {
            Ok(view) => view,
            Err(_) => Err(AppError::Timeout(format!("statement ran longer than {:?}", deadline))),
        };
        drop(conn);
        log_outcome(statement, &view);
        view
    }

    pub async fn insert_request(&self, timestamp: i64, data: &str) -> Result<(), AppError> {
        tracing::debug!(ts = timestamp, bytes = data.len(), "insert request");
        let mut conn = self.conn.lock().await;
        conn.insert_request(timestamp, data).await
    }

    /// Readiness check.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.perform_query("SELECT 1").await.map(|_| ())
    }
}

fn log_outcome(statement: &str, view: &Result<SqlView, AppError>) {
    match view {
        Ok(rows) => tracing::debug!(rows = rows.len(), "query done"),
        Err(e) => tracing::error!(error = %e, sql = %statement, "query failed"),
    }
}
