//! Builder roster fetches.

use crate::db::Database;
use crate::error::AppError;
use crate::model::{decode_rows, Builder};
use crate::service::FetchOptions;
use crate::sql::{self, Query};

pub struct BuilderService;

impl BuilderService {
    /// Builders with at least one active listing.
    pub async fn all(db: &Database, opts: &FetchOptions) -> Result<Vec<Builder>, AppError> {
        Self::fetch(db, opts, &sql::builders_with_active_listings(false)).await
    }

    /// Paid builders with at least one active listing.
    pub async fn featured(db: &Database, opts: &FetchOptions) -> Result<Vec<Builder>, AppError> {
        Self::fetch(db, opts, &sql::builders_with_active_listings(true)).await
    }

    pub async fn by_id(db: &Database, opts: &FetchOptions, id: i64) -> Result<Option<Builder>, AppError> {
        let builders = Self::fetch(db, opts, &sql::builder_by_id(id)).await?;
        Ok(builders.into_iter().next())
    }

    async fn fetch(db: &Database, opts: &FetchOptions, q: &Query) -> Result<Vec<Builder>, AppError> {
        let view = db.perform_query(&q.sql).await?;
        decode_rows(&view, &q.columns, opts.row_policy, "builder", Builder::from_row)
    }
}
