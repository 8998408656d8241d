//! Gallery and floorplan lookups.

use crate::db::Database;
use crate::error::AppError;
use crate::model::{decode_rows, Image, ImageKind};
use crate::service::FetchOptions;
use crate::sql::{images_for_listing, images_for_listings};
use std::collections::HashMap;

pub struct ImageService;

impl ImageService {
    /// Images of `kind` for one listing.
    pub async fn for_listing(
        db: &Database,
        opts: &FetchOptions,
        listing_id: i64,
        kind: ImageKind,
    ) -> Result<Vec<Image>, AppError> {
        let q = images_for_listing(listing_id, kind);
        let view = db.perform_query(&q.sql).await?;
        decode_rows(&view, &q.columns, opts.row_policy, kind.collection(), Image::from_row)
    }

    /// Images of `kind` for a batch of listings in one query, partitioned by listing id.
    /// Listings without images have no entry. The statement gets `opts.image_timeout` once it
    /// holds the connection.
    pub async fn for_listings(
        db: &Database,
        opts: &FetchOptions,
        listing_ids: &[i64],
        kind: ImageKind,
    ) -> Result<HashMap<i64, Vec<Image>>, AppError> {
        let Some(q) = images_for_listings(listing_ids, kind) else {
            return Ok(HashMap::new());
        };
        let view = db.perform_query_within(&q.sql, opts.image_timeout).await?;
        let images = decode_rows(&view, &q.columns, opts.row_policy, kind.collection(), Image::from_row)?;
        let mut by_listing: HashMap<i64, Vec<Image>> = HashMap::new();
        for image in images {
            by_listing.entry(image.listing_id).or_default().push(image);
        }
        Ok(by_listing)
    }
}
