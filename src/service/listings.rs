//! Listing fetches and the information-request insert.

use crate::db::Database;
use crate::error::AppError;
use crate::model::{decode_listings, Listing, MapRegion};
use crate::service::enrich::{enrich_with_images, Enrichment};
use crate::service::FetchOptions;
use crate::sql::{self, ListingQuery, ListingView};

/// Single-listing fetch: the listing if one matched, plus how the image fan-out went.
#[derive(Debug)]
pub struct ListingDetail {
    pub listing: Option<Listing>,
    pub enrichment: Enrichment,
}

pub struct ListingService;

impl ListingService {
    /// Sparse active listings inside `region`, with builders, without images.
    pub async fn find_in_region(
        db: &Database,
        opts: &FetchOptions,
        region: &MapRegion,
    ) -> Result<Vec<Listing>, AppError> {
        tracing::debug!(region = %region, "map search");
        let q = sql::listings_in_region(region, ListingView::Sparse);
        Self::fetch(db, opts, &q).await
    }

    /// Sparse featured listings, with builders, without images.
    pub async fn featured(db: &Database, opts: &FetchOptions) -> Result<Vec<Listing>, AppError> {
        let q = sql::featured_listings(ListingView::Sparse);
        Self::fetch(db, opts, &q).await
    }

    /// Detailed listing with builder, gallery and floorplans.
    pub async fn by_id(db: &Database, opts: &FetchOptions, id: i64) -> Result<ListingDetail, AppError> {
        let q = sql::listing_by_id(id);
        let mut listings = Self::fetch(db, opts, &q).await?;
        let enrichment = if listings.is_empty() {
            Enrichment::default()
        } else {
            enrich_with_images(db, opts, &mut listings).await
        };
        Ok(ListingDetail {
            listing: listings.into_iter().next(),
            enrichment,
        })
    }

    /// A builder's active listings (detailed columns, no builder join, no images).
    pub async fn for_builder(db: &Database, opts: &FetchOptions, builder_id: i64) -> Result<Vec<Listing>, AppError> {
        let q = sql::listings_for_builder(builder_id);
        Self::fetch(db, opts, &q).await
    }

    /// Store a free-form information request. The payload is kept verbatim inside `[` `]`,
    /// the shape older consumers of the requests table expect.
    pub async fn request_info(db: &Database, listing_id: i64, payload: &str) -> Result<(), AppError> {
        let timestamp = chrono::Utc::now().timestamp();
        let data = format!("[{}]", payload);
        db.insert_request(timestamp, &data).await?;
        tracing::info!(listing_id, ts = timestamp, "information request stored");
        Ok(())
    }

    async fn fetch(db: &Database, opts: &FetchOptions, q: &ListingQuery) -> Result<Vec<Listing>, AppError> {
        let view = db.perform_query(&q.sql).await?;
        decode_listings(&view, q, opts.row_policy)
    }
}
