//! Detail enrichment: gallery and floorplan lookups run concurrently, each under its own
//! statement deadline, and a failed branch degrades to empty collections instead of failing
//! the request.

use crate::db::Database;
use crate::error::AppError;
use crate::model::{Image, ImageKind, Listing};
use crate::service::{FetchOptions, ImageService};
use std::collections::HashMap;

/// Outcome of the fan-out. `failed` names every branch that errored or timed out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Enrichment {
    pub failed: Vec<ImageKind>,
}

impl Enrichment {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

fn settle(
    kind: ImageKind,
    result: Result<HashMap<i64, Vec<Image>>, AppError>,
    failed: &mut Vec<ImageKind>,
) -> HashMap<i64, Vec<Image>> {
    match result {
        Ok(images) => images,
        Err(e) => {
            tracing::warn!(kind = %kind, error = %e, "image lookup failed; returning no images");
            failed.push(kind);
            HashMap::new()
        }
    }
}

/// Attach gallery and floorplan images to every listing. Both lookups are keyed by the full id
/// set and both must finish (or hit their deadline) before this returns. A stalled branch only
/// costs the other one its wait for the connection.
pub async fn enrich_with_images(db: &Database, opts: &FetchOptions, listings: &mut [Listing]) -> Enrichment {
    let ids: Vec<i64> = listings.iter().map(|l| l.id).collect();
    let (gallery, floorplans) = tokio::join!(
        ImageService::for_listings(db, opts, &ids, ImageKind::Gallery),
        ImageService::for_listings(db, opts, &ids, ImageKind::Floorplan),
    );

    let mut failed = Vec::new();
    let mut gallery = settle(ImageKind::Gallery, gallery, &mut failed);
    let mut floorplans = settle(ImageKind::Floorplan, floorplans, &mut failed);
    for listing in listings.iter_mut() {
        listing.gallery = Some(gallery.remove(&listing.id).unwrap_or_default());
        listing.floorplans = Some(floorplans.remove(&listing.id).unwrap_or_default());
    }
    Enrichment { failed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Connection, SqlView};
    use crate::model::{Coordinate, ListingStatus, NumberRange};
    use crate::sql::ListingView;
    use async_trait::async_trait;
    use std::time::{Duration, Instant};

    /// Gallery table misbehaves per `gallery`; floorplans always answer.
    struct Images {
        gallery: GalleryMode,
    }

    enum GalleryMode {
        Fail,
        Hang,
    }

    #[async_trait]
    impl Connection for Images {
        async fn query(&mut self, statement: &str) -> Result<SqlView, AppError> {
            if statement.contains("FROM gallery") {
                return match self.gallery {
                    GalleryMode::Fail => Err(AppError::Query("table gallery is marked as crashed".into())),
                    GalleryMode::Hang => {
                        tokio::time::sleep(Duration::from_secs(30)).await;
                        Ok(Vec::new())
                    }
                };
            }
            Ok(vec![
                vec![Some("https://cdn.test/f1.png".into()), Some("Plan A".into()), Some("1".into()), Some("7".into())],
                vec![Some("https://cdn.test/f2.png".into()), None, Some("2".into()), Some("7".into())],
            ])
        }

        async fn insert_request(&mut self, _timestamp: i64, _data: &str) -> Result<(), AppError> {
            Ok(())
        }
    }

    fn listing(id: i64) -> Listing {
        let r = NumberRange { min: 0.0, max: 1.0 };
        Listing {
            id,
            name: format!("L{}", id),
            builder_id: 1,
            status: ListingStatus::Active,
            featured_photo: None,
            coordinate: Coordinate { latitude: 0.0, longitude: 0.0 },
            price_text: "From the".into(),
            price: r,
            square_footage: r,
            bedrooms: r,
            bathrooms: r,
            view: ListingView::Detailed,
            builder: None,
            gallery: None,
            floorplans: None,
            description: None,
            school_district_name: None,
            property_type: None,
            email: None,
            phone: None,
            city: None,
            county: None,
            state: None,
            zip: None,
            website: None,
            video: None,
        }
    }

    #[tokio::test]
    async fn failed_branch_is_reported_and_left_empty() {
        let db = Database::new(Images { gallery: GalleryMode::Fail });
        let mut listings = vec![listing(7), listing(8)];
        let enrichment = enrich_with_images(&db, &FetchOptions::default(), &mut listings).await;

        assert_eq!(enrichment.failed, vec![ImageKind::Gallery]);
        assert!(!enrichment.is_complete());
        assert_eq!(listings[0].gallery, Some(Vec::new()));
        let plans = listings[0].floorplans.as_ref().unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].caption, "Plan A");
        assert_eq!(listings[1].floorplans, Some(Vec::new()));
    }

    #[tokio::test]
    async fn stalled_gallery_does_not_starve_floorplans() {
        let db = Database::new(Images { gallery: GalleryMode::Hang });
        let opts = FetchOptions {
            image_timeout: Duration::from_millis(100),
            ..FetchOptions::default()
        };
        let mut listings = vec![listing(7)];
        let started = Instant::now();
        let enrichment = enrich_with_images(&db, &opts, &mut listings).await;

        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(enrichment.failed, vec![ImageKind::Gallery]);
        assert_eq!(listings[0].gallery, Some(Vec::new()));
        assert_eq!(listings[0].floorplans.as_ref().map(Vec::len), Some(2));
    }
}
