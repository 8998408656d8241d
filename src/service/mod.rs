//! Domain fetches over the database gateway.

mod builders;
pub mod enrich;
mod images;
mod listings;

pub use builders::BuilderService;
pub use enrich::{enrich_with_images, Enrichment};
pub use images::ImageService;
pub use listings::{ListingDetail, ListingService};

use crate::config::{AppConfig, RowPolicy, DEFAULT_IMAGE_TIMEOUT_MS};
use std::time::Duration;

/// Per-request decode and fan-out settings.
#[derive(Clone, Copy, Debug)]
pub struct FetchOptions {
    pub row_policy: RowPolicy,
    pub image_timeout: Duration,
}

impl FetchOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        FetchOptions {
            row_policy: config.row_policy,
            image_timeout: config.image_timeout,
        }
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions {
            row_policy: RowPolicy::Skip,
            image_timeout: Duration::from_millis(DEFAULT_IMAGE_TIMEOUT_MS),
        }
    }
}
