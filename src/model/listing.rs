//! Listings and the joined-row decoder.

use crate::config::RowPolicy;
use crate::db::SqlView;
use crate::error::AppError;
use crate::model::builder::Builder;
use crate::model::image::Image;
use crate::model::row::{reject_row, RowMap};
use crate::sql::{ColumnSet, ListingQuery, ListingView};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

pub const DEFAULT_PRICE_TEXT: &str = "From the";

/// Ordinal stored in the `active` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListingStatus {
    Inactive,
    Active,
    Featured,
}

impl ListingStatus {
    pub fn from_ordinal(n: i64) -> Option<Self> {
        match n {
            0 => Some(ListingStatus::Inactive),
            1 => Some(ListingStatus::Active),
            2 => Some(ListingStatus::Featured),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NumberRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    pub name: String,
    #[serde(rename = "builderID")]
    pub builder_id: i64,
    pub status: ListingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured_photo: Option<String>,
    pub coordinate: Coordinate,
    pub price_text: String,
    pub price: NumberRange,
    pub square_footage: NumberRange,
    pub bedrooms: NumberRange,
    pub bathrooms: NumberRange,

    /// Projection this listing was decoded from.
    #[serde(skip)]
    pub view: ListingView,
    /// Resolved from the joined builder columns; published through the resource layer.
    #[serde(skip)]
    pub builder: Option<Arc<Builder>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<Image>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floorplans: Option<Vec<Image>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_district_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

fn range(row: &RowMap<'_>, low: &str, high: &str) -> Option<NumberRange> {
    Some(NumberRange {
        min: row.float(low)?,
        max: row.float(high)?,
    })
}

impl Listing {
    pub fn from_row(row: &RowMap<'_>, view: ListingView) -> Option<Self> {
        match view {
            ListingView::Sparse => Self::from_sparse_row(row),
            ListingView::Detailed => Self::from_detail_row(row),
        }
    }

    /// Identity, location, status and the four ranges are required.
    pub fn from_sparse_row(row: &RowMap<'_>) -> Option<Self> {
        let id = row.int("id")?;
        let builder_id = row.int("builderID")?;
        let name = row.string("listing")?;
        let coordinate = Coordinate {
            latitude: row.float("lat")?,
            longitude: row.float("lng")?,
        };
        let price = range(row, "priceLow", "priceHigh")?;
        let square_footage = range(row, "sqftLow", "sqftHigh")?;
        let bedrooms = range(row, "bedLow", "bedHigh")?;
        let bathrooms = range(row, "bathLow", "bathHigh")?;
        let status = ListingStatus::from_ordinal(row.int("active")?)?;
        let price_text = row
            .text("priceTxt")
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_PRICE_TEXT)
            .to_string();

        Some(Listing {
            id,
            name,
            builder_id,
            status,
            featured_photo: row.url("photo"),
            coordinate,
            price_text,
            price,
            square_footage,
            bedrooms,
            bathrooms,
            view: ListingView::Sparse,
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
        })
    }

    /// Sparse fields plus the optional detail fields.
    pub fn from_detail_row(row: &RowMap<'_>) -> Option<Self> {
        let mut listing = Self::from_sparse_row(row)?;
        listing.view = ListingView::Detailed;
        listing.property_type = row.string("propType");
        listing.description = row.string("description");
        listing.email = row.string("email");
        listing.website = row.url("website");
        listing.phone = row.string("phone");
        listing.video = row.url("vid");
        listing.school_district_name = row.string("schoolDistrictName");
        listing.city = row.string("city");
        listing.county = row.string("county");
        listing.state = row.string("state");
        listing.zip = row.string("zip");
        Some(listing)
    }
}

/// Builder sub-rows seen in one result set, keyed by builder id. Each distinct id decodes once.
#[derive(Default)]
pub struct BuilderCache {
    entries: HashMap<i64, Option<Arc<Builder>>>,
    decoded: usize,
}

impl BuilderCache {
    pub fn resolve(&mut self, columns: &ColumnSet, sub_row: &[Option<String>]) -> Result<Option<Arc<Builder>>, AppError> {
        let key = sub_row
            .first()
            .and_then(|v| v.as_deref())
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(-1);
        if let Some(hit) = self.entries.get(&key) {
            return Ok(hit.clone());
        }
        let map = RowMap::combine(columns, sub_row)?;
        let builder = Builder::from_row(&map).map(Arc::new);
        self.decoded += 1;
        self.entries.insert(key, builder.clone());
        Ok(builder)
    }

    /// Number of builder sub-rows actually decoded.
    pub fn decoded(&self) -> usize {
        self.decoded
    }
}

/// Decode the rows of `query`. Joined rows are split at the listing width; the tail is the builder.
pub fn decode_listings(view: &SqlView, query: &ListingQuery, policy: RowPolicy) -> Result<Vec<Listing>, AppError> {
    let mut cache = BuilderCache::default();
    decode_listings_with(view, query, policy, &mut cache)
}

pub fn decode_listings_with(
    view: &SqlView,
    query: &ListingQuery,
    policy: RowPolicy,
    cache: &mut BuilderCache,
) -> Result<Vec<Listing>, AppError> {
    let width = query.row_width();
    let split = query.listing.len();
    let mut listings = Vec::with_capacity(view.len());
    for (index, row) in view.iter().enumerate() {
        if row.len() != width {
            return Err(AppError::Decode(format!(
                "listing row {} has {} values, expected {}",
                index,
                row.len(),
                width
            )));
        }
        let (head, tail) = row.split_at(split);
        let map = RowMap::combine(&query.listing, head)?;
        let Some(mut listing) = Listing::from_row(&map, query.view) else {
            reject_row(policy, "listing", index)?;
            continue;
        };
        if let Some(builder_cols) = &query.builder {
            listing.builder = cache.resolve(builder_cols, tail)?;
        }
        listings.push(listing);
    }
    Ok(listings)
}
