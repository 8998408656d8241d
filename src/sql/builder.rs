//! Builds SELECT statements for each access pattern. Values interpolated here are typed
//! numbers only; free text never reaches these builders.

use crate::model::{ImageKind, MapRegion};
use crate::sql::schema::{ColumnSet, ListingView, BUILDER_ACTIVE_COUNT};

const LISTINGS: &str = "listings";
const BUILDERS: &str = "builders";

/// Statement plus the column set its rows decode with.
#[derive(Clone, Debug)]
pub struct Query {
    pub sql: String,
    pub columns: ColumnSet,
}

/// Listing statement. Rows hold `listing` columns, then `builder` columns when joined.
#[derive(Clone, Debug)]
pub struct ListingQuery {
    pub sql: String,
    pub view: ListingView,
    pub listing: ColumnSet,
    pub builder: Option<ColumnSet>,
}

impl ListingQuery {
    pub fn row_width(&self) -> usize {
        self.listing.len() + self.builder.as_ref().map(ColumnSet::len).unwrap_or(0)
    }
}

fn joined_listing_select(view: ListingView, where_clause: &str) -> ListingQuery {
    let listing = ColumnSet::listing(view);
    let builder = ColumnSet::builder();
    let mut cols = listing.qualified(LISTINGS);
    cols.extend(builder.aliased(BUILDERS, BUILDERS));
    let sql = format!(
        "SELECT {} FROM {} LEFT JOIN {} ON {}.id = {}.builderID WHERE {} ORDER BY {}.id",
        cols.join(","),
        LISTINGS,
        BUILDERS,
        BUILDERS,
        LISTINGS,
        where_clause,
        LISTINGS
    );
    ListingQuery {
        sql,
        view,
        listing,
        builder: Some(builder),
    }
}

/// Active listings whose coordinate lies inside `region` (bounds inclusive), joined with their builder.
pub fn listings_in_region(region: &MapRegion, view: ListingView) -> ListingQuery {
    let where_clause = format!(
        "{t}.active > 0 AND (({t}.lat BETWEEN {} AND {}) AND ({t}.lng BETWEEN {} AND {}))",
        region.latitude_begin,
        region.latitude_end,
        region.longitude_begin,
        region.longitude_end,
        t = LISTINGS
    );
    joined_listing_select(view, &where_clause)
}

pub fn listing_by_id(id: i64) -> ListingQuery {
    joined_listing_select(ListingView::Detailed, &format!("{}.id = {}", LISTINGS, id))
}

/// Listings promoted above plain active (`active > 1`).
pub fn featured_listings(view: ListingView) -> ListingQuery {
    joined_listing_select(view, &format!("{}.active > 1", LISTINGS))
}

/// A builder's active listings, without the builder join.
pub fn listings_for_builder(builder_id: i64) -> ListingQuery {
    let listing = ColumnSet::listing(ListingView::Detailed);
    let sql = format!(
        "SELECT {} FROM {t} WHERE {t}.builderID = {} AND {t}.active > 0 ORDER BY {t}.id",
        listing.qualified(LISTINGS).join(","),
        builder_id,
        t = LISTINGS
    );
    ListingQuery {
        sql,
        view: ListingView::Detailed,
        listing,
        builder: None,
    }
}

pub fn builder_by_id(id: i64) -> Query {
    let columns = ColumnSet::builder_with_count();
    let sql = format!(
        "SELECT {}, (SELECT COUNT(1) FROM {l} WHERE {l}.builderID = {b}.id AND {l}.active > 0) AS {} FROM {b} WHERE {b}.id = {}",
        ColumnSet::builder().qualified(BUILDERS).join(","),
        BUILDER_ACTIVE_COUNT,
        id,
        l = LISTINGS,
        b = BUILDERS
    );
    Query { sql, columns }
}

/// Builders with at least one active listing; `paid_only` narrows to featured builders.
pub fn builders_with_active_listings(paid_only: bool) -> Query {
    let columns = ColumnSet::builder_with_count();
    let mut cols: Vec<String> = ColumnSet::builder()
        .names()
        .iter()
        .map(|c| format!("{b}.{c} as {c}", b = BUILDERS, c = c))
        .collect();
    cols.push(format!("count(distinct l.id) as {}", BUILDER_ACTIVE_COUNT));
    let paid = if paid_only {
        format!(" AND {}.paid = 1", BUILDERS)
    } else {
        String::new()
    };
    let sql = format!(
        "SELECT {} FROM {b} INNER JOIN {} l ON {b}.id = l.builderID WHERE l.active > 0{} GROUP BY {b}.id ORDER BY {b}.id",
        cols.join(","),
        LISTINGS,
        paid,
        b = BUILDERS
    );
    Query { sql, columns }
}

/// Images of `kind` for every listing in `listing_ids`. Returns `None` for an empty id set.
pub fn images_for_listings(listing_ids: &[i64], kind: ImageKind) -> Option<Query> {
    if listing_ids.is_empty() {
        return None;
    }
    let columns = ColumnSet::image();
    let ids = listing_ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",");
    let sql = format!(
        "SELECT {} FROM {} WHERE cID IN ({}) ORDER BY cID, showOrder",
        columns.names().join(","),
        kind.table(),
        ids
    );
    Some(Query { sql, columns })
}

pub fn images_for_listing(listing_id: i64, kind: ImageKind) -> Query {
    let columns = ColumnSet::image();
    let sql = format!(
        "SELECT {} FROM {} WHERE cID = {} ORDER BY showOrder",
        columns.names().join(","),
        kind.table(),
        listing_id
    );
    Query { sql, columns }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_query_bounds_are_inclusive_and_active_only() {
        let region = MapRegion::new(10.0, 20.0, -5.0, 5.0);
        let q = listings_in_region(&region, ListingView::Sparse);
        assert!(q.sql.contains("listings.active > 0"));
        assert!(q.sql.contains("(listings.lat BETWEEN 10 AND 20)"));
        assert!(q.sql.contains("(listings.lng BETWEEN -5 AND 5)"));
        assert!(q.sql.contains("LEFT JOIN builders ON builders.id = listings.builderID"));
        assert_eq!(q.row_width(), 16 + 9);
    }

    #[test]
    fn select_list_follows_declared_order() {
        let q = listing_by_id(42);
        let select = q.sql.trim_start_matches("SELECT ").split(" FROM ").next().unwrap();
        let cols: Vec<&str> = select.split(',').collect();
        assert_eq!(cols.len(), q.row_width());
        for (i, name) in q.listing.names().iter().enumerate() {
            assert_eq!(cols[i], format!("listings.{}", name));
        }
        assert_eq!(cols[q.listing.len()], "builders.id as builders_id");
        assert!(q.sql.contains("WHERE listings.id = 42"));
    }

    #[test]
    fn builder_listings_are_not_joined() {
        let q = listings_for_builder(7);
        assert!(q.builder.is_none());
        assert!(!q.sql.contains("JOIN"));
        assert!(q.sql.contains("listings.builderID = 7 AND listings.active > 0"));
    }

    #[test]
    fn featured_builders_filter_on_paid() {
        let all = builders_with_active_listings(false);
        let featured = builders_with_active_listings(true);
        assert!(!all.sql.contains("paid = 1"));
        assert!(featured.sql.contains("builders.paid = 1"));
        assert!(featured.sql.contains("count(distinct l.id) as activeListingCount"));
        assert!(featured.sql.contains("GROUP BY builders.id"));
    }

    #[test]
    fn image_batch_uses_in_list_and_skips_empty() {
        let q = images_for_listings(&[3, 5, 8], ImageKind::Floorplan).unwrap();
        assert!(q.sql.starts_with("SELECT photo,caption,showOrder,cID FROM floorplans"));
        assert!(q.sql.contains("cID IN (3,5,8)"));
        assert!(images_for_listings(&[], ImageKind::Gallery).is_none());
        assert!(images_for_listing(3, ImageKind::Gallery).sql.contains("FROM gallery WHERE cID = 3"));
    }
}
