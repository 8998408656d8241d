//! Declared column sets. Query builders select exactly these columns, in this order,
//! and row mappers decode with the same set, so the two cannot drift apart.

/// Listing columns every projection carries.
pub const LISTING_SPARSE: &[&str] = &[
    "id", "listing", "photo", "active", "lat", "lng", "builderID", "priceTxt", "priceLow", "priceHigh",
    "sqftLow", "sqftHigh", "bedLow", "bedHigh", "bathLow", "bathHigh",
];

/// Extra listing columns for the single-item view.
pub const LISTING_DETAIL: &[&str] = &[
    "propType", "city", "county", "state", "zip", "description", "email", "website", "phone", "vid",
    "schoolDistrictName",
];

pub const BUILDER: &[&str] = &[
    "id", "builder", "phone", "fax", "email", "paid", "photo", "website", "ads_enabled",
];

/// Computed per-builder count of active listings, appended after `BUILDER`.
pub const BUILDER_ACTIVE_COUNT: &str = "activeListingCount";

pub const IMAGE: &[&str] = &["photo", "caption", "showOrder", "cID"];

/// Which listing columns a query selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingView {
    /// Map and list views.
    Sparse,
    /// Single-item view with description, address and media fields.
    Detailed,
}

/// Ordered column names. Position `i` of a row holds column `names()[i]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSet {
    names: Vec<&'static str>,
}

impl ColumnSet {
    pub fn new(parts: &[&[&'static str]]) -> Self {
        ColumnSet {
            names: parts.iter().flat_map(|p| p.iter().copied()).collect(),
        }
    }

    pub fn listing(view: ListingView) -> Self {
        match view {
            ListingView::Sparse => Self::new(&[LISTING_SPARSE]),
            ListingView::Detailed => Self::new(&[LISTING_SPARSE, LISTING_DETAIL]),
        }
    }

    pub fn builder() -> Self {
        Self::new(&[BUILDER])
    }

    pub fn builder_with_count() -> Self {
        Self::new(&[BUILDER, &[BUILDER_ACTIVE_COUNT]])
    }

    pub fn image() -> Self {
        Self::new(&[IMAGE])
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| *n == name)
    }

    /// `table.col` for each column.
    pub fn qualified(&self, table: &str) -> Vec<String> {
        self.names.iter().map(|c| format!("{}.{}", table, c)).collect()
    }

    /// `table.col as prefix_col` for each column, so joined names stay unambiguous.
    pub fn aliased(&self, table: &str, prefix: &str) -> Vec<String> {
        self.names
            .iter()
            .map(|c| format!("{}.{} as {}_{}", table, c, prefix, c))
            .collect()
    }
}
