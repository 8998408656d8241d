//! Home builders.

use crate::model::row::RowMap;
use crate::sql::schema::BUILDER_ACTIVE_COUNT;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Builder {
    pub id: i64,
    pub name: String,
    pub logo: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub fax: Option<String>,
    pub email: Option<String>,
    pub paid: bool,
    pub ads_enabled: bool,
    #[serde(rename = "activeListingCount", skip_serializing_if = "Option::is_none")]
    pub active_listing_count: Option<i64>,
}

impl Builder {
    /// `id` and `builder` (the name) are required.
    pub fn from_row(row: &RowMap<'_>) -> Option<Self> {
        let id = row.int("id")?;
        let name = row.string("builder")?;
        Some(Builder {
            id,
            name,
            logo: row.url("photo"),
            website: row.url("website"),
            phone: row.string("phone"),
            fax: row.string("fax"),
            email: row.string("email"),
            paid: row.flag("paid"),
            ads_enabled: row.flag("ads_enabled"),
            active_listing_count: row.int(BUILDER_ACTIVE_COUNT),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::ColumnSet;

    fn raw(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn decodes_full_row() {
        let cols = ColumnSet::builder_with_count();
        let row = raw(&[
            Some("3"),
            Some("Acme Homes"),
            Some("555-0100"),
            None,
            Some("sales@acme.test"),
            Some("1"),
            Some("https://acme.test/logo.png"),
            Some("https://acme.test"),
            Some("0"),
            Some("12"),
        ]);
        let b = Builder::from_row(&RowMap::combine(&cols, &row).unwrap()).unwrap();
        assert_eq!(b.id, 3);
        assert_eq!(b.name, "Acme Homes");
        assert_eq!(b.phone.as_deref(), Some("555-0100"));
        assert_eq!(b.fax, None);
        assert!(b.paid);
        assert!(!b.ads_enabled);
        assert_eq!(b.logo.unwrap().as_str(), "https://acme.test/logo.png");
        assert_eq!(b.active_listing_count, Some(12));
    }

    #[test]
    fn missing_name_is_absent() {
        let cols = ColumnSet::builder();
        let mut row = raw(&[Some("3"); 9]);
        row[1] = None;
        assert!(Builder::from_row(&RowMap::combine(&cols, &row).unwrap()).is_none());
    }

    #[test]
    fn count_is_omitted_when_not_selected() {
        let cols = ColumnSet::builder();
        let row = raw(&[Some("3"), Some("Acme"), None, None, None, None, None, None, None]);
        let b = Builder::from_row(&RowMap::combine(&cols, &row).unwrap()).unwrap();
        let json = serde_json::to_value(&b).unwrap();
        assert!(json.get("activeListingCount").is_none());
        assert_eq!(json["ads_enabled"], false);
        assert_eq!(json["logo"], serde_json::Value::Null);
    }
}
