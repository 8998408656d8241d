//! Listing images. Gallery and floorplan images share a shape and differ only by source table.

use crate::model::row::RowMap;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageKind {
    Gallery,
    Floorplan,
}

impl ImageKind {
    pub fn table(self) -> &'static str {
        match self {
            ImageKind::Gallery => "gallery",
            ImageKind::Floorplan => "floorplans",
        }
    }

    /// Key the collection is published under.
    pub fn collection(self) -> &'static str {
        match self {
            ImageKind::Gallery => "gallery",
            ImageKind::Floorplan => "floorplans",
        }
    }
}

impl fmt::Display for ImageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.collection())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Image {
    /// Absolute URL or a reference relative to the asset host.
    pub url: String,
    pub position: i64,
    pub caption: String,
    #[serde(skip)]
    pub listing_id: i64,
}

impl Image {
    /// `photo` and `cID` are required; position defaults to 0 and caption to "".
    pub fn from_row(row: &RowMap<'_>) -> Option<Self> {
        let url = row.url("photo")?;
        let listing_id = row.int("cID")?;
        Some(Image {
            url,
            position: row.int("showOrder").unwrap_or(0),
            caption: row.string("caption").unwrap_or_default(),
            listing_id,
        })
    }
}
