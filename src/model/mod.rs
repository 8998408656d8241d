//! Catalog entities and the row mappers that build them.

pub mod builder;
pub mod image;
pub mod listing;
pub mod region;
pub mod row;

pub use builder::Builder;
pub use image::{Image, ImageKind};
pub use listing::{decode_listings, BuilderCache, Coordinate, Listing, ListingStatus, NumberRange};
pub use region::MapRegion;
pub use row::{decode_rows, RowMap};
