//! SQL text for every access pattern, driven by the declared column sets.

mod builder;
pub mod schema;
pub use builder::*;
pub use schema::{ColumnSet, ListingView};
