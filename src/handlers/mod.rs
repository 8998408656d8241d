//! HTTP handlers for listings, builders and the hypermedia root.

pub mod builder;
pub mod listing;
pub mod root;

use crate::error::AppError;

/// Path ids are integers; anything else is a client error.
pub(crate) fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id: {}", id_str)))
}
