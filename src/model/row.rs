//! Row mapping: pair a declared column set with one raw row, then read typed fields.

use crate::config::RowPolicy;
use crate::db::SqlView;
use crate::error::AppError;
use crate::sql::ColumnSet;
use std::collections::HashMap;
use url::Url;

/// Only used to validate relative references; never published.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Column name to raw value for one row. NULL cells are simply absent.
#[derive(Debug)]
pub struct RowMap<'a> {
    values: HashMap<&'static str, &'a str>,
}

impl<'a> RowMap<'a> {
    /// Zip `columns` with `row`. The widths must match exactly.
    pub fn combine(columns: &ColumnSet, row: &'a [Option<String>]) -> Result<Self, AppError> {
        if columns.len() != row.len() {
            return Err(AppError::Decode(format!(
                "row has {} values, expected {} columns",
                row.len(),
                columns.len()
            )));
        }
        let values = columns
            .names()
            .iter()
            .zip(row)
            .filter_map(|(name, value)| value.as_deref().map(|v| (*name, v)))
            .collect();
        Ok(RowMap { values })
    }

    pub fn text(&self, name: &str) -> Option<&'a str> {
        self.values.get(name).copied()
    }

    pub fn string(&self, name: &str) -> Option<String> {
        self.text(name).map(str::to_string)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.text(name)?.parse().ok()
    }

    /// Finite decimals only; "NaN" and "inf" count as malformed.
    pub fn float(&self, name: &str) -> Option<f64> {
        self.text(name)?.parse::<f64>().ok().filter(|f| f.is_finite())
    }

    /// Absolute URLs and relative references, kept as stored. Empty strings, strings with
    /// whitespace, and anything the URL parser rejects even against a base are absent.
    pub fn url(&self, name: &str) -> Option<String> {
        let raw = self.text(name)?;
        if raw.is_empty() || raw.chars().any(char::is_whitespace) {
            return None;
        }
        let base = Url::parse(RELATIVE_BASE).ok()?;
        Url::options().base_url(Some(&base)).parse(raw).ok()?;
        Some(raw.to_string())
    }

    /// Stored as 1/0.
    pub fn flag(&self, name: &str) -> bool {
        self.int(name) == Some(1)
    }
}

/// Decode every row of `view` with `decode`; undecodable rows are dropped or fail the batch per `policy`.
pub fn decode_rows<T, F>(
    view: &SqlView,
    columns: &ColumnSet,
    policy: RowPolicy,
    what: &str,
    decode: F,
) -> Result<Vec<T>, AppError>
where
    F: Fn(&RowMap<'_>) -> Option<T>,
{
    let mut out = Vec::with_capacity(view.len());
    for (index, row) in view.iter().enumerate() {
        let map = RowMap::combine(columns, row)?;
        match decode(&map) {
            Some(item) => out.push(item),
            None => reject_row(policy, what, index)?,
        }
    }
    Ok(out)
}

/// Apply `policy` to a row that failed to decode.
pub fn reject_row(policy: RowPolicy, what: &str, index: usize) -> Result<(), AppError> {
    match policy {
        RowPolicy::Skip => {
            tracing::warn!(row = index, "skipping undecodable {} row", what);
            Ok(())
        }
        RowPolicy::Fail => Err(AppError::Decode(format!("{} row {} failed to decode", what, index))),
    }
}
