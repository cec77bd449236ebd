//! JSON parsers for search and category responses.

use crate::meli::models::{Category, RawListing, SearchPage};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Failures that make a response body unusable.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The body carries no `results` array. Distinct from an empty page:
    /// the provider answered with an error payload instead of results.
    #[error("response has no results array")]
    MissingResults,

    /// The body is not valid JSON at all.
    #[error("response is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses one search page body.
///
/// A missing `results` array is [`ParseError::MissingResults`]. Individual
/// listings that fail to deserialize are logged and skipped; one malformed
/// listing never discards the rest of the page.
pub fn parse_search_page(body: &str) -> Result<SearchPage, ParseError> {
    let value: Value = serde_json::from_str(body)?;

    let entries = value
        .get("results")
        .and_then(Value::as_array)
        .ok_or(ParseError::MissingResults)?;

    let total = value
        .get("paging")
        .and_then(|p| p.get("total"))
        .and_then(Value::as_u64);

    let mut results = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<RawListing>(entry.clone()) {
            Ok(listing) => results.push(listing),
            Err(e) => warn!("Skipping listing that failed to deserialize: {}", e),
        }
    }

    debug!("Parsed {} listings (total match count: {:?})", results.len(), total);

    Ok(SearchPage { results, total })
}

/// Parses the category tree body into `{id, name}` nodes.
pub fn parse_categories(body: &str) -> Result<Vec<Category>, ParseError> {
    Ok(serde_json::from_str(body)?)
}
