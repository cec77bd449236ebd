//! Category name resolution against the provider taxonomy.

use crate::meli::client::ListingSearch;
use crate::meli::models::Category;
use crate::meli::parser;
use anyhow::Result;
use tracing::debug;

/// Fetches the full category tree for the client's site.
pub async fn fetch_all(client: &impl ListingSearch) -> Result<Vec<Category>> {
    let body = client.categories().await?;
    Ok(parser::parse_categories(&body)?)
}

/// Resolves a category display name to its provider id.
///
/// Matching is exact and case-sensitive. An unknown name is a normal
/// outcome and resolves to `Ok(None)`; only transport or parse failures
/// are errors. Each call fetches the category tree anew.
pub async fn resolve(client: &impl ListingSearch, name: &str) -> Result<Option<String>> {
    let categories = fetch_all(client).await?;
    debug!("Fetched {} categories", categories.len());

    Ok(categories.into_iter().find(|c| c.name == name).map(|c| c.id))
}
