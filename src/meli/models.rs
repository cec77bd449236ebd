//! Data models for Mercado Libre listings, categories, and search pages.

use serde::{Deserialize, Serialize};

/// A typed key/value annotation on a listing (brand, model, year, ...).
///
/// The attribute kind is a string code such as `BRAND` or `VEHICLE_YEAR`.
/// Provider payloads are uneven, so every field defaults when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute kind code.
    #[serde(default)]
    pub id: String,
    /// Resolved display value, when the provider has one.
    #[serde(default)]
    pub value_name: Option<String>,
}

/// A raw listing as returned by the search endpoint.
///
/// Only the fields the pipeline projects into the export schema are modeled;
/// any other fields the provider sends are dropped at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawListing {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub catalog_product_id: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency_id: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// One page of search results plus the paging metadata that matters here.
///
/// `total` is the full match count for the category+region query,
/// independent of pagination. It is `None` when the response carried no
/// paging block.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    pub results: Vec<RawListing>,
    pub total: Option<u64>,
}

impl SearchPage {
    /// Returns the number of listings on this page.
    pub fn count(&self) -> usize {
        self.results.len()
    }

    /// Returns true if the page carried no listings.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// A marketplace taxonomy node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// A flattened, deduplicated listing row: the fixed export schema.
///
/// Field order here is the export column order. `brand`, `model` and `year`
/// are empty strings when the listing carried no such attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: String,
    pub title: String,
    pub category_id: String,
    pub catalog_product_id: String,
    pub price: Option<f64>,
    pub currency_id: String,
    pub condition: String,
    pub permalink: String,
    pub brand: String,
    pub model: String,
    pub year: String,
}

impl ListingRecord {
    /// Export column names, in output order.
    pub const COLUMNS: [&'static str; 11] = [
        "id",
        "title",
        "category_id",
        "catalog_product_id",
        "price",
        "currency_id",
        "condition",
        "permalink",
        "brand",
        "model",
        "year",
    ];
}
