//! Deduplication and attribute flattening of raw listings.

use crate::meli::models::{Attribute, ListingRecord, RawListing};
use std::collections::HashSet;
use tracing::{debug, info};

/// Attribute codes flattened into dedicated columns.
const BRAND: &str = "BRAND";
const MODEL: &str = "MODEL";
const VEHICLE_YEAR: &str = "VEHICLE_YEAR";

/// First `value_name` among `attrs` whose code matches, or the empty string.
fn attribute_value(attrs: &[Attribute], code: &str) -> String {
    attrs
        .iter()
        .find(|a| a.id == code)
        .and_then(|a| a.value_name.clone())
        .unwrap_or_default()
}

/// Flattens raw listings into the fixed export schema.
///
/// Listings are deduplicated by id; the first occurrence wins and row order
/// follows first occurrence. A listing with missing or sparse attributes
/// still produces a row, with empty strings in the affected columns.
pub fn normalize(raw: Vec<RawListing>) -> Vec<ListingRecord> {
    info!("Normalizing {} raw listings", raw.len());

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(raw.len());

    for listing in raw {
        if !seen.insert(listing.id.clone()) {
            continue;
        }

        if listing.attributes.is_empty() {
            debug!("Listing {} has no attributes, filling blanks", listing.id);
        }

        records.push(ListingRecord {
            brand: attribute_value(&listing.attributes, BRAND),
            model: attribute_value(&listing.attributes, MODEL),
            year: attribute_value(&listing.attributes, VEHICLE_YEAR),
            id: listing.id,
            title: listing.title,
            category_id: listing.category_id.unwrap_or_default(),
            catalog_product_id: listing.catalog_product_id.unwrap_or_default(),
            price: listing.price,
            currency_id: listing.currency_id.unwrap_or_default(),
            condition: listing.condition.unwrap_or_default(),
            permalink: listing.permalink.unwrap_or_default(),
        });
    }

    info!("{} unique listings after deduplication", records.len());
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, title: &str, attrs: &[(&str, &str)]) -> RawListing {
        RawListing {
            id: id.to_string(),
            title: title.to_string(),
            category_id: Some("MLA1744".to_string()),
            catalog_product_id: None,
            price: Some(100.0),
            currency_id: Some("ARS".to_string()),
            condition: Some("used".to_string()),
            permalink: Some(format!("https://example.test/{}", id)),
            attributes: attrs
                .iter()
                .map(|(id, value)| Attribute {
                    id: id.to_string(),
                    value_name: Some(value.to_string()),
                })
                .collect(),
        }
    }

    #[test]
    fn test_attribute_value_lookup() {
        let attrs = vec![
            Attribute { id: "BRAND".into(), value_name: Some("Ford".into()) },
            Attribute { id: "MODEL".into(), value_name: Some("Ka".into()) },
        ];

        assert_eq!(attribute_value(&attrs, "BRAND"), "Ford");
        assert_eq!(attribute_value(&attrs, "MODEL"), "Ka");
        assert_eq!(attribute_value(&attrs, "VEHICLE_YEAR"), "");
    }

    #[test]
    fn test_attribute_value_first_match_wins() {
        let attrs = vec![
            Attribute { id: "BRAND".into(), value_name: Some("Ford".into()) },
            Attribute { id: "BRAND".into(), value_name: Some("Chevrolet".into()) },
        ];

        assert_eq!(attribute_value(&attrs, "BRAND"), "Ford");
    }

    #[test]
    fn test_attribute_value_null_value_name() {
        let attrs = vec![Attribute { id: "BRAND".into(), value_name: None }];

        assert_eq!(attribute_value(&attrs, "BRAND"), "");
    }

    #[test]
    fn test_normalize_flattens_attributes() {
        let raw = vec![listing(
            "MLA1",
            "Ford Fiesta",
            &[("BRAND", "Ford"), ("MODEL", "Fiesta"), ("VEHICLE_YEAR", "2017")],
        )];

        let records = normalize(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].brand, "Ford");
        assert_eq!(records[0].model, "Fiesta");
        assert_eq!(records[0].year, "2017");
        assert_eq!(records[0].currency_id, "ARS");
    }

    #[test]
    fn test_normalize_missing_year_is_empty() {
        let raw = vec![listing("MLA1", "Fiat Uno", &[("BRAND", "Fiat"), ("MODEL", "Uno")])];

        let records = normalize(raw);
        assert_eq!(records[0].brand, "Fiat");
        assert_eq!(records[0].year, "");
    }

    #[test]
    fn test_normalize_no_attributes_still_produces_row() {
        let raw = vec![listing("MLA1", "Misterioso", &[])];

        let records = normalize(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Misterioso");
        assert_eq!(records[0].brand, "");
        assert_eq!(records[0].model, "");
        assert_eq!(records[0].year, "");
    }

    #[test]
    fn test_normalize_deduplicates_first_wins() {
        let raw = vec![
            listing("MLA1", "First occurrence", &[("BRAND", "Ford")]),
            listing("MLA2", "Other", &[]),
            listing("MLA1", "Second occurrence", &[("BRAND", "Chevrolet")]),
        ];

        let records = normalize(raw);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "MLA1");
        assert_eq!(records[0].title, "First occurrence");
        assert_eq!(records[0].brand, "Ford");
        assert_eq!(records[1].id, "MLA2");
    }

    #[test]
    fn test_normalize_preserves_insertion_order() {
        let raw = vec![
            listing("MLA3", "c", &[]),
            listing("MLA1", "a", &[]),
            listing("MLA2", "b", &[]),
            listing("MLA1", "dup", &[]),
        ];

        let ids: Vec<_> = normalize(raw).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["MLA3", "MLA1", "MLA2"]);
    }

    #[test]
    fn test_normalize_defaults_optional_fields() {
        let raw = vec![RawListing {
            id: "MLA1".to_string(),
            title: String::new(),
            category_id: None,
            catalog_product_id: None,
            price: None,
            currency_id: None,
            condition: None,
            permalink: None,
            attributes: Vec::new(),
        }];

        let records = normalize(raw);
        let record = &records[0];
        assert_eq!(record.category_id, "");
        assert_eq!(record.catalog_product_id, "");
        assert!(record.price.is_none());
        assert_eq!(record.condition, "");
        assert_eq!(record.permalink, "");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize(Vec::new()).is_empty());
    }
}
