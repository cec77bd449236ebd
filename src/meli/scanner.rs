//! Multi-region paginated scan of the search endpoint.

use crate::meli::client::ListingSearch;
use crate::meli::models::RawListing;
use crate::meli::parser;
use crate::meli::regions::Region;
use anyhow::Result;
use tracing::{info, warn};

/// Walks every region for a category and accumulates raw listings,
/// region-major, then page-major, then provider order within a page.
pub struct Scanner {
    result_limit: u32,
    page_limit: Option<u32>,
}

impl Scanner {
    /// Creates a scanner with the page size and an optional per-region page cap.
    pub fn new(result_limit: u32, page_limit: Option<u32>) -> Self {
        Self { result_limit, page_limit }
    }

    /// Number of pages the provider exposes for a total match count.
    ///
    /// Empirically `1 + round(total / limit)` with half rounded away from
    /// zero, not a ceiling. `total=125, limit=50` yields 4 pages.
    pub fn page_count(total: u64, result_limit: u32) -> u32 {
        1 + (total as f64 / f64::from(result_limit)).round() as u32
    }

    /// Scans all `regions` for `category_id`.
    ///
    /// The page cap starts at the configured limit and is narrowed by every
    /// region's computed page count as the loop advances; a later region can
    /// shrink it further but never widen it. A page or probe whose body is
    /// unusable is logged and skipped; transport errors abort the scan.
    pub async fn scan(
        &self,
        client: &impl ListingSearch,
        category_id: &str,
        regions: &[Region],
    ) -> Result<Vec<RawListing>> {
        let mut items = Vec::new();
        let mut cap = self.page_limit;

        for region in regions {
            info!("Searching category {} in {}", category_id, region.name);

            let body = client.probe(category_id, region.id).await?;
            let total = match parser::parse_search_page(&body) {
                Ok(page) => page.total,
                Err(e) => {
                    warn!("Probe failed in {}: {}. Skipping region.", region.name, e);
                    continue;
                }
            };
            let Some(total) = total else {
                warn!("No paging metadata in {}. Skipping region.", region.name);
                continue;
            };

            let pages = Self::page_count(total, self.result_limit).min(cap.unwrap_or(u32::MAX));
            cap = Some(pages);

            info!("{} listings in {} ({} pages to fetch)", total, region.name, pages);

            for page in 0..pages {
                info!("Page {} of {}", page + 1, pages);

                let offset = u64::from(page) * u64::from(self.result_limit);
                let body = client
                    .search_page(category_id, region.id, self.result_limit, offset)
                    .await?;

                match parser::parse_search_page(&body) {
                    Ok(page) => items.extend(page.results),
                    Err(e) => {
                        warn!(
                            "Skipping page at offset {} in {}: {}",
                            offset, region.name, e
                        );
                    }
                }
            }
        }

        Ok(items)
    }
}
