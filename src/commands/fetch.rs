//! Fetch command - the full retrieval-and-normalization pipeline.

use crate::config::Config;
use crate::export::Exporter;
use crate::meli::{categories, ListingSearch, MeliClient, Region, Scanner};
use crate::normalize::normalize;
use anyhow::{Context, Result};
use tracing::info;

/// Executes the category fetch pipeline: resolve, scan, normalize, export.
pub struct FetchCommand {
    config: Config,
}

impl FetchCommand {
    /// Creates a new fetch command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the pipeline for a category display name.
    pub async fn execute(&self, category_name: &str) -> Result<String> {
        let client = MeliClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, category_name).await
    }

    /// Runs the pipeline with a provided client (for testing).
    ///
    /// The export is written once, at the end, only when the scan completed;
    /// a fatal fault earlier leaves any previous export untouched.
    pub async fn execute_with_client(
        &self,
        client: &impl ListingSearch,
        category_name: &str,
    ) -> Result<String> {
        info!("Resolving category: {}", category_name);

        let Some(category_id) = categories::resolve(client, category_name).await? else {
            return Ok(format!(
                "No category named \"{}\" on site {}.",
                category_name, self.config.site
            ));
        };

        info!("Category \"{}\" resolved to {}", category_name, category_id);

        let scanner = Scanner::new(self.config.result_limit, self.config.page_limit);
        let raw = scanner.scan(client, &category_id, Region::all()).await?;

        info!("Accumulated {} raw listings across {} regions", raw.len(), Region::all().len());

        let records = normalize(raw);

        let exporter = Exporter::new(&self.config.output_dir, &self.config.file_name);
        let path = exporter.export(&records)?;

        Ok(format!("Exported {} unique listings to {}", records.len(), path.display()))
    }
}
