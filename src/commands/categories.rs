//! Category listing and resolution command.

use crate::config::Config;
use crate::meli::{categories, ListingSearch, MeliClient};
use anyhow::{Context, Result};
use tracing::info;

/// Lists the provider category tree, or resolves one name to its id.
pub struct CategoriesCommand {
    config: Config,
}

impl CategoriesCommand {
    /// Creates a new categories command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Lists all categories, or resolves `name` when given.
    pub async fn execute(&self, name: Option<&str>) -> Result<String> {
        let client = MeliClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, name).await
    }

    /// Runs the command with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl ListingSearch,
        name: Option<&str>,
    ) -> Result<String> {
        match name {
            Some(name) => {
                info!("Resolving category name: {}", name);
                match categories::resolve(client, name).await? {
                    Some(id) => Ok(format!("{}  {}", id, name)),
                    None => Ok(format!("No category named \"{}\" on site {}.", name, self.config.site)),
                }
            }
            None => {
                let all = categories::fetch_all(client).await?;

                let mut lines = Vec::with_capacity(all.len() + 2);
                lines.push(format!("{:<10} {}", "Id", "Name"));
                lines.push(format!("{:-<10} {:-<40}", "", ""));
                for category in &all {
                    lines.push(format!("{:<10} {}", category.id, category.name));
                }

                Ok(lines.join("\n"))
            }
        }
    }
}
