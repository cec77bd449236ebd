//! meli-crawler - Fast, stateless Mercado Libre listings harvester CLI
//!
//! A Rust implementation with TLS fingerprint emulation for reliable API access.

use anyhow::Result;
use clap::{Parser, Subcommand};
use meli_crawler::commands::{CategoriesCommand, FetchCommand};
use meli_crawler::config::Config;
use meli_crawler::meli::regions::Region;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meli-crawler",
    version,
    about = "Fast, stateless Mercado Libre listings harvester CLI",
    long_about = "A Rust port of a Python Mercado Libre scraper: multi-region paginated search, deduplication, and dated CSV export."
)]
struct Cli {
    /// Marketplace site id (MLA = Argentina)
    #[arg(short, long, default_value = "MLA", global = true)]
    site: String,

    /// Access token forwarded to the API as a query parameter
    #[arg(long, global = true, env = "MELI_ACCESS_TOKEN")]
    access_token: Option<String>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "MELI_PROXY")]
    proxy: Option<String>,

    /// Delay between requests in milliseconds
    #[arg(long, default_value = "500", global = true, env = "MELI_DELAY")]
    delay: u64,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, normalize, and export listings for a category
    #[command(alias = "f")]
    Fetch {
        /// Category display name, e.g. "Autos, Motos y Otros"
        category: String,

        /// Cap on pages fetched per region
        #[arg(short, long)]
        page_limit: Option<u32>,

        /// Directory the CSV export is written to
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Base file name for the dated export
        #[arg(long)]
        file_name: Option<String>,
    },

    /// Resolve a category name, or list the whole category tree
    #[command(alias = "c")]
    Categories {
        /// Category display name to resolve
        name: Option<String>,
    },

    /// List the regions every scan walks
    Regions,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.site = cli.site;
    config.delay_ms = cli.delay;

    if let Some(token) = cli.access_token {
        config.access_token = Some(token);
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }

    match cli.command {
        Commands::Fetch { category, page_limit, output, file_name } => {
            if page_limit.is_some() {
                config.page_limit = page_limit;
            }
            if let Some(output) = output {
                config.output_dir = output;
            }
            if let Some(file_name) = file_name {
                config.file_name = file_name;
            }

            let cmd = FetchCommand::new(config);
            let output = cmd.execute(&category).await?;
            println!("{}", output);
        }

        Commands::Categories { name } => {
            let cmd = CategoriesCommand::new(config);
            let output = cmd.execute(name.as_deref()).await?;
            println!("{}", output);
        }

        Commands::Regions => {
            println!("Regions walked by every scan:\n");
            println!("{:<22} {}", "Id", "Name");
            println!("{:-<22} {:-<30}", "", "");

            for region in Region::all() {
                println!("{:<22} {}", region.id, region.name);
            }
        }
    }

    Ok(())
}
