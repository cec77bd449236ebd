//! meli-crawler - Fast, stateless Mercado Libre listings harvester CLI
//!
//! A Rust port of a Python Mercado Libre scraper: paginated multi-region
//! search, dedup-and-flatten normalization, and dated CSV export.

pub mod commands;
pub mod config;
pub mod export;
pub mod meli;
pub mod normalize;

pub use config::Config;
pub use export::Exporter;
pub use meli::models::{Attribute, Category, ListingRecord, RawListing, SearchPage};
pub use meli::regions::Region;
