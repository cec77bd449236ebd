//! Mercado Libre specific modules for HTTP client, parsing, and data models.

pub mod categories;
pub mod client;
pub mod models;
pub mod parser;
pub mod regions;
pub mod scanner;

pub use client::{ListingSearch, MeliClient};
pub use models::{Attribute, Category, ListingRecord, RawListing, SearchPage};
pub use parser::ParseError;
pub use regions::Region;
pub use scanner::Scanner;
