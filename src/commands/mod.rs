//! CLI command implementations.

pub mod categories;
pub mod fetch;

pub use categories::CategoriesCommand;
pub use fetch::FetchCommand;
