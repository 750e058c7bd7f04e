//! Connector catalogs.

pub mod builtin;
mod file;
mod memory;

pub use file::{CatalogFileError, load_catalog_file, parse_catalog};
pub use memory::InMemoryCatalog;
