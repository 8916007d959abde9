//! Catalog storage (items + recipe edges).

pub mod catalog_store;

pub use catalog_store::{CatalogStore, InMemoryCatalog};
