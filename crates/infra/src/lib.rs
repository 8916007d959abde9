//! Infrastructure layer: catalog storage and fixture loading.

pub mod read_model;
pub mod seed;

pub use read_model::{CatalogStore, InMemoryCatalog};
pub use seed::{SeedCatalog, SeedError, SeedReport};
