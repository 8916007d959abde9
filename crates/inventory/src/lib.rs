//! Inventory catalog model: items, the recipes that connect them, and the
//! read-only lookup seams the resource calculation consumes.
//!
//! This crate contains no storage; concrete stores live in `forgebom-infra`.

pub mod dependency;
pub mod item;
pub mod lookup;

pub use dependency::DependencyEdge;
pub use item::Item;
pub use lookup::{DependencyIndex, ItemDirectory, LookupError};
