//! Development fixtures: a small smithing catalog (iron sword and its inputs).

use serde::Serialize;
use thiserror::Error;

use forgebom_core::{DomainError, ItemId, Quantity};
use forgebom_inventory::{DependencyEdge, Item};

use crate::read_model::CatalogStore;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeedError {
    #[error("invalid fixture: {0}")]
    InvalidFixture(#[from] DomainError),
}

/// Counts reported after loading fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub items: usize,
    pub dependencies: usize,
}

/// A set of items and recipe edges that can be loaded into a catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedCatalog {
    pub items: Vec<Item>,
    pub dependencies: Vec<DependencyEdge>,
}

const SMITHING_ITEMS: &[(&str, &str, &str)] = &[
    ("iron-ore", "Iron Ore", "material"),
    ("iron-ingot", "Iron Ingot", "refined-material"),
    ("iron-sword", "Iron Sword", "weapon"),
    ("wood-handle", "Wood Handle", "material"),
    ("coal", "Coal", "material"),
];

const SMITHING_RECIPES: &[(&str, &str, f64)] = &[
    ("iron-sword", "iron-ingot", 2.0),
    ("iron-sword", "wood-handle", 1.0),
    ("iron-ingot", "iron-ore", 1.0),
    ("iron-ingot", "coal", 1.0),
];

impl SeedCatalog {
    /// The default development catalog.
    pub fn smithing() -> Result<Self, SeedError> {
        let items = SMITHING_ITEMS
            .iter()
            .map(|(id, name, item_type)| Item::new(id.parse()?, *name, *item_type))
            .collect::<Result<Vec<_>, DomainError>>()?;

        let dependencies = SMITHING_RECIPES
            .iter()
            .map(|(parent, component, quantity)| -> Result<DependencyEdge, DomainError> {
                Ok(DependencyEdge::new(
                    parent.parse()?,
                    component.parse()?,
                    Quantity::new(*quantity)?,
                ))
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Self {
            items,
            dependencies,
        })
    }

    /// Load into `store`.
    ///
    /// Items are upserted and each fixture parent's edges are replaced, so
    /// loading twice leaves the catalog unchanged.
    pub fn load<S: CatalogStore + ?Sized>(&self, store: &S) -> SeedReport {
        for item in &self.items {
            store.upsert_item(item.clone());
        }

        let mut parents: Vec<&ItemId> = self.dependencies.iter().map(|e| &e.parent_id).collect();
        parents.sort();
        parents.dedup();
        for parent in parents {
            let edges = self
                .dependencies
                .iter()
                .filter(|e| &e.parent_id == parent)
                .cloned()
                .collect();
            store.replace_dependencies(parent, edges);
        }

        let report = SeedReport {
            items: self.items.len(),
            dependencies: self.dependencies.len(),
        };
        tracing::info!(
            items = report.items,
            dependencies = report.dependencies,
            "catalog seeded"
        );
        report
    }
}
