use std::sync::Arc;

use forgebom_core::{ItemId, Quantity};
use forgebom_infra::{CatalogStore, InMemoryCatalog, SeedCatalog, SeedError, SeedReport};
use forgebom_inventory::{DependencyEdge, Item, ItemDirectory, LookupError};
use forgebom_resources::{AggregatorConfig, ResourceAggregator, ResourceTotal};

type CatalogAggregator = ResourceAggregator<Arc<InMemoryCatalog>, Arc<InMemoryCatalog>>;

/// Everything the route handlers need, shared behind an `Arc`.
pub struct AppServices {
    catalog: Arc<InMemoryCatalog>,
    aggregator: CatalogAggregator,
}

impl AppServices {
    /// In-memory wiring (dev/test): one catalog serves both lookups.
    pub fn in_memory(config: AggregatorConfig) -> Self {
        Self::with_catalog(Arc::new(InMemoryCatalog::new()), config)
    }

    pub fn with_catalog(catalog: Arc<InMemoryCatalog>, config: AggregatorConfig) -> Self {
        let aggregator =
            ResourceAggregator::new(catalog.clone(), catalog.clone()).with_config(config);
        Self {
            catalog,
            aggregator,
        }
    }

    pub async fn find_item(&self, id: &ItemId) -> Result<Option<Item>, LookupError> {
        self.catalog.get_item(id).await
    }

    pub fn list_items(&self) -> Vec<Item> {
        self.catalog.list_items()
    }

    pub fn list_dependencies(&self) -> Vec<(ItemId, Vec<DependencyEdge>)> {
        self.catalog.list_dependencies()
    }

    /// Base-material totals for `quantity` units of `id`, sorted by item id.
    pub async fn resources(&self, id: &ItemId, quantity: Quantity) -> Vec<ResourceTotal> {
        let mut totals = self.aggregator.aggregate_scaled(id, quantity.value()).await;
        totals.sort_by(|a, b| a.item_id.cmp(&b.item_id));
        totals
    }

    pub fn seed(&self) -> Result<SeedReport, SeedError> {
        Ok(SeedCatalog::smithing()?.load(self.catalog.as_ref()))
    }
}
