use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use forgebom_core::ItemId;
use forgebom_inventory::{DependencyEdge, DependencyIndex, Item, ItemDirectory, LookupError};

/// Writable catalog abstraction (items + dependency edges).
///
/// Reads for the resource calculation go through `ItemDirectory` /
/// `DependencyIndex`; this trait covers listing and maintenance.
pub trait CatalogStore: Send + Sync {
    fn upsert_item(&self, item: Item);
    fn add_dependency(&self, edge: DependencyEdge);
    /// Replace every edge of `parent_id` (used by idempotent fixture loading).
    fn replace_dependencies(&self, parent_id: &ItemId, edges: Vec<DependencyEdge>);
    /// All items ordered by id.
    fn list_items(&self) -> Vec<Item>;
    /// All edges grouped by parent, parents ordered by id, insertion order within a parent.
    fn list_dependencies(&self) -> Vec<(ItemId, Vec<DependencyEdge>)>;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn upsert_item(&self, item: Item) {
        (**self).upsert_item(item)
    }

    fn add_dependency(&self, edge: DependencyEdge) {
        (**self).add_dependency(edge)
    }

    fn replace_dependencies(&self, parent_id: &ItemId, edges: Vec<DependencyEdge>) {
        (**self).replace_dependencies(parent_id, edges)
    }

    fn list_items(&self) -> Vec<Item> {
        (**self).list_items()
    }

    fn list_dependencies(&self) -> Vec<(ItemId, Vec<DependencyEdge>)> {
        (**self).list_dependencies()
    }
}

/// In-memory catalog for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: RwLock<BTreeMap<ItemId, Item>>,
    edges: RwLock<BTreeMap<ItemId, Vec<DependencyEdge>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert_item(&self, item: Item) {
        CatalogStore::upsert_item(self, item)
    }

    pub fn add_dependency(&self, edge: DependencyEdge) {
        CatalogStore::add_dependency(self, edge)
    }
}

impl CatalogStore for InMemoryCatalog {
    fn upsert_item(&self, item: Item) {
        if let Ok(mut map) = self.items.write() {
            map.insert(item.id.clone(), item);
        }
    }

    fn add_dependency(&self, edge: DependencyEdge) {
        if let Ok(mut map) = self.edges.write() {
            map.entry(edge.parent_id.clone()).or_default().push(edge);
        }
    }

    fn replace_dependencies(&self, parent_id: &ItemId, edges: Vec<DependencyEdge>) {
        if let Ok(mut map) = self.edges.write() {
            if edges.is_empty() {
                map.remove(parent_id);
            } else {
                map.insert(parent_id.clone(), edges);
            }
        }
    }

    fn list_items(&self) -> Vec<Item> {
        match self.items.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => vec![],
        }
    }

    fn list_dependencies(&self) -> Vec<(ItemId, Vec<DependencyEdge>)> {
        match self.edges.read() {
            Ok(map) => map
                .iter()
                .map(|(parent, edges)| (parent.clone(), edges.clone()))
                .collect(),
            Err(_) => vec![],
        }
    }
}

#[async_trait]
impl ItemDirectory for InMemoryCatalog {
    async fn get_item(&self, id: &ItemId) -> Result<Option<Item>, LookupError> {
        let map = self
            .items
            .read()
            .map_err(|_| LookupError::Unavailable("item store lock poisoned".to_string()))?;
        Ok(map.get(id).cloned())
    }
}

#[async_trait]
impl DependencyIndex for InMemoryCatalog {
    async fn get_dependencies(
        &self,
        parent_id: &ItemId,
    ) -> Result<Vec<DependencyEdge>, LookupError> {
        let map = self
            .edges
            .read()
            .map_err(|_| LookupError::Unavailable("dependency store lock poisoned".to_string()))?;
        Ok(map.get(parent_id).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgebom_core::Quantity;

    fn id(s: &str) -> ItemId {
        s.parse().unwrap()
    }

    fn item(s: &str) -> Item {
        Item::new(id(s), s, "material").unwrap()
    }

    fn edge(parent: &str, component: &str, q: f64) -> DependencyEdge {
        DependencyEdge::new(id(parent), id(component), Quantity::new(q).unwrap())
    }

    #[tokio::test]
    async fn upsert_replaces_existing_item() {
        let catalog = InMemoryCatalog::new();
        catalog.upsert_item(item("coal"));
        catalog.upsert_item(Item::new(id("coal"), "Charcoal", "fuel").unwrap());

        let got = catalog.get_item(&id("coal")).await.unwrap().unwrap();
        assert_eq!(got.name, "Charcoal");
        assert_eq!(catalog.list_items().len(), 1);
    }

    #[tokio::test]
    async fn missing_lookups_are_empty_not_errors() {
        let catalog = InMemoryCatalog::new();
        assert_eq!(catalog.get_item(&id("ghost")).await.unwrap(), None);
        assert!(catalog.get_dependencies(&id("ghost")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn edges_keep_insertion_order_per_parent() {
        let catalog = InMemoryCatalog::new();
        catalog.add_dependency(edge("sword", "ingot", 2.0));
        catalog.add_dependency(edge("sword", "handle", 1.0));
        catalog.add_dependency(edge("ingot", "ore", 1.0));

        let sword = catalog.get_dependencies(&id("sword")).await.unwrap();
        let components: Vec<&str> = sword.iter().map(|e| e.component_id.as_str()).collect();
        assert_eq!(components, vec!["ingot", "handle"]);

        let parents: Vec<String> = catalog
            .list_dependencies()
            .into_iter()
            .map(|(p, _)| p.to_string())
            .collect();
        assert_eq!(parents, vec!["ingot", "sword"]);
    }

    #[test]
    fn replace_dependencies_overwrites_or_removes() {
        let catalog = InMemoryCatalog::new();
        catalog.upsert_item(item("sword"));
        catalog.add_dependency(edge("sword", "ingot", 2.0));
        catalog.add_dependency(edge("sword", "ingot", 2.0));

        catalog.replace_dependencies(&id("sword"), vec![edge("sword", "ingot", 3.0)]);
        let deps = catalog.list_dependencies();
        assert_eq!(deps.len(), 1);
        assert_eq!(deps[0].1.len(), 1);
        assert_eq!(deps[0].1[0].quantity.value(), 3.0);

        catalog.replace_dependencies(&id("sword"), vec![]);
        assert!(catalog.list_dependencies().is_empty());
        assert_eq!(catalog.list_items().len(), 1);
    }

    #[test]
    fn arc_forwards_to_inner_store() {
        let shared: Arc<InMemoryCatalog> = Arc::new(InMemoryCatalog::new());
        CatalogStore::upsert_item(&shared, item("coal"));
        assert_eq!(shared.list_items().len(), 1);
    }
}
