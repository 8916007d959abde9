//! Read-only lookup seams over the item catalog.
//!
//! Implementations may block on external I/O, hence the async traits. Both
//! traits are implemented for `Arc<T>` so a single shared store can serve
//! several consumers.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use forgebom_core::ItemId;

use crate::{DependencyEdge, Item};

/// Infrastructure failure reported by a lookup service.
///
/// "Not found" is not an error: it is `Ok(None)` / `Ok(vec![])`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("lookup backend unavailable: {0}")]
    Unavailable(String),
}

/// Item Directory: item metadata by id.
#[async_trait]
pub trait ItemDirectory: Send + Sync {
    async fn get_item(&self, id: &ItemId) -> Result<Option<Item>, LookupError>;
}

/// Dependency Index: outgoing recipe edges of a parent item.
///
/// An item with no edges is a base material.
#[async_trait]
pub trait DependencyIndex: Send + Sync {
    async fn get_dependencies(&self, parent_id: &ItemId)
    -> Result<Vec<DependencyEdge>, LookupError>;
}

#[async_trait]
impl<S> ItemDirectory for Arc<S>
where
    S: ItemDirectory + ?Sized,
{
    async fn get_item(&self, id: &ItemId) -> Result<Option<Item>, LookupError> {
        (**self).get_item(id).await
    }
}

#[async_trait]
impl<S> DependencyIndex for Arc<S>
where
    S: DependencyIndex + ?Sized,
{
    async fn get_dependencies(
        &self,
        parent_id: &ItemId,
    ) -> Result<Vec<DependencyEdge>, LookupError> {
        (**self).get_dependencies(parent_id).await
    }
}
