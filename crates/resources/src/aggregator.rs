//! Expansion of a recipe graph into base-material totals.
//!
//! The walk is iterative: pending items sit on an explicit work stack, so
//! stack usage does not grow with recipe depth.

use std::sync::Arc;

use futures::future::join_all;

use forgebom_core::ItemId;
use forgebom_inventory::{DependencyEdge, DependencyIndex, ItemDirectory};

use crate::config::{AggregatorConfig, FanOut};
use crate::total::{ResourceTotal, ResourceTotals};

/// Persistent root-to-node path. Siblings share their parent's node and each
/// child extends it with a new node, so no branch sees another's additions.
struct PathNode {
    id: ItemId,
    parent: Option<Arc<PathNode>>,
}

impl Drop for PathNode {
    // Unlink iteratively; the default recursive drop overflows on deep paths.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

fn on_path(path: Option<&Arc<PathNode>>, id: &ItemId) -> bool {
    let mut node = path.map(|node| &**node);
    while let Some(current) = node {
        if &current.id == id {
            return true;
        }
        node = current.parent.as_deref();
    }
    false
}

/// An item waiting to be resolved: how many units are needed and which
/// items are already on the path leading to it.
struct Frame {
    item_id: ItemId,
    multiplier: f64,
    path: Option<Arc<PathNode>>,
}

impl Frame {
    /// One frame per edge, in canonical edge order.
    fn children(&self, mut edges: Vec<DependencyEdge>) -> Vec<Frame> {
        // Fixed order so float summation does not depend on storage order.
        edges.sort_by(canonical_order);
        let path = Arc::new(PathNode {
            id: self.item_id.clone(),
            parent: self.path.clone(),
        });
        edges
            .into_iter()
            .map(|edge| Frame {
                item_id: edge.component_id,
                multiplier: self.multiplier * edge.quantity.value(),
                path: Some(path.clone()),
            })
            .collect()
    }
}

/// What a resolved frame contributes.
enum Step {
    /// Cycle, unknown item or failed item lookup.
    Skip,
    Base(ResourceTotal),
    Expand(Vec<DependencyEdge>),
}

/// Computes base-material totals over an item directory and a dependency index.
///
/// The aggregator never mutates its lookup services and keeps no state
/// between calls.
#[derive(Debug, Clone)]
pub struct ResourceAggregator<D, I> {
    items: D,
    dependencies: I,
    config: AggregatorConfig,
}

impl<D, I> ResourceAggregator<D, I>
where
    D: ItemDirectory,
    I: DependencyIndex,
{
    pub fn new(items: D, dependencies: I) -> Self {
        Self {
            items,
            dependencies,
            config: AggregatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AggregatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Base materials needed for one unit of `item_id`.
    pub async fn aggregate(&self, item_id: &ItemId) -> Vec<ResourceTotal> {
        self.aggregate_scaled(item_id, 1.0).await
    }

    /// Base materials needed for `multiplier` units of `item_id`.
    ///
    /// The result holds one entry per base item, ordered by item id. It is
    /// empty when the root is unknown or every branch was cut by a cycle.
    #[tracing::instrument(skip(self), fields(fan_out = %self.config.fan_out))]
    pub async fn aggregate_scaled(
        &self,
        item_id: &ItemId,
        multiplier: f64,
    ) -> Vec<ResourceTotal> {
        let root = Frame {
            item_id: item_id.clone(),
            multiplier,
            path: None,
        };
        let step = self.resolve(&root).await;

        // Depth-first; children are pushed in reverse so the first edge is
        // expanded first under either fan-out strategy.
        let mut stack = vec![(root, step)];
        let mut totals = ResourceTotals::default();

        while let Some((frame, step)) = stack.pop() {
            match step {
                Step::Skip => {}
                Step::Base(total) => totals.add(total),
                Step::Expand(edges) => {
                    let children = frame.children(edges);
                    let steps = self.resolve_siblings(&children).await;
                    stack.extend(children.into_iter().zip(steps).rev());
                }
            }
        }

        let totals = totals.into_vec();
        tracing::debug!(base_materials = totals.len(), "resource aggregation finished");
        totals
    }

    async fn resolve_siblings(&self, frames: &[Frame]) -> Vec<Step> {
        match self.config.fan_out {
            FanOut::Sequential => {
                let mut steps = Vec::with_capacity(frames.len());
                for frame in frames {
                    steps.push(self.resolve(frame).await);
                }
                steps
            }
            FanOut::Concurrent => {
                join_all(frames.iter().map(|frame| self.resolve(frame))).await
            }
        }
    }

    async fn resolve(&self, frame: &Frame) -> Step {
        let item_id = &frame.item_id;
        if on_path(frame.path.as_ref(), item_id) {
            tracing::debug!(%item_id, "cycle detected; truncating branch");
            return Step::Skip;
        }

        let item = match self.items.get_item(item_id).await {
            Ok(Some(item)) => item,
            Ok(None) => return Step::Skip,
            Err(e) => {
                tracing::warn!(%item_id, "item lookup failed: {e}");
                return Step::Skip;
            }
        };

        // A failed edge lookup is indistinguishable from "no recipe".
        let edges = match self.dependencies.get_dependencies(item_id).await {
            Ok(edges) => edges,
            Err(e) => {
                tracing::warn!(%item_id, "dependency lookup failed: {e}");
                Vec::new()
            }
        };

        if edges.is_empty() {
            Step::Base(ResourceTotal::base(&item, frame.multiplier))
        } else {
            Step::Expand(edges)
        }
    }
}

fn canonical_order(a: &DependencyEdge, b: &DependencyEdge) -> core::cmp::Ordering {
    a.component_id
        .cmp(&b.component_id)
        .then_with(|| a.quantity.value().total_cmp(&b.quantity.value()))
}
