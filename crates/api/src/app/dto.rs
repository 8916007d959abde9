use serde::{Deserialize, Serialize};

use forgebom_core::{ItemId, Quantity};
use forgebom_inventory::DependencyEdge;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ResourcesQuery {
    /// Units of the root item to produce (defaults to one).
    pub quantity: Option<f64>,
}

impl ResourcesQuery {
    pub fn multiplier(&self) -> Result<Quantity, forgebom_core::DomainError> {
        match self.quantity {
            Some(q) => Quantity::new(q),
            None => Ok(Quantity::ONE),
        }
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ComponentResponse {
    pub id: ItemId,
    pub quantity: f64,
}

#[derive(Debug, Serialize)]
pub struct DependencyGroupResponse {
    pub parent: ItemId,
    pub components: Vec<ComponentResponse>,
}

pub fn dependency_group(parent: ItemId, edges: Vec<DependencyEdge>) -> DependencyGroupResponse {
    DependencyGroupResponse {
        parent,
        components: edges
            .into_iter()
            .map(|e| ComponentResponse {
                id: e.component_id,
                quantity: e.quantity.value(),
            })
            .collect(),
    }
}
