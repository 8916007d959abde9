use serde::{Deserialize, Serialize};

use forgebom_core::{ItemId, Quantity};

/// "Producing one unit of `parent_id` consumes `quantity` units of `component_id`."
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub parent_id: ItemId,
    pub component_id: ItemId,
    pub quantity: Quantity,
}

impl DependencyEdge {
    pub fn new(parent_id: ItemId, component_id: ItemId, quantity: Quantity) -> Self {
        Self {
            parent_id,
            component_id,
            quantity,
        }
    }
}
