use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};

use forgebom_core::ItemId;
use forgebom_inventory::Item;

/// Total amount of one base material needed for a requested production run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceTotal {
    pub item_id: ItemId,
    pub item_name: String,
    pub item_type: String,
    pub total_quantity: f64,
    /// Always `true` today: only terminal items are reported.
    pub is_base_material: bool,
}

impl ResourceTotal {
    /// Record for a base material reached with the given multiplier.
    pub fn base(item: &Item, quantity: f64) -> Self {
        Self {
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            item_type: item.item_type.clone(),
            total_quantity: quantity,
            is_base_material: true,
        }
    }
}

/// Running totals keyed by item id (at most one entry per base item).
///
/// Adding a record for an id already present sums the quantities and keeps
/// the name/type of the record added first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceTotals {
    by_item: BTreeMap<ItemId, ResourceTotal>,
}

impl ResourceTotals {
    pub fn add(&mut self, total: ResourceTotal) {
        match self.by_item.entry(total.item_id.clone()) {
            Entry::Occupied(mut existing) => {
                existing.get_mut().total_quantity += total.total_quantity;
            }
            Entry::Vacant(slot) => {
                slot.insert(total);
            }
        }
    }

    /// Totals ordered by `item_id` (byte-wise, case-sensitive).
    pub fn into_vec(self) -> Vec<ResourceTotal> {
        self.by_item.into_values().collect()
    }
}
