use serde::{Deserialize, Serialize};

use forgebom_core::{DomainError, ItemId};

/// A catalog item (raw material, intermediate or finished good).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Category tag such as `material`, `refined-material` or `weapon`.
    ///
    /// The set of categories is open; nothing in the calculation branches on it.
    #[serde(rename = "type")]
    pub item_type: String,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        item_type: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            item_type: item_type.into(),
        })
    }
}
