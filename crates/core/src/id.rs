//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog item (e.g. `iron-sword`).
///
/// Item ids are human-chosen slugs rather than generated ids, so the only
/// rule enforced here is that they are non-empty. Ordering is byte-wise and
/// case-sensitive, which is the presentation order used for resource lists.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Build an identifier, rejecting empty or all-whitespace values.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_id("ItemId: must not be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_non_empty_ids() {
        let id: ItemId = "iron-ore".parse().unwrap();
        assert_eq!(id.as_str(), "iron-ore");
        assert_eq!(id.to_string(), "iron-ore");
    }

    #[test]
    fn rejects_blank_ids() {
        assert!(matches!("".parse::<ItemId>(), Err(DomainError::InvalidId(_))));
        assert!(matches!("   ".parse::<ItemId>(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn ordering_is_case_sensitive_bytewise() {
        let mut ids: Vec<ItemId> = ["coal", "Coal", "b", "a"]
            .into_iter()
            .map(|s| s.parse().unwrap())
            .collect();
        ids.sort();
        let ids: Vec<&str> = ids.iter().map(ItemId::as_str).collect();
        assert_eq!(ids, vec!["Coal", "a", "b", "coal"]);
    }

    #[test]
    fn serde_is_transparent_and_validating() {
        let id: ItemId = serde_json::from_str("\"coal\"").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"coal\"");
        assert!(serde_json::from_str::<ItemId>("\"\"").is_err());
    }
}
