//! Positive real-valued quantities (edge weights and production multipliers).

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A finite, strictly positive quantity (a value object: compared by value,
/// never mutated).
///
/// Recipes are not restricted to whole units (e.g. `0.5` of an ingot), so the
/// representation is `f64`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Quantity(f64);

impl Quantity {
    /// One unit.
    pub const ONE: Quantity = Quantity(1.0);

    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::validation(format!(
                "quantity must be finite (got {value})"
            )));
        }
        if value <= 0.0 {
            return Err(DomainError::validation(format!(
                "quantity must be positive (got {value})"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<f64> for Quantity {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for f64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_values() {
        assert_eq!(Quantity::new(3.0).unwrap().value(), 3.0);
        assert_eq!(Quantity::new(0.25).unwrap().value(), 0.25);
        assert_eq!(Quantity::default(), Quantity::ONE);
    }

    #[test]
    fn rejects_zero_negative_and_non_finite() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(
                matches!(Quantity::new(bad), Err(DomainError::Validation(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn deserializes_through_validation() {
        let q: Quantity = serde_json::from_str("2").unwrap();
        assert_eq!(q.value(), 2.0);
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert!(serde_json::from_str::<Quantity>("-3.5").is_err());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the product of two valid quantities is itself valid.
            #[test]
            fn product_stays_positive(a in 0.001f64..1_000.0, b in 0.001f64..1_000.0) {
                let a = Quantity::new(a).unwrap();
                let b = Quantity::new(b).unwrap();
                prop_assert!(Quantity::new(a.value() * b.value()).is_ok());
            }
        }
    }
}
