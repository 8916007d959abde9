use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How sibling subtrees of a recipe are scheduled.
///
/// Both strategies produce identical totals; `Concurrent` only overlaps the
/// lookups of sibling components.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FanOut {
    #[default]
    Sequential,
    Concurrent,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown fan-out strategy `{0}` (expected `sequential` or `concurrent`)")]
pub struct ParseFanOutError(pub String);

impl FromStr for FanOut {
    type Err = ParseFanOutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(FanOut::Sequential),
            "concurrent" => Ok(FanOut::Concurrent),
            other => Err(ParseFanOutError(other.to_string())),
        }
    }
}

impl core::fmt::Display for FanOut {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FanOut::Sequential => f.write_str("sequential"),
            FanOut::Concurrent => f.write_str("concurrent"),
        }
    }
}

/// Aggregator tuning knobs.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    pub fan_out: FanOut,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fan_out_case_insensitively() {
        assert_eq!("sequential".parse::<FanOut>().unwrap(), FanOut::Sequential);
        assert_eq!(" Concurrent ".parse::<FanOut>().unwrap(), FanOut::Concurrent);
        assert_eq!(
            "parallel".parse::<FanOut>(),
            Err(ParseFanOutError("parallel".to_string()))
        );
    }

    #[test]
    fn defaults_to_sequential() {
        assert_eq!(AggregatorConfig::default().fan_out, FanOut::Sequential);
        assert_eq!(FanOut::default().to_string(), "sequential");
    }
}
