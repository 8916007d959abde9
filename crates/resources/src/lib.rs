//! Base-resource aggregation.
//!
//! Given a manufactured item, walk its recipe graph and report how much of
//! every base material (an item with no recipe of its own) is consumed to
//! produce it. Missing items, failed lookups and cycles are data conditions,
//! not errors: the affected branch simply contributes nothing.

pub mod aggregator;
pub mod config;
pub mod total;

pub use aggregator::ResourceAggregator;
pub use config::{AggregatorConfig, FanOut, ParseFanOutError};
pub use total::{ResourceTotal, ResourceTotals};
