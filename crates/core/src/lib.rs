//! `forgebom-core` — domain building blocks shared by every forgebom crate.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod quantity;

pub use error::DomainError;
pub use id::ItemId;
pub use quantity::Quantity;
