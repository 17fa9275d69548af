//! `chefbyte-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP, no storage).

pub mod error;
pub mod item;

pub use error::{DomainError, DomainResult};
pub use item::{InventoryItem, ItemId, ItemName, MAX_NAME_LEN, normalize};
