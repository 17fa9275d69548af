//! `chefbyte-store` — inventory persistence boundary.
//!
//! The reconciliation engine consumes storage through the [`InventoryStore`]
//! trait only; this crate defines that contract plus an in-memory
//! implementation for tests and the demo app.

pub mod contract;
pub mod in_memory;

pub use contract::{InventoryStore, StoreError};
pub use in_memory::InMemoryInventoryStore;
