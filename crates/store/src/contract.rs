use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;

use chefbyte_core::{InventoryItem, ItemId, ItemName};

/// Inventory store operation error.
///
/// These are **infrastructure errors** (storage, constraints) as opposed to
/// domain errors (validation, resolution).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The case-folded uniqueness constraint on item names was violated.
    #[error("an item named '{0}' already exists (case-insensitive)")]
    DuplicateName(String),

    /// No item with the given id.
    #[error("no item with id {0}")]
    NotFound(ItemId),

    /// Quantities at or below zero are never persisted; callers must delete
    /// the item instead.
    #[error("quantity must be positive, got {0}")]
    NonPositiveQuantity(i64),

    /// Backend failure (connection, lock, constraint surfaced by the engine).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Keyed inventory storage with a uniqueness constraint on normalized name.
///
/// This is the minimal contract the reconciliation engine consumes. It makes
/// no storage assumptions: the in-memory implementation backs tests and the
/// demo app, and a SQL-backed one can slot in unchanged.
///
/// Implementations must:
/// - enforce at most one item per case-folded name
/// - never persist a quantity at or below zero
/// - treat each call as one committed transaction (no batching)
pub trait InventoryStore: Send + Sync {
    /// Current inventory, in a deterministic order (case-folded name).
    fn list_all(&self) -> Result<Vec<InventoryItem>, StoreError>;

    /// Lookup by exact (case-sensitive) stored name.
    fn find_by_name(&self, exact_name: &str) -> Result<Option<InventoryItem>, StoreError>;

    /// Insert a new item. Fails with [`StoreError::DuplicateName`] if the
    /// normalized name already exists.
    fn insert(
        &self,
        name: &ItemName,
        quantity: i64,
        expiration_date: Option<NaiveDate>,
    ) -> Result<InventoryItem, StoreError>;

    /// Set an item's quantity to an absolute value. Fails with
    /// [`StoreError::NotFound`] if the id is absent.
    fn set_quantity(&self, id: ItemId, quantity: i64) -> Result<(), StoreError>;

    /// Delete an item. Fails with [`StoreError::NotFound`] if the id is absent.
    fn delete(&self, id: ItemId) -> Result<(), StoreError>;
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn list_all(&self) -> Result<Vec<InventoryItem>, StoreError> {
        (**self).list_all()
    }

    fn find_by_name(&self, exact_name: &str) -> Result<Option<InventoryItem>, StoreError> {
        (**self).find_by_name(exact_name)
    }

    fn insert(
        &self,
        name: &ItemName,
        quantity: i64,
        expiration_date: Option<NaiveDate>,
    ) -> Result<InventoryItem, StoreError> {
        (**self).insert(name, quantity, expiration_date)
    }

    fn set_quantity(&self, id: ItemId, quantity: i64) -> Result<(), StoreError> {
        (**self).set_quantity(id, quantity)
    }

    fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        (**self).delete(id)
    }
}
