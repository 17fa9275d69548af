use std::collections::HashMap;
use std::sync::RwLock;

use chrono::NaiveDate;

use chefbyte_core::{InventoryItem, ItemId, ItemName, normalize};

use crate::contract::{InventoryStore, StoreError};

/// In-memory keyed inventory store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    items: RwLock<HashMap<ItemId, InventoryItem>>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn list_all(&self) -> Result<Vec<InventoryItem>, StoreError> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        let mut all: Vec<InventoryItem> = items.values().cloned().collect();
        // Deterministic listing order: case-folded name, then stored name.
        all.sort_by(|a, b| {
            normalize(&a.name)
                .cmp(&normalize(&b.name))
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(all)
    }

    fn find_by_name(&self, exact_name: &str) -> Result<Option<InventoryItem>, StoreError> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        Ok(items.values().find(|i| i.name == exact_name).cloned())
    }

    fn insert(
        &self,
        name: &ItemName,
        quantity: i64,
        expiration_date: Option<NaiveDate>,
    ) -> Result<InventoryItem, StoreError> {
        if quantity <= 0 {
            return Err(StoreError::NonPositiveQuantity(quantity));
        }

        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        let normalized = name.normalized();
        if let Some(existing) = items.values().find(|i| normalize(&i.name) == normalized) {
            return Err(StoreError::DuplicateName(existing.name.clone()));
        }

        let item = InventoryItem {
            id: ItemId::new(),
            name: name.as_str().to_string(),
            quantity,
            expiration_date,
        };
        items.insert(item.id, item.clone());
        Ok(item)
    }

    fn set_quantity(&self, id: ItemId, quantity: i64) -> Result<(), StoreError> {
        if quantity <= 0 {
            return Err(StoreError::NonPositiveQuantity(quantity));
        }

        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        let item = items.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        item.quantity = quantity;
        Ok(())
    }

    fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        items.remove(&id).ok_or(StoreError::NotFound(id))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> ItemName {
        ItemName::new(s).unwrap()
    }

    #[test]
    fn insert_then_find_by_exact_name() {
        let store = InMemoryInventoryStore::new();
        let inserted = store.insert(&name("Milk"), 2, None).unwrap();

        let found = store.find_by_name("Milk").unwrap().unwrap();
        assert_eq!(found.id, inserted.id);
        assert_eq!(found.quantity, 2);
        assert_eq!(found.expiration_date, None);

        // Exact lookup is case-sensitive; fuzzy matching lives elsewhere.
        assert!(store.find_by_name("milk").unwrap().is_none());
    }

    #[test]
    fn insert_rejects_case_insensitive_duplicate() {
        let store = InMemoryInventoryStore::new();
        store.insert(&name("Milk"), 1, None).unwrap();

        let err = store.insert(&name("MILK"), 3, None).unwrap_err();
        assert_eq!(err, StoreError::DuplicateName("Milk".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn insert_rejects_non_positive_quantity() {
        let store = InMemoryInventoryStore::new();
        let err = store.insert(&name("Milk"), 0, None).unwrap_err();
        assert_eq!(err, StoreError::NonPositiveQuantity(0));
        assert!(store.is_empty());
    }

    #[test]
    fn set_quantity_updates_absolute_value() {
        let store = InMemoryInventoryStore::new();
        let item = store.insert(&name("Eggs"), 12, None).unwrap();

        store.set_quantity(item.id, 6).unwrap();
        assert_eq!(store.find_by_name("Eggs").unwrap().unwrap().quantity, 6);
    }

    #[test]
    fn set_quantity_refuses_to_persist_zero_or_less() {
        let store = InMemoryInventoryStore::new();
        let item = store.insert(&name("Eggs"), 12, None).unwrap();

        let err = store.set_quantity(item.id, 0).unwrap_err();
        assert_eq!(err, StoreError::NonPositiveQuantity(0));
        // Item untouched.
        assert_eq!(store.find_by_name("Eggs").unwrap().unwrap().quantity, 12);
    }

    #[test]
    fn set_quantity_unknown_id_is_not_found() {
        let store = InMemoryInventoryStore::new();
        let id = ItemId::new();
        assert_eq!(store.set_quantity(id, 1).unwrap_err(), StoreError::NotFound(id));
    }

    #[test]
    fn delete_removes_item() {
        let store = InMemoryInventoryStore::new();
        let item = store.insert(&name("Bread"), 1, None).unwrap();

        store.delete(item.id).unwrap();
        assert!(store.find_by_name("Bread").unwrap().is_none());

        // Second delete of the same id fails.
        assert_eq!(store.delete(item.id).unwrap_err(), StoreError::NotFound(item.id));
    }

    #[test]
    fn arc_wrapped_store_satisfies_the_contract() {
        fn count(store: &impl InventoryStore) -> usize {
            store.list_all().unwrap().len()
        }

        let store = std::sync::Arc::new(InMemoryInventoryStore::new());
        store.insert(&name("Milk"), 1, None).unwrap();
        assert_eq!(count(&store), 1);
    }

    #[test]
    fn list_all_orders_by_folded_name() {
        let store = InMemoryInventoryStore::new();
        store.insert(&name("banana"), 1, None).unwrap();
        store.insert(&name("Apple"), 1, None).unwrap();
        store.insert(&name("Cheddar"), 1, None).unwrap();

        let names: Vec<String> = store.list_all().unwrap().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Apple", "banana", "Cheddar"]);
    }
}
