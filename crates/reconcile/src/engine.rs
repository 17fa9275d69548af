//! Reconciliation of proposed actions against the inventory store.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use chefbyte_core::{DomainError, InventoryItem, ItemName};
use chefbyte_store::InventoryStore;

use crate::action::{ActionValidator, ValidatedAction};
use crate::matcher::NameMatcher;
use crate::outcome::ActionOutcome;

/// Failure to obtain the initial inventory snapshot.
///
/// This is the only condition that aborts a reconciliation pass; every
/// failure after the snapshot is reported per action instead.
#[derive(Debug, Error)]
#[error("could not load inventory snapshot: {0}")]
pub struct SnapshotError(#[from] pub chefbyte_store::StoreError);

/// Orchestrates one reconciliation pass: validate each action, resolve it
/// against the current snapshot, commit the mutation, report the outcome.
///
/// Actions are processed strictly sequentially, in input order, and the
/// working snapshot is refreshed after every applied mutation so that a
/// later action can match an item created earlier in the same batch. One
/// store transaction per action; there is no batch-wide atomicity.
#[derive(Debug, Default, Copy, Clone)]
pub struct ReconciliationEngine {
    matcher: NameMatcher,
    validator: ActionValidator,
}

impl ReconciliationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matcher(matcher: NameMatcher) -> Self {
        Self {
            matcher,
            validator: ActionValidator::new(),
        }
    }

    /// Run one reconciliation pass over `actions`.
    ///
    /// Never panics and never propagates per-action failures: the returned
    /// sequence carries one outcome per input action, in input order.
    pub fn reconcile(
        &self,
        store: &dyn InventoryStore,
        actions: &[Value],
    ) -> Result<Vec<ActionOutcome>, SnapshotError> {
        let mut snapshot = store.list_all()?;
        debug!(items = snapshot.len(), actions = actions.len(), "reconciliation pass started");

        let mut outcomes = Vec::with_capacity(actions.len());
        for raw in actions {
            let outcome = match self.validator.validate(raw) {
                Ok(action) => self.apply(store, &mut snapshot, raw, action),
                Err(e) => ActionOutcome::rejected(raw, e.to_string()),
            };
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    fn apply(
        &self,
        store: &dyn InventoryStore,
        snapshot: &mut Vec<InventoryItem>,
        raw: &Value,
        action: ValidatedAction,
    ) -> ActionOutcome {
        let matched = self
            .matcher
            .closest(action.name().as_str(), snapshot.iter().map(|i| i.name.as_str()))
            .map(str::to_string);

        match action {
            ValidatedAction::Add { name, quantity } => match matched {
                Some(existing) => {
                    debug!(candidate = %name, %existing, "duplicate add refused");
                    ActionOutcome::warned(
                        raw,
                        format!(
                            "item '{name}' is similar to existing item '{existing}'; \
                             consider updating instead"
                        ),
                    )
                }
                None => self.insert(store, snapshot, raw, &name, quantity),
            },
            ValidatedAction::Update { name, quantity } => match matched {
                Some(existing) => {
                    if quantity <= 0 {
                        // Quantity-exhausted policy: never persist <= 0.
                        self.remove(store, snapshot, raw, &existing, || {
                            format!(
                                "item '{existing}' deleted (quantity {quantity} is zero or less)"
                            )
                        })
                    } else {
                        self.set_quantity(store, snapshot, raw, &existing, quantity)
                    }
                }
                None => ActionOutcome::rejected(
                    raw,
                    DomainError::not_found(format!("item not found for update: '{name}'"))
                        .to_string(),
                ),
            },
            ValidatedAction::Delete { name } => match matched {
                Some(existing) => self.remove(store, snapshot, raw, &existing, || {
                    format!("item '{existing}' deleted")
                }),
                None => ActionOutcome::rejected(
                    raw,
                    DomainError::not_found(format!("item not found for delete: '{name}'"))
                        .to_string(),
                ),
            },
        }
    }

    fn insert(
        &self,
        store: &dyn InventoryStore,
        snapshot: &mut Vec<InventoryItem>,
        raw: &Value,
        name: &ItemName,
        quantity: i64,
    ) -> ActionOutcome {
        match store.insert(name, quantity, None) {
            Ok(item) => {
                let message = format!("item '{}' added with quantity {quantity}", item.name);
                snapshot.push(item);
                ActionOutcome::applied(raw, message)
            }
            Err(e) => store_rejection(raw, e),
        }
    }

    fn set_quantity(
        &self,
        store: &dyn InventoryStore,
        snapshot: &mut [InventoryItem],
        raw: &Value,
        existing: &str,
        quantity: i64,
    ) -> ActionOutcome {
        let Some(item) = snapshot.iter_mut().find(|i| i.name == existing) else {
            // Matched names always come from the snapshot.
            return store_rejection(
                raw,
                chefbyte_store::StoreError::Backend(format!(
                    "snapshot lost track of '{existing}'"
                )),
            );
        };

        match store.set_quantity(item.id, quantity) {
            Ok(()) => {
                item.quantity = quantity;
                ActionOutcome::applied(raw, format!("item '{existing}' updated to quantity {quantity}"))
            }
            Err(e) => store_rejection(raw, e),
        }
    }

    fn remove(
        &self,
        store: &dyn InventoryStore,
        snapshot: &mut Vec<InventoryItem>,
        raw: &Value,
        existing: &str,
        message: impl FnOnce() -> String,
    ) -> ActionOutcome {
        let Some(pos) = snapshot.iter().position(|i| i.name == existing) else {
            return store_rejection(
                raw,
                chefbyte_store::StoreError::Backend(format!(
                    "snapshot lost track of '{existing}'"
                )),
            );
        };

        match store.delete(snapshot[pos].id) {
            Ok(()) => {
                snapshot.remove(pos);
                ActionOutcome::applied(raw, message())
            }
            Err(e) => store_rejection(raw, e),
        }
    }
}

fn store_rejection(raw: &Value, e: chefbyte_store::StoreError) -> ActionOutcome {
    ActionOutcome::rejected(raw, DomainError::store_failure(e.to_string()).to_string())
}
