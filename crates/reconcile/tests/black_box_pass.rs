//! Black-box reconciliation passes: a model reply (text) goes through strict
//! parsing, then a full engine pass against a live in-memory store.

use chefbyte_core::ItemName;
use chefbyte_llm::parse_actions;
use chefbyte_reconcile::{OutcomeStatus, ReconciliationEngine};
use chefbyte_store::{InMemoryInventoryStore, InventoryStore};

fn seeded(entries: &[(&str, i64)]) -> InMemoryInventoryStore {
    let store = InMemoryInventoryStore::new();
    for (name, qty) in entries {
        store
            .insert(&ItemName::new(*name).unwrap(), *qty, None)
            .unwrap();
    }
    store
}

#[test]
fn grocery_run_reply_reconciles_end_to_end() {
    let store = seeded(&[("milk", 1), ("Eggs", 6)]);
    let engine = ReconciliationEngine::new();

    // Typical fenced reply after "I bought a loaf of bread and used up the milk".
    let reply = r#"```json
[
  {"action": "add", "item_name": "Sourdough Bread", "quantity": 1},
  {"action": "update", "item_name": "Milk", "quantity": 0}
]
```"#;

    let actions = parse_actions(reply).unwrap();
    let outcomes = engine.reconcile(&store, &actions).unwrap();

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].status, OutcomeStatus::Applied);
    assert_eq!(outcomes[1].status, OutcomeStatus::Applied);
    assert!(outcomes[1].message.contains("deleted"));

    let names: Vec<String> = store.list_all().unwrap().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Eggs", "Sourdough Bread"]);
}

#[test]
fn sloppy_reply_is_reconciled_without_aborting() {
    let store = seeded(&[("Tomatoes", 4)]);
    let engine = ReconciliationEngine::new();

    // A mix of near-duplicate spelling, a missing quantity, and an unknown
    // target: three independent dispositions, one pass.
    let reply = r#"[
        {"action": "add", "item_name": "tomatos", "quantity": 2},
        {"action": "add", "item_name": "Basil"},
        {"action": "delete", "item_name": "Oat Milk"}
    ]"#;

    let actions = parse_actions(reply).unwrap();
    let outcomes = engine.reconcile(&store, &actions).unwrap();

    assert_eq!(outcomes[0].status, OutcomeStatus::Warned);
    assert_eq!(outcomes[1].status, OutcomeStatus::Rejected);
    assert_eq!(outcomes[2].status, OutcomeStatus::Rejected);

    // The near-duplicate add must not have created a second tomato row.
    assert_eq!(store.len(), 1);
    assert_eq!(store.find_by_name("Tomatoes").unwrap().unwrap().quantity, 4);
}
