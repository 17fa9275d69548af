//! `chefbyte-reconcile` — the inventory reconciliation engine.
//!
//! Takes (a) the current inventory snapshot and (b) a list of proposed
//! actions of untrusted structure, and produces a deterministic, safe set of
//! mutations applied to the store: near-duplicate item names are detected,
//! ambiguous adds are refused, and every action gets a per-action outcome.
//!
//! No IO beyond the [`chefbyte_store::InventoryStore`] calls; nothing here
//! blocks on network or user input.

pub mod action;
pub mod engine;
pub mod matcher;
pub mod outcome;

pub use action::{ActionKind, ActionValidator, ValidatedAction};
pub use engine::{ReconciliationEngine, SnapshotError};
pub use matcher::{DEFAULT_THRESHOLD, NameMatcher, similarity};
pub use outcome::{ActionOutcome, OutcomeStatus};
