//! Proposed-action parsing and validation.
//!
//! Action records arrive from an untrusted source (a language model). They
//! are parsed field by field — never evaluated — and one record's failure
//! never aborts validation of its siblings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use chefbyte_core::{DomainError, DomainResult, ItemName};

/// Recognized mutation kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Add,
    Update,
    Delete,
}

/// A structurally valid mutation request.
///
/// Quantity is guaranteed present for add/update and carries no meaning for
/// delete, so delete simply does not have one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Add { name: ItemName, quantity: i64 },
    Update { name: ItemName, quantity: i64 },
    Delete { name: ItemName },
}

impl ValidatedAction {
    pub fn kind(&self) -> ActionKind {
        match self {
            ValidatedAction::Add { .. } => ActionKind::Add,
            ValidatedAction::Update { .. } => ActionKind::Update,
            ValidatedAction::Delete { .. } => ActionKind::Delete,
        }
    }

    pub fn name(&self) -> &ItemName {
        match self {
            ValidatedAction::Add { name, .. }
            | ValidatedAction::Update { name, .. }
            | ValidatedAction::Delete { name } => name,
        }
    }
}

/// Validates raw, untrusted action records one at a time.
#[derive(Debug, Default, Copy, Clone)]
pub struct ActionValidator;

impl ActionValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a single raw record.
    ///
    /// Tolerates extra fields; rejects with [`DomainError::MalformedAction`]
    /// on missing/non-conforming fields and [`DomainError::NameTooLong`] on
    /// names over the storage limit, regardless of kind.
    pub fn validate(&self, raw: &Value) -> DomainResult<ValidatedAction> {
        let record = raw
            .as_object()
            .ok_or_else(|| DomainError::malformed("action record must be a JSON object"))?;

        let kind = match record.get("action") {
            Some(Value::String(s)) => match s.to_ascii_lowercase().as_str() {
                "add" => ActionKind::Add,
                "update" => ActionKind::Update,
                "delete" => ActionKind::Delete,
                other => {
                    return Err(DomainError::malformed(format!(
                        "unrecognized action '{other}'"
                    )));
                }
            },
            Some(other) => {
                return Err(DomainError::malformed(format!(
                    "'action' must be a string, got {other}"
                )));
            }
            None => return Err(DomainError::malformed("missing 'action' field")),
        };

        let name_raw = match record.get("item_name") {
            Some(Value::String(s)) => s.as_str(),
            Some(other) => {
                return Err(DomainError::malformed(format!(
                    "'item_name' must be a string, got {other}"
                )));
            }
            None => return Err(DomainError::malformed("missing 'item_name' field")),
        };
        let name = ItemName::new(name_raw)?;

        match kind {
            ActionKind::Delete => Ok(ValidatedAction::Delete { name }),
            ActionKind::Add => Ok(ValidatedAction::Add {
                name,
                quantity: integer_quantity(record.get("quantity"))?,
            }),
            ActionKind::Update => Ok(ValidatedAction::Update {
                name,
                quantity: integer_quantity(record.get("quantity"))?,
            }),
        }
    }
}

fn integer_quantity(value: Option<&Value>) -> DomainResult<i64> {
    match value {
        Some(v) => v.as_i64().ok_or_else(|| {
            DomainError::malformed(format!("'quantity' must be an integer, got {v}"))
        }),
        None => Err(DomainError::malformed("missing 'quantity' field")),
    }
}
